//! Product specifications.
//!
//! A specification is a rule that decides whether a single item matches. New
//! criteria are added by writing a new specification, never by editing the
//! filter that applies them:
//!
//! ```
//! use prodfilter::filter::filter;
//! use prodfilter::model::{sample_products, Color, Size};
//! use prodfilter::spec::ProductSpec;
//!
//! let products = sample_products();
//! let spec = ProductSpec::color(Color::Blue) & ProductSpec::size(Size::Large);
//! let names: Vec<_> = filter(&products, &spec).into_iter().map(|p| p.name()).collect();
//! assert_eq!(names, vec!["House"]);
//! ```
//!
//! There is no base specification value to construct. `Specification` is a
//! trait and `ProductSpec` only has concrete variants:
//!
//! ```compile_fail
//! use prodfilter::spec::ProductSpec;
//!
//! let base = ProductSpec::Abstract;
//! ```

use crate::model::{Color, Product, Size};
use std::fmt;
use std::ops::BitAnd;

/// A rule over items of type `T`.
///
/// Implementations must be pure: the same item always yields the same answer.
pub trait Specification<T> {
    fn is_satisfied(&self, item: &T) -> bool;
}

/// Any `Fn(&T) -> bool` is a specification, so one-off criteria need no new type.
impl<T, F> Specification<T> for F
where
    F: Fn(&T) -> bool,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self(item)
    }
}

/// The built-in product criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductSpec {
    /// Matches products of exactly this color.
    Color(Color),
    /// Matches products of exactly this size.
    Size(Size),
    /// Matches when every child matches. With no children it matches everything.
    And(Vec<ProductSpec>),
}

impl ProductSpec {
    pub fn color(color: Color) -> Self {
        ProductSpec::Color(color)
    }

    pub fn size(size: Size) -> Self {
        ProductSpec::Size(size)
    }

    /// Conjunction of `specs`, kept in the given order.
    pub fn all(specs: impl IntoIterator<Item = ProductSpec>) -> Self {
        ProductSpec::And(specs.into_iter().collect())
    }

    /// The empty conjunction.
    pub fn everything() -> Self {
        ProductSpec::And(Vec::new())
    }

    /// Combine with another spec, appending to an existing conjunction instead of nesting.
    pub fn and(self, other: ProductSpec) -> Self {
        match self {
            ProductSpec::And(mut specs) => {
                specs.push(other);
                ProductSpec::And(specs)
            }
            single => ProductSpec::And(vec![single, other]),
        }
    }
}

impl Specification<Product> for ProductSpec {
    fn is_satisfied(&self, item: &Product) -> bool {
        match self {
            ProductSpec::Color(color) => item.color() == *color,
            ProductSpec::Size(size) => item.size() == *size,
            ProductSpec::And(specs) => specs.iter().all(|spec| spec.is_satisfied(item)),
        }
    }
}

impl BitAnd for ProductSpec {
    type Output = ProductSpec;

    fn bitand(self, rhs: ProductSpec) -> ProductSpec {
        self.and(rhs)
    }
}

impl fmt::Display for ProductSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductSpec::Color(color) => write!(f, "color={}", color),
            ProductSpec::Size(size) => write!(f, "size={}", size),
            ProductSpec::And(specs) if specs.is_empty() => f.write_str("everything"),
            ProductSpec::And(specs) => {
                for (i, spec) in specs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" and ")?;
                    }
                    match spec {
                        ProductSpec::And(inner) if inner.len() > 1 => write!(f, "({})", spec)?,
                        _ => write!(f, "{}", spec)?,
                    }
                }
                Ok(())
            }
        }
    }
}

/// Conjunction over arbitrary specifications, for mixing custom rules with the built-in ones.
pub struct AllOf<'a, T> {
    specs: Vec<Box<dyn Specification<T> + 'a>>,
}

impl<'a, T> AllOf<'a, T> {
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    pub fn with(mut self, spec: impl Specification<T> + 'a) -> Self {
        self.specs.push(Box::new(spec));
        self
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T> Default for AllOf<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Specification<T> for AllOf<'_, T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied(item))
    }
}

impl<T> fmt::Debug for AllOf<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllOf")
            .field("specs", &self.specs.len())
            .finish()
    }
}
