//! The filter engine.
//!
//! Filtering knows nothing about colors, sizes or any other attribute. It only
//! asks a [`Specification`] about each item, so adding a criterion never
//! touches this module.

use crate::spec::Specification;

/// Return the items satisfying `spec`, in input order.
pub fn filter<'a, T, S>(items: &'a [T], spec: &S) -> Vec<&'a T>
where
    S: Specification<T> + ?Sized,
{
    items.iter().filter(|item| spec.is_satisfied(item)).collect()
}

/// Like [`filter`], but clones the matches.
pub fn filter_owned<T, S>(items: &[T], spec: &S) -> Vec<T>
where
    T: Clone,
    S: Specification<T> + ?Sized,
{
    filter(items, spec).into_iter().cloned().collect()
}
