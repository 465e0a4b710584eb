//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It turns loose inputs (textual criteria such as `color=green`)
//! into a [`ProductSpec`], dispatches to `commands/*.rs` and hands back a
//! `CmdResult`. It never prints.

use crate::commands;
use crate::error::{FilterError, Result};
use crate::model::{sample_products, Color, Product, Size};
use crate::spec::ProductSpec;
use tracing::info;

/// The main API facade, owning the catalog it filters.
pub struct FilterApi {
    products: Vec<Product>,
}

impl FilterApi {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// An API over the fixed demo catalog.
    pub fn with_sample_catalog() -> Self {
        Self::new(sample_products())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn demo(&self) -> Result<commands::CmdResult> {
        info!(products = self.products.len(), "running demo");
        commands::demo::run(&self.products)
    }

    pub fn list(&self, spec: &ProductSpec) -> Result<commands::CmdResult> {
        commands::list::run(&self.products, spec)
    }

    /// List products matching every `attr=value` criterion. No criteria lists everything.
    pub fn list_matching<I: AsRef<str>>(&self, criteria: &[I]) -> Result<commands::CmdResult> {
        let spec = parse_criteria(criteria)?;
        self.list(&spec)
    }
}

/// Parse `color=green size=large` style criteria into one conjunction.
pub fn parse_criteria<I: AsRef<str>>(criteria: &[I]) -> Result<ProductSpec> {
    criteria
        .iter()
        .map(|c| parse_criterion(c.as_ref()))
        .collect::<Result<Vec<_>>>()
        .map(ProductSpec::And)
}

/// Parse one `attr=value` criterion.
pub fn parse_criterion(input: &str) -> Result<ProductSpec> {
    let Some((attr, value)) = input.split_once('=') else {
        return Err(FilterError::InvalidCriterion(input.to_string()));
    };

    match attr.trim().to_lowercase().as_str() {
        "color" => Ok(ProductSpec::color(value.parse::<Color>()?)),
        "size" => Ok(ProductSpec::size(value.parse::<Size>()?)),
        _ => Err(FilterError::InvalidCriterion(input.to_string())),
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Section};
