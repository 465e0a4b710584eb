use crate::commands::{CmdMessage, CmdResult, Section};
use crate::error::Result;
use crate::filter::filter_owned;
use crate::model::{Color, Product, Size};
use crate::spec::ProductSpec;
use std::collections::HashSet;
use tracing::debug;

pub fn run(products: &[Product], spec: &ProductSpec) -> Result<CmdResult> {
    let matches = filter_owned(products, spec);
    debug!(%spec, total = products.len(), matched = matches.len(), "filtered catalog");

    let mut result = CmdResult::default();
    if matches.is_empty() {
        if is_contradictory(spec) {
            result.add_message(CmdMessage::warning(format!(
                "No product can match {}: it requires two different values for one attribute",
                spec
            )));
        } else {
            result.add_message(CmdMessage::info("No products found."));
        }
    }
    result.add_section(Section::new(format!("Products matching {}:", spec), matches));

    Ok(result)
}

/// True when a conjunction asks for two different colors or two different sizes.
fn is_contradictory(spec: &ProductSpec) -> bool {
    let mut colors: HashSet<Color> = HashSet::new();
    let mut sizes: HashSet<Size> = HashSet::new();
    collect_terms(spec, &mut colors, &mut sizes);
    colors.len() > 1 || sizes.len() > 1
}

fn collect_terms(spec: &ProductSpec, colors: &mut HashSet<Color>, sizes: &mut HashSet<Size>) {
    match spec {
        ProductSpec::Color(color) => {
            colors.insert(*color);
        }
        ProductSpec::Size(size) => {
            sizes.insert(*size);
        }
        ProductSpec::And(specs) => {
            for spec in specs {
                collect_terms(spec, colors, sizes);
            }
        }
    }
}
