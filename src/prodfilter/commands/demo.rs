use crate::commands::{CmdResult, Section};
use crate::error::Result;
use crate::filter::filter_owned;
use crate::model::{Color, Product, Size};
use crate::spec::ProductSpec;
use tracing::debug;

/// The two walkthrough queries: a single attribute, then a conjunction.
pub fn run(products: &[Product]) -> Result<CmdResult> {
    let green = ProductSpec::color(Color::Green);
    let large_and_blue = ProductSpec::all([
        ProductSpec::color(Color::Blue),
        ProductSpec::size(Size::Large),
    ]);

    let mut result = CmdResult::default();
    for (header, caption, spec) in [
        ("Green products:", "is green", green),
        ("Large and blue products:", "is large and blue", large_and_blue),
    ] {
        let matches = filter_owned(products, &spec);
        debug!(%spec, matched = matches.len(), "demo query");
        result.add_section(Section::new(header, matches).with_caption(caption));
    }

    Ok(result)
}
