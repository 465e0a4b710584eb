use colored::Colorize;
use prodfilter::api::{CmdMessage, MessageLevel, Section};
use prodfilter::config::DisplayConfig;
use unicode_width::UnicodeWidthStr;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", render_message(message));
    }
}

pub(super) fn print_sections(sections: &[Section], config: &DisplayConfig) {
    for section in sections {
        print!("{}", render_section(section, config));
    }
}

fn render_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
    }
}

/// Header line, then one line per match. Captions line up in one column.
fn render_section(section: &Section, config: &DisplayConfig) -> String {
    let mut out = format!("{}\n", section.header.bold());

    let name_width = section
        .matches
        .iter()
        .map(|p| p.name().width())
        .max()
        .unwrap_or(0);

    for product in &section.matches {
        let name = product.name();
        match &section.caption {
            Some(caption) => {
                let padding = " ".repeat(name_width - name.width());
                out.push_str(&format!(
                    "{}{} {}{}\n",
                    config.bullet, name, padding, caption
                ));
            }
            None => out.push_str(&format!("{}{}\n", config.bullet, name)),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodfilter::model::{Color, Product, Size};

    fn plain() -> DisplayConfig {
        colored::control::set_override(false);
        DisplayConfig::default()
    }

    fn section(names: &[&str]) -> Section {
        let matches = names
            .iter()
            .map(|n| Product::new(*n, Color::Green, Size::Small))
            .collect();
        Section::new("Green products:", matches)
    }

    #[test]
    fn renders_header_and_bullets() {
        let config = plain();
        let out = render_section(&section(&["Apple", "Tree"]), &config);
        assert_eq!(out, "Green products:\n * Apple\n * Tree\n");
    }

    #[test]
    fn aligns_captions() {
        let config = plain();
        let out = render_section(&section(&["Apple", "Tree"]).with_caption("is green"), &config);
        assert_eq!(
            out,
            "Green products:\n * Apple is green\n * Tree  is green\n"
        );
    }

    #[test]
    fn empty_section_is_header_only() {
        let config = plain();
        let out = render_section(&section(&[]), &config);
        assert_eq!(out, "Green products:\n");
    }

    #[test]
    fn custom_bullet() {
        colored::control::set_override(false);
        let config = DisplayConfig {
            bullet: "- ".to_string(),
            color: false,
        };
        let out = render_section(&section(&["Apple"]), &config);
        assert_eq!(out, "Green products:\n- Apple\n");
    }

    #[test]
    fn messages_render_plain_text_without_color() {
        colored::control::set_override(false);
        assert_eq!(
            render_message(&CmdMessage::info("No products found.")),
            "No products found."
        );
    }
}
