use crate::model::Product;

pub mod demo;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// One block of output: a header and the products that matched under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub header: String,
    pub matches: Vec<Product>,
    /// Appended after each product name, e.g. "is green".
    pub caption: Option<String>,
}

impl Section {
    pub fn new(header: impl Into<String>, matches: Vec<Product>) -> Self {
        Self {
            header: header.into(),
            matches,
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.matches.iter().map(|p| p.name()).collect()
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub sections: Vec<Section>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }
}
