pub mod client;
pub mod outline;

use crate::error::Result;

/// One node of a page's table of contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub text: String,
    pub children: Vec<Section>,
}

impl Section {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Section {
            title: title.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub title: String,
    pub exists: bool,
    pub summary: String,
    pub sections: Vec<Section>,
}

impl Page {
    pub fn missing(title: impl Into<String>) -> Self {
        Page {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn exists(&self) -> bool {
        self.exists
    }
}

/// Anything that can resolve a page title to a `Page`.
pub trait PageLookup {
    fn page(&self, title: &str) -> Result<Page>;
}
