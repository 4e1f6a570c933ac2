use serde::{Deserialize, Serialize};

/// A single front-page story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Visible link text, trimmed and never empty.
    pub title: String,
    /// The anchor's href as found on the page. Relative links stay relative.
    pub link: String,
}

impl Article {
    /// Returns `None` when the trimmed title is empty.
    pub fn new(title: &str, link: impl Into<String>) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        Some(Self {
            title: title.to_string(),
            link: link.into(),
        })
    }

    pub fn is_relative(&self) -> bool {
        !(self.link.starts_with("http://") || self.link.starts_with("https://"))
    }
}
