use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;
use thiserror::Error;

mod browser;
mod http;

pub use browser::BrowserProvider;
pub use http::HttpPageProvider;

/// Failures that end a run. Field absence and readiness timeouts are not
/// errors; anything surfacing here means the session itself is gone.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to load {url}: {message}")]
    Navigation { url: String, message: String },

    #[error("page session failure: {message}")]
    Session { message: String },
}

impl ProviderError {
    pub fn navigation(url: &str, err: impl std::fmt::Display) -> Self {
        ProviderError::Navigation {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub fn session(err: impl std::fmt::Display) -> Self {
        ProviderError::Session {
            message: err.to_string(),
        }
    }
}

/// A rendered page session the run loop drives one page at a time.
#[async_trait]
pub trait RenderedPageProvider: Send + Sync {
    /// Load the given page, replacing whatever was loaded before.
    async fn navigate(&self, url: &str) -> Result<(), ProviderError>;

    /// Wait until at least one element matching `selector` is present.
    /// `Ok(false)` means the bounded wait elapsed without a match; that is
    /// an expected outcome, not an error.
    async fn wait_for_selector(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> Result<bool, ProviderError>;

    /// All elements currently matching `selector`, in document order.
    async fn find_all(&self, selector: &str) -> Result<Vec<ListingNode>, ProviderError>;
}

/// One job card subtree, detached from the provider session.
///
/// Holds the card's serialized HTML and re-parses per query. Nodes stay
/// `Send` and read-only no matter which provider produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingNode {
    html: String,
}

impl ListingNode {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Text content of the first element matching `selector`. `Some` even
    /// when the element is empty; `None` only when nothing matches.
    pub fn text_of(&self, selector: &Selector) -> Option<String> {
        let fragment = Html::parse_fragment(&self.html);
        let element = fragment.select(selector).next()?;
        Some(element.text().collect::<String>())
    }

    /// Attribute value of the first element matching `selector`. An element
    /// that matches but lacks the attribute yields an empty string.
    pub fn attr_of(&self, selector: &Selector, name: &str) -> Option<String> {
        let fragment = Html::parse_fragment(&self.html);
        let element = fragment.select(selector).next()?;
        Some(element.value().attr(name).unwrap_or_default().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(css: &str) -> Selector {
        Selector::parse(css).unwrap()
    }

    #[test]
    fn text_of_distinguishes_empty_from_absent() {
        let node = ListingNode::new(r#"<div class="a"></div>"#);
        assert_eq!(node.text_of(&selector("div.a")), Some(String::new()));
        assert_eq!(node.text_of(&selector("div.b")), None);
    }

    #[test]
    fn attr_of_yields_empty_for_missing_attribute() {
        let node = ListingNode::new(r#"<a class="x" href="/jobs/1">go</a><a class="y">stay</a>"#);
        assert_eq!(node.attr_of(&selector("a.x"), "href"), Some("/jobs/1".to_string()));
        assert_eq!(node.attr_of(&selector("a.y"), "href"), Some(String::new()));
        assert_eq!(node.attr_of(&selector("a.z"), "href"), None);
    }

    #[test]
    fn text_of_concatenates_descendant_text() {
        let node = ListingNode::new(r#"<h2 class="t"><a><span>Rust</span> Engineer</a></h2>"#);
        assert_eq!(node.text_of(&selector("h2.t")), Some("Rust Engineer".to_string()));
    }
}
