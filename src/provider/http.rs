use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use std::sync::RwLock;
use std::time::Duration;

use crate::provider::{ListingNode, ProviderError, RenderedPageProvider};
use crate::utils::http::fetch_with_retry;

/// Provider for server-rendered pages: fetch once per navigation, answer
/// selector queries from the held document. No browser process involved,
/// which also makes it the workhorse for tests.
pub struct HttpPageProvider {
    client: Client,
    current: RwLock<Option<String>>,
}

impl HttpPageProvider {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            current: RwLock::new(None),
        }
    }

    fn parse_selector(selector: &str) -> Result<Selector, ProviderError> {
        Selector::parse(selector)
            .map_err(|e| ProviderError::session(format!("invalid selector {selector:?}: {e}")))
    }
}

#[async_trait]
impl RenderedPageProvider for HttpPageProvider {
    async fn navigate(&self, url: &str) -> Result<(), ProviderError> {
        let response = fetch_with_retry(&self.client, url, 3)
            .await
            .map_err(|e| ProviderError::navigation(url, e))?;
        let html = response
            .text()
            .await
            .map_err(|e| ProviderError::navigation(url, e))?;
        *self.current.write().unwrap() = Some(html);
        Ok(())
    }

    async fn wait_for_selector(
        &self,
        selector: &str,
        _timeout: Duration,
    ) -> Result<bool, ProviderError> {
        // A fetched document is already settled; presence is immediate.
        let selector = Self::parse_selector(selector)?;
        let guard = self.current.read().unwrap();
        let Some(html) = guard.as_deref() else {
            return Ok(false);
        };
        let document = Html::parse_document(html);
        Ok(document.select(&selector).next().is_some())
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<ListingNode>, ProviderError> {
        let selector = Self::parse_selector(selector)?;
        let guard = self.current.read().unwrap();
        let Some(html) = guard.as_deref() else {
            return Ok(Vec::new());
        };
        let document = Html::parse_document(html);
        Ok(document
            .select(&selector)
            .map(|element| ListingNode::new(element.html()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors;
    use crate::utils::http::create_client;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PAGE: &str = r#"
        <html><body>
          <div class="job_seen_beacon"><h2 class="jobTitle">First</h2></div>
          <div class="job_seen_beacon"><h2 class="jobTitle">Second</h2></div>
        </body></html>
    "#;

    #[tokio::test]
    async fn fetches_and_yields_card_nodes_in_document_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .mount(&server)
            .await;

        let provider = HttpPageProvider::new(create_client("test-agent").unwrap());
        provider
            .navigate(&format!("{}/jobs", server.uri()))
            .await
            .unwrap();

        assert!(provider
            .wait_for_selector(selectors::JOB_CARD, Duration::from_secs(1))
            .await
            .unwrap());

        let nodes = provider.find_all(selectors::JOB_CARD).await.unwrap();
        assert_eq!(nodes.len(), 2);
        let title = Selector::parse("h2.jobTitle").unwrap();
        assert_eq!(nodes[0].text_of(&title), Some("First".to_string()));
        assert_eq!(nodes[1].text_of(&title), Some("Second".to_string()));
    }

    #[tokio::test]
    async fn passes_query_string_through_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/jobs"))
            .and(query_param("q", "rust engineer"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .mount(&server)
            .await;

        let provider = HttpPageProvider::new(create_client("test-agent").unwrap());
        provider
            .navigate(&format!("{}/jobs?q=rust+engineer", server.uri()))
            .await
            .unwrap();
        assert!(provider
            .wait_for_selector(selectors::JOB_CARD, Duration::from_secs(1))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn blank_session_has_no_cards() {
        let provider = HttpPageProvider::new(create_client("test-agent").unwrap());
        assert!(!provider
            .wait_for_selector(selectors::JOB_CARD, Duration::from_secs(1))
            .await
            .unwrap());
        assert!(provider.find_all(selectors::JOB_CARD).await.unwrap().is_empty());
    }
}
