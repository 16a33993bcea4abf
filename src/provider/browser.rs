use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions, Tab};
use rand::Rng;
use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Config;
use crate::provider::{ListingNode, ProviderError, RenderedPageProvider};

/// Headless-Chrome session provider, the default for script-rendered pages.
/// One tab serves the whole run; dropping the provider closes the session.
pub struct BrowserProvider {
    _browser: Browser,
    tab: Arc<Tab>,
    settle_delay_secs: u64,
}

impl BrowserProvider {
    pub fn launch(config: &Config) -> anyhow::Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((1366, 900)))
            .args(vec![OsStr::new("--disable-blink-features=AutomationControlled")])
            .build()
            .map_err(|e| anyhow::anyhow!("failed to assemble launch options: {e}"))?;

        let browser = Browser::new(options)?;
        let tab = browser.new_tab()?;
        tab.set_user_agent(&config.user_agent, None, None)?;

        info!("Launched headless browser session");
        Ok(Self {
            _browser: browser,
            tab,
            settle_delay_secs: config.settle_delay_secs,
        })
    }

    /// Human-pace settle after navigation: a jittered pause, then step the
    /// viewport down so lazily attached cards render.
    async fn settle(&self) {
        let base = self.settle_delay_secs.max(1) as f64;
        let pause = rand::thread_rng().gen_range(base..base * 2.0);
        tokio::time::sleep(Duration::from_secs_f64(pause)).await;

        for step in 1..=4u32 {
            let js = format!("window.scrollTo(0, document.body.scrollHeight * {step} / 4);");
            if let Err(e) = self.tab.evaluate(&js, false) {
                debug!("scroll step failed: {e}");
                break;
            }
            tokio::time::sleep(Duration::from_millis(400)).await;
        }
    }
}

#[async_trait]
impl RenderedPageProvider for BrowserProvider {
    async fn navigate(&self, url: &str) -> Result<(), ProviderError> {
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| ProviderError::navigation(url, e))?;
        self.settle().await;
        Ok(())
    }

    async fn wait_for_selector(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> Result<bool, ProviderError> {
        // The wait also fails when the page blocked us; either way the page
        // holds no extractable cards, so both map to "not ready".
        match self.tab.wait_for_element_with_custom_timeout(selector, timeout) {
            Ok(_) => Ok(true),
            Err(e) => {
                debug!("readiness wait for {selector:?} elapsed: {e}");
                Ok(false)
            }
        }
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<ListingNode>, ProviderError> {
        let elements = match self.tab.find_elements(selector) {
            Ok(elements) => elements,
            Err(e) => {
                // The devtools protocol reports "no matches" as an error.
                debug!("find_elements {selector:?}: {e}");
                return Ok(Vec::new());
            }
        };

        let mut nodes = Vec::with_capacity(elements.len());
        for element in elements {
            let html = element.get_content().map_err(ProviderError::session)?;
            nodes.push(ListingNode::new(html));
        }
        Ok(nodes)
    }
}
