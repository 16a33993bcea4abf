use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use tracing::{error, info, warn};
use url::Url;

use crate::config::Config;
use crate::extract::ListingExtractor;
use crate::models::JobRecord;
use crate::provider::{ProviderError, RenderedPageProvider};
use crate::selectors;

/// How a single page index ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    Extracted { count: usize },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    ReadinessTimeout,
}

/// Result of one run: every record extracted in page-index then node order,
/// one outcome per attempted page, and the provider error that cut the run
/// short, if any. The caller decides whether a partial result is worth
/// exporting.
#[derive(Debug)]
pub struct RunSummary {
    pub records: Vec<JobRecord>,
    pub pages: Vec<PageOutcome>,
    pub aborted: Option<ProviderError>,
}

impl RunSummary {
    pub fn skipped_pages(&self) -> usize {
        self.pages
            .iter()
            .filter(|page| matches!(page, PageOutcome::Skipped(_)))
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.aborted.is_none() && self.skipped_pages() == 0
    }
}

/// Sequential page loop: navigate, bounded readiness wait, extract,
/// accumulate. One page is fully processed before the next begins.
pub struct PageRunner {
    config: Arc<Config>,
    extractor: ListingExtractor,
    reference_date: NaiveDate,
}

impl PageRunner {
    /// The reference date is fixed at construction so every page of the run
    /// normalizes relative phrases against the same "today".
    pub fn new(config: Arc<Config>) -> Self {
        let reference_date = config
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive());
        Self {
            extractor: ListingExtractor::new(reference_date),
            reference_date,
            config,
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Search-results URL for a zero-based page index; the source site
    /// paginates in steps of ten.
    fn search_url(&self, page: u32) -> anyhow::Result<String> {
        let start = (page * 10).to_string();
        let query = serde_urlencoded::to_string([
            ("q", self.config.query.as_str()),
            ("l", self.config.location.as_str()),
            ("start", start.as_str()),
        ])?;
        let mut url = Url::parse(&self.config.base_url)?;
        url.set_query(Some(&query));
        Ok(url.to_string())
    }

    /// A readiness timeout skips the page and the run continues; any
    /// `ProviderError` stops the run with everything accumulated so far
    /// preserved in the summary. Errors out only on unusable configuration
    /// (a base URL that cannot form a search URL).
    pub async fn run(&self, provider: &dyn RenderedPageProvider) -> anyhow::Result<RunSummary> {
        let mut summary = RunSummary {
            records: Vec::new(),
            pages: Vec::with_capacity(self.config.pages as usize),
            aborted: None,
        };
        let timeout = Duration::from_secs(self.config.page_wait_timeout_secs);

        for page in 0..self.config.pages {
            let url = self.search_url(page)?;
            info!("Fetching page {}: {}", page + 1, url);

            if let Err(e) = provider.navigate(&url).await {
                error!("Aborting run on page {}: {}", page + 1, e);
                summary.aborted = Some(e);
                break;
            }

            match provider.wait_for_selector(selectors::JOB_CARD, timeout).await {
                Ok(true) => {}
                Ok(false) => {
                    warn!(
                        "No job cards appeared on page {} within {:?}, skipping",
                        page + 1,
                        timeout
                    );
                    summary
                        .pages
                        .push(PageOutcome::Skipped(SkipReason::ReadinessTimeout));
                    continue;
                }
                Err(e) => {
                    error!("Aborting run on page {}: {}", page + 1, e);
                    summary.aborted = Some(e);
                    break;
                }
            }

            let nodes = match provider.find_all(selectors::JOB_CARD).await {
                Ok(nodes) => nodes,
                Err(e) => {
                    error!("Aborting run on page {}: {}", page + 1, e);
                    summary.aborted = Some(e);
                    break;
                }
            };

            info!("Found {} job cards on page {}", nodes.len(), page + 1);
            for node in &nodes {
                summary.records.push(self.extractor.extract(node));
            }
            summary.pages.push(PageOutcome::Extracted { count: nodes.len() });
        }

        Ok(summary)
    }
}
