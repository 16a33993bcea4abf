use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which Rendered Page Provider backs the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Headless-Chrome session; needed for script-rendered results.
    Browser,
    /// Plain fetch over the pooled HTTP client.
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub query: String,
    pub location: String,
    pub pages: u32,
    pub page_wait_timeout_secs: u64,
    pub settle_delay_secs: u64,
    pub base_url: String,
    pub user_agent: String,
    pub provider: ProviderKind,
    pub output: String,
    /// The date treated as "today" for the whole run. Unset means the local
    /// date at run start.
    pub reference_date: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query: "Python Developer".to_string(),
            location: "Chennai".to_string(),
            pages: 1,
            page_wait_timeout_secs: 15,
            settle_delay_secs: 3,
            base_url: "https://in.indeed.com/jobs".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36".to_string(),
            provider: ProviderKind::Browser,
            output: "scraped_jobs.csv".to_string(),
            reference_date: None,
        }
    }
}

impl Config {
    /// Defaults, overridden by an optional `job-scraper.toml` next to the
    /// working directory, overridden again by `JOB_SCRAPER_*` environment
    /// variables (e.g. `JOB_SCRAPER_QUERY`, `JOB_SCRAPER_PAGES`).
    pub fn load() -> Result<Self> {
        let defaults = Config::default();
        let settings = config::Config::builder()
            .set_default("query", defaults.query)?
            .set_default("location", defaults.location)?
            .set_default("pages", defaults.pages as i64)?
            .set_default("page_wait_timeout_secs", defaults.page_wait_timeout_secs as i64)?
            .set_default("settle_delay_secs", defaults.settle_delay_secs as i64)?
            .set_default("base_url", defaults.base_url)?
            .set_default("user_agent", defaults.user_agent)?
            .set_default("provider", "browser")?
            .set_default("output", defaults.output)?
            .add_source(config::File::with_name("job-scraper").required(false))
            .add_source(config::Environment::with_prefix("JOB_SCRAPER").try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_single_page_browser_run() {
        let config = Config::default();
        assert_eq!(config.pages, 1);
        assert_eq!(config.provider, ProviderKind::Browser);
        assert_eq!(config.page_wait_timeout_secs, 15);
        assert!(config.reference_date.is_none());
        assert!(config.base_url.starts_with("https://"));
    }

    #[test]
    fn provider_kind_deserializes_from_lowercase_names() {
        assert_eq!(
            serde_json::from_str::<ProviderKind>("\"browser\"").unwrap(),
            ProviderKind::Browser
        );
        assert_eq!(
            serde_json::from_str::<ProviderKind>("\"http\"").unwrap(),
            ProviderKind::Http
        );
    }
}
