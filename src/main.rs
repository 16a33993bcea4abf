use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

mod config;
mod export;
mod extract;
mod models;
mod parsers;
mod provider;
mod runner;
mod selectors;
mod utils;

use crate::config::{Config, ProviderKind};
use crate::provider::{BrowserProvider, HttpPageProvider, RenderedPageProvider};
use crate::runner::PageRunner;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("job_scraper=info".parse()?),
        )
        .init();

    info!("Starting Job Scraper");

    // Load configuration
    let config = Arc::new(Config::load()?);
    info!(
        "Searching {:?} in {:?} across {} page(s)",
        config.query, config.location, config.pages
    );

    // Acquire the page provider for the whole run; dropped on every exit path
    let provider: Box<dyn RenderedPageProvider> = match config.provider {
        ProviderKind::Browser => Box::new(BrowserProvider::launch(&config)?),
        ProviderKind::Http => Box::new(HttpPageProvider::new(utils::http::create_client(
            &config.user_agent,
        )?)),
    };

    let runner = PageRunner::new(config.clone());
    info!("Reference date for this run: {}", runner.reference_date());

    let summary = runner.run(provider.as_ref()).await?;

    if let Some(e) = &summary.aborted {
        error!("Run aborted early: {}", e);
    }
    if summary.skipped_pages() > 0 {
        warn!(
            "{} page(s) skipped after readiness timeout",
            summary.skipped_pages()
        );
    }
    if summary.is_complete() {
        info!("All {} page(s) extracted cleanly", summary.pages.len());
    }

    // A partial run still exports whatever was accumulated
    let path = Path::new(&config.output);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => export::write_json(path, &summary.records)?,
        _ => export::write_csv(path, &summary.records)?,
    }

    info!("Done. Saved {} job(s) to {}", summary.records.len(), path.display());

    Ok(())
}
