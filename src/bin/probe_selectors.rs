use anyhow::Result;
use reqwest::Client;
use scraper::{Html, Selector};
use std::fs;

/// Fetches one search-results page and reports which locator variants still
/// match, for keeping the fallback chains current against markup drift.
#[tokio::main]
async fn main() -> Result<()> {
    let client = Client::builder()
        .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36")
        .build()?;

    println!("Fetching search results HTML...");
    let response = client
        .get("https://in.indeed.com/jobs?q=Python+Developer&l=Chennai&start=0")
        .send()
        .await?;
    let html = response.text().await?;
    fs::write("search_sample.html", &html)?;

    let document = Html::parse_document(&html);

    let card_selector = Selector::parse("div.job_seen_beacon").unwrap();
    let cards = document.select(&card_selector);
    println!("Found {} job card elements", cards.count());

    // Every known variant, including retired generations
    let selectors = vec![
        "h2.jobTitle",
        "span.companyName",
        "div.companyLocation",
        "span.location",
        "div.company_location",
        "div.salary-snippet",
        "span.salary-snippet-container",
        "div.metadata.salary-snippet-container",
        "span.date",
        "div.job-snippet",
        "h2.jobTitle a",
    ];

    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            let count = document.select(&selector).count();
            if count > 0 {
                println!("Selector '{}' matched {} elements", selector_str, count);
            } else {
                println!("Selector '{}' matched nothing", selector_str);
            }
        }
    }

    Ok(())
}
