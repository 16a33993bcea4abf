use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::Selector;

use crate::models::{Field, JobRecord};
use crate::parsers::{clean_text, normalize_date_posted};
use crate::provider::ListingNode;
use crate::selectors::{self, Capture};

/// A locator variant with its selector compiled.
struct CompiledLocator {
    selector: Selector,
    capture: Capture,
}

impl CompiledLocator {
    /// `Some` when the variant matches an element, even an empty one; a
    /// match terminates the variant chain.
    fn matches(&self, node: &ListingNode) -> Option<String> {
        match self.capture {
            Capture::Text => node.text_of(&self.selector).map(|raw| clean_text(&raw)),
            Capture::Attribute(name) => node.attr_of(&self.selector, name),
        }
    }
}

// The locator table is fixed configuration; a selector that fails to parse
// is a programming error, caught by the tests below.
static LOCATOR_TABLE: Lazy<Vec<(Field, Vec<CompiledLocator>)>> = Lazy::new(|| {
    Field::ALL
        .iter()
        .map(|&field| {
            let compiled = selectors::variants(field)
                .iter()
                .map(|locator| CompiledLocator {
                    selector: Selector::parse(locator.css).expect("invalid field selector"),
                    capture: locator.capture,
                })
                .collect();
            (field, compiled)
        })
        .collect()
});

/// First matching variant's value; `None` when no variant matched anything.
fn resolve_field(node: &ListingNode, locators: &[CompiledLocator]) -> Option<String> {
    locators.iter().find_map(|locator| locator.matches(node))
}

/// Builds one `JobRecord` per listing node from the fixed field set.
pub struct ListingExtractor {
    reference_date: NaiveDate,
}

impl ListingExtractor {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    /// Fields resolve independently of one another; extraction is
    /// deterministic and never fails. The date field's resolved text is
    /// additionally normalized to `YYYY-MM-DD`; a card with no date cell
    /// keeps the empty string like any other missing field.
    pub fn extract(&self, node: &ListingNode) -> JobRecord {
        let mut record = JobRecord::default();
        for (field, locators) in LOCATOR_TABLE.iter() {
            let resolved = resolve_field(node, locators);
            let value = match field {
                Field::DatePosted => resolved
                    .map(|text| {
                        normalize_date_posted(&text, self.reference_date)
                            .format("%Y-%m-%d")
                            .to_string()
                    })
                    .unwrap_or_default(),
                _ => resolved.unwrap_or_default(),
            };
            record.set(*field, value);
        }
        record
    }
}
