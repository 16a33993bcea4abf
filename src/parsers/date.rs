use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static DAYS_AGO_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\+?\s+day").expect("Invalid posted-date regex")
});

/// Convert a relative "posted" phrase into an absolute date.
///
/// Recognizes "today"/"just posted" and any "<N>[+] day(s)" phrasing,
/// regardless of surrounding words ("Posted 3 days ago", "3+ days").
/// Anything else falls back to the reference date so a copy change on the
/// source page can never fail a run; the fallback is logged at debug level
/// to keep new phrasings visible.
pub fn normalize_date_posted(text: &str, reference: NaiveDate) -> NaiveDate {
    let t = text.to_lowercase();

    if t.contains("today") || t.contains("just posted") {
        return reference;
    }

    if let Some(captures) = DAYS_AGO_REGEX.captures(&t) {
        if let Ok(days) = captures[1].parse::<i64>() {
            if let Some(date) = reference.checked_sub_signed(Duration::days(days)) {
                return date;
            }
        }
    }

    if !t.trim().is_empty() {
        debug!(phrase = %text, "unrecognized posted-date phrasing, using reference date");
    }
    reference
}
