use crate::models::Field;

/// One rendered job card on the results page.
pub const JOB_CARD: &str = "div.job_seen_beacon";

/// How a locator captures its value once an element matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    Text,
    Attribute(&'static str),
}

/// One candidate selector for a field.
#[derive(Debug, Clone, Copy)]
pub struct FieldLocator {
    pub css: &'static str,
    pub capture: Capture,
}

const fn text(css: &'static str) -> FieldLocator {
    FieldLocator {
        css,
        capture: Capture::Text,
    }
}

const fn attribute(css: &'static str, name: &'static str) -> FieldLocator {
    FieldLocator {
        css,
        capture: Capture::Attribute(name),
    }
}

/// Locator variants per field, in priority order.
///
/// The chains are fixed domain knowledge: the source page has shipped
/// several markup generations and cards from more than one still appear,
/// so location and salary each need a fallback chain.
pub fn variants(field: Field) -> &'static [FieldLocator] {
    const TITLE: &[FieldLocator] = &[text("h2.jobTitle")];
    const COMPANY: &[FieldLocator] = &[text("span.companyName")];
    const LOCATION: &[FieldLocator] = &[
        text("div.companyLocation"),
        text("span.location"),
        text("div.company_location"),
    ];
    const SALARY: &[FieldLocator] = &[
        text("div.salary-snippet"),
        text("span.salary-snippet-container"),
        text("div.metadata.salary-snippet-container"),
    ];
    const DATE_POSTED: &[FieldLocator] = &[text("span.date")];
    const SUMMARY: &[FieldLocator] = &[text("div.job-snippet")];
    const LINK: &[FieldLocator] = &[attribute("h2.jobTitle a", "href")];

    match field {
        Field::Title => TITLE,
        Field::Company => COMPANY,
        Field::Location => LOCATION,
        Field::Salary => SALARY,
        Field::DatePosted => DATE_POSTED,
        Field::Summary => SUMMARY,
        Field::Link => LINK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_has_at_least_one_variant() {
        for field in Field::ALL {
            assert!(!variants(field).is_empty());
        }
    }

    #[test]
    fn link_captures_an_attribute() {
        let link = variants(Field::Link);
        assert_eq!(link.len(), 1);
        assert_eq!(link[0].capture, Capture::Attribute("href"));
    }
}
