use serde::{Deserialize, Serialize};

use super::Field;

/// One extracted job listing.
///
/// Every field is always present; a field whose locators matched nothing is
/// the empty string. `date_posted` is a `YYYY-MM-DD` string once normalized,
/// or empty when the card carried no date cell at all. Records carry no
/// identity and are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Salary")]
    pub salary: String,
    #[serde(rename = "Date Posted")]
    pub date_posted: String,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Link")]
    pub link: String,
}

impl JobRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Company => &self.company,
            Field::Location => &self.location,
            Field::Salary => &self.salary,
            Field::DatePosted => &self.date_posted,
            Field::Summary => &self.summary,
            Field::Link => &self.link,
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Company => self.company = value,
            Field::Location => self.location = value,
            Field::Salary => self.salary = value,
            Field::DatePosted => self.date_posted = value,
            Field::Summary => self.summary = value,
            Field::Link => self.link = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_empty_strings() {
        let record = JobRecord::default();
        for field in Field::ALL {
            assert_eq!(record.get(field), "");
        }
    }

    #[test]
    fn json_field_names_match_export_headers() {
        let record = JobRecord {
            title: "Rust Engineer".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        for field in Field::ALL {
            assert!(object.contains_key(field.header()), "{}", field.header());
        }
        assert_eq!(object["Title"], "Rust Engineer");
        assert_eq!(object["Date Posted"], "");
    }
}
