use serde::{Deserialize, Serialize};

/// The seven fields of an extracted listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Title,
    Company,
    Location,
    Salary,
    DatePosted,
    Summary,
    Link,
}

impl Field {
    /// Export column order. Exporters must preserve it.
    pub const ALL: [Field; 7] = [
        Field::Title,
        Field::Company,
        Field::Location,
        Field::Salary,
        Field::DatePosted,
        Field::Summary,
        Field::Link,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Company => "Company",
            Field::Location => "Location",
            Field::Salary => "Salary",
            Field::DatePosted => "Date Posted",
            Field::Summary => "Summary",
            Field::Link => "Link",
        }
    }
}
