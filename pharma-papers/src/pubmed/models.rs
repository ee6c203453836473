use serde::{Deserialize, Serialize};

/// Title used when an article has no `ArticleTitle`
pub const MISSING_TITLE: &str = "[No Title Found]";

/// One article from an EFetch document, reduced to the fields this crate uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// PubMed ID
    pub pmid: String,
    /// Article title, [`MISSING_TITLE`] when absent
    pub title: String,
    /// `Journal/JournalIssue/PubDate`, if present
    pub pub_date: Option<PartialDate>,
    /// Authors in document order
    pub authors: Vec<AuthorAffiliation>,
}

/// An author's display name and raw affiliation text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthorAffiliation {
    /// `"<ForeName> <LastName>"`, trimmed; may be empty
    pub full_name: String,
    /// Text of the first `AffiliationInfo/Affiliation`; may be empty
    pub affiliation: String,
}

/// Publication date as PubMed records it: every part is optional free text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartialDate {
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
}

impl PartialDate {
    pub fn new(year: Option<&str>, month: Option<&str>, day: Option<&str>) -> Self {
        Self {
            year: year.map(str::to_string),
            month: month.map(str::to_string),
            day: day.map(str::to_string),
        }
    }
}
