//! Output records and the company-author filter
//!
//! [`extract_records`] walks parsed articles in document order, classifies
//! every author affiliation and keeps only papers with at least one
//! company-affiliated author. A [`SeenIds`] ledger, owned by the caller for the
//! whole run, makes sure a PMID is emitted once.

use crate::affiliation::classify;
use crate::date::normalize_date;
use crate::email::extract_email;
use crate::error::Result;
use crate::progress::ProgressObserver;
use crate::pubmed::{ArticleRecord, parse_articles_from_xml};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, instrument};

/// Separator used for author and affiliation lists
pub const LIST_SEPARATOR: &str = "; ";

/// One paper with at least one company-affiliated author
///
/// Serialized field names double as the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "PubmedID")]
    pub pmid: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    /// Authors whose affiliation matched no academic keyword, in author order
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,
    /// Distinct company affiliations, sorted
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,
    /// First email found scanning authors in order, or empty
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: String,
}

impl OutputRecord {
    /// Column names, in serialization order
    pub const FIELD_NAMES: [&'static str; 6] = [
        "PubmedID",
        "Title",
        "Publication Date",
        "Non-academic Author(s)",
        "Company Affiliation(s)",
        "Corresponding Author Email",
    ];
}

/// PMIDs already emitted during one run
#[derive(Debug, Default, Clone)]
pub struct SeenIds {
    ids: HashSet<String>,
}

impl SeenIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, pmid: &str) -> bool {
        self.ids.contains(pmid)
    }

    /// Record `pmid`; returns `false` if it was already present
    pub fn insert(&mut self, pmid: impl Into<String>) -> bool {
        self.ids.insert(pmid.into())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Build the output record for one article, or `None` without a company author
pub fn build_record(article: &ArticleRecord) -> Option<OutputRecord> {
    let mut non_academic_authors: Vec<&str> = Vec::new();
    let mut company_affiliations: BTreeSet<&str> = BTreeSet::new();
    let mut pharma_author_found = false;
    let mut corresponding_email: Option<String> = None;

    for author in &article.authors {
        let affiliation = author.affiliation.as_str();
        if affiliation.is_empty() {
            continue;
        }

        let kind = classify(affiliation);
        if kind.is_company {
            pharma_author_found = true;
            company_affiliations.insert(affiliation.trim());
        }
        if !kind.is_academic {
            non_academic_authors.push(&author.full_name);
        }
        if corresponding_email.is_none() {
            corresponding_email = extract_email(affiliation);
        }
    }

    if !pharma_author_found {
        return None;
    }

    Some(OutputRecord {
        pmid: article.pmid.clone(),
        title: article.title.clone(),
        publication_date: normalize_date(article.pub_date.as_ref()),
        non_academic_authors: non_academic_authors.join(LIST_SEPARATOR),
        company_affiliations: company_affiliations
            .into_iter()
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR),
        corresponding_email: corresponding_email.unwrap_or_default(),
    })
}

/// Filter parsed articles down to new papers with company authors
///
/// Articles with an empty or already seen PMID are skipped. A PMID is only
/// added to `seen` when its article produces a record, so an article rejected
/// here can still be accepted if it shows up again.
pub fn extract_records(
    articles: Vec<ArticleRecord>,
    seen: &mut SeenIds,
    observer: &mut dyn ProgressObserver,
) -> Vec<OutputRecord> {
    let mut records = Vec::new();

    for article in articles {
        if article.pmid.is_empty() || seen.contains(&article.pmid) {
            debug!(pmid = %article.pmid, "Skipping empty or already seen PMID");
            continue;
        }

        let Some(record) = build_record(&article) else {
            debug!(pmid = %article.pmid, "No company-affiliated author");
            continue;
        };

        seen.insert(record.pmid.clone());
        observer.record_accepted(&record);
        records.push(record);
    }

    records
}

/// Parse one EFetch document and extract its records
///
/// # Errors
///
/// * `EutilsError::XmlError` - If the document cannot be deserialized
#[instrument(skip(xml, seen, observer), fields(xml_size = xml.len(), seen = seen.len()))]
pub fn parse_batch(
    xml: &str,
    seen: &mut SeenIds,
    observer: &mut dyn ProgressObserver,
) -> Result<Vec<OutputRecord>> {
    let articles = parse_articles_from_xml(xml)?;
    Ok(extract_records(articles, seen, observer))
}
