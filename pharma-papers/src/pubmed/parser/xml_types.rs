//! EFetch XML schema types
//!
//! Only the elements this crate reads are declared; everything else in the
//! document is skipped by serde. Every level is optional so that a missing
//! subtree drops one article instead of failing the whole document.

use super::deserializers::deserialize_text_content;
use crate::pubmed::models::{ArticleRecord, AuthorAffiliation, MISSING_TITLE, PartialDate};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(rename = "PubmedArticleSet")]
pub(super) struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    pub articles: Vec<PubmedArticleXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PubmedArticleXml {
    #[serde(rename = "MedlineCitation")]
    pub medline_citation: Option<MedlineCitation>,
}

impl PubmedArticleXml {
    /// Convert to an [`ArticleRecord`], or `None` when the citation, PMID or
    /// `Article` subtree is missing
    pub fn into_record(self) -> Option<ArticleRecord> {
        let Some(medline) = self.medline_citation else {
            debug!("Skipping PubmedArticle without MedlineCitation");
            return None;
        };
        let Some(pmid) = medline.pmid else {
            debug!("Skipping MedlineCitation without PMID");
            return None;
        };
        let Some(article) = medline.article else {
            debug!(pmid = %pmid.value, "Skipping MedlineCitation without Article");
            return None;
        };

        let title = article
            .article_title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| MISSING_TITLE.to_string());

        let pub_date = article
            .journal
            .and_then(|j| j.journal_issue)
            .and_then(|ji| ji.pub_date)
            .map(PubDateXml::into_partial_date);

        let authors = article
            .author_list
            .map_or(Vec::new(), AuthorList::into_authors);

        Some(ArticleRecord {
            pmid: pmid.value,
            title,
            pub_date,
            authors,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct MedlineCitation {
    #[serde(rename = "PMID")]
    pmid: Option<PmidXml>,
    #[serde(rename = "Article")]
    article: Option<ArticleXml>,
}

#[derive(Debug, Deserialize)]
struct PmidXml {
    #[serde(rename = "$text", default)]
    value: String,
}

#[derive(Debug, Deserialize)]
struct ArticleXml {
    #[serde(rename = "Journal")]
    journal: Option<Journal>,
    #[serde(
        rename = "ArticleTitle",
        default,
        deserialize_with = "deserialize_text_content"
    )]
    article_title: Option<String>,
    #[serde(rename = "AuthorList")]
    author_list: Option<AuthorList>,
}

#[derive(Debug, Deserialize)]
struct Journal {
    #[serde(rename = "JournalIssue")]
    journal_issue: Option<JournalIssue>,
}

#[derive(Debug, Deserialize)]
struct JournalIssue {
    #[serde(rename = "PubDate")]
    pub_date: Option<PubDateXml>,
}

#[derive(Debug, Deserialize)]
struct PubDateXml {
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Month")]
    month: Option<String>,
    #[serde(rename = "Day")]
    day: Option<String>,
}

impl PubDateXml {
    fn into_partial_date(self) -> PartialDate {
        PartialDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AuthorList {
    #[serde(rename = "Author", default)]
    authors: Vec<AuthorXml>,
}

impl AuthorList {
    fn into_authors(self) -> Vec<AuthorAffiliation> {
        self.authors
            .into_iter()
            .map(AuthorXml::into_author)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct AuthorXml {
    #[serde(rename = "LastName")]
    last_name: Option<String>,
    #[serde(rename = "ForeName")]
    fore_name: Option<String>,
    #[serde(rename = "AffiliationInfo", default)]
    affiliation_info: Vec<AffiliationInfo>,
}

impl AuthorXml {
    fn into_author(self) -> AuthorAffiliation {
        let full_name = format!(
            "{} {}",
            self.fore_name.unwrap_or_default(),
            self.last_name.unwrap_or_default()
        )
        .trim()
        .to_string();

        // Only the first AffiliationInfo counts
        let affiliation = self
            .affiliation_info
            .into_iter()
            .next()
            .and_then(|info| info.affiliation)
            .unwrap_or_default();

        AuthorAffiliation {
            full_name,
            affiliation,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AffiliationInfo {
    #[serde(
        rename = "Affiliation",
        default,
        deserialize_with = "deserialize_text_content"
    )]
    affiliation: Option<String>,
}
