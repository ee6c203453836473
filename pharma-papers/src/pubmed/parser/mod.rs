//! PubMed EFetch XML parser
//!
//! Turns one EFetch response (a `PubmedArticleSet`) into [`ArticleRecord`]s.
//!
//! # Module Organization
//!
//! - `preprocessing` - strips inline formatting tags before deserialization
//! - `deserializers` - tolerant text deserializer for mixed-content elements
//! - `xml_types` - serde schema types and their conversion into records

mod deserializers;
mod preprocessing;
mod xml_types;

use crate::error::{EutilsError, Result};
use crate::pubmed::models::ArticleRecord;
use preprocessing::strip_inline_html_tags;
use quick_xml::de::from_str;
use tracing::{debug, instrument};
use xml_types::PubmedArticleSet;

/// Parse every usable article from an EFetch XML document
///
/// Articles missing their `MedlineCitation`, `PMID` or `Article` element are
/// skipped. Only a document that cannot be deserialized at all is an error.
///
/// # Example
///
/// ```
/// use pharma_papers::pubmed::parse_articles_from_xml;
///
/// let xml = r#"<?xml version="1.0"?>
/// <PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation>
///       <PMID>12345678</PMID>
///       <Article>
///         <ArticleTitle>Example Article</ArticleTitle>
///       </Article>
///     </MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let articles = parse_articles_from_xml(xml)?;
/// assert_eq!(articles[0].pmid, "12345678");
/// assert_eq!(articles[0].title, "Example Article");
/// # Ok::<(), pharma_papers::EutilsError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_articles_from_xml(xml: &str) -> Result<Vec<ArticleRecord>> {
    let cleaned_xml = strip_inline_html_tags(xml);

    let article_set: PubmedArticleSet = from_str(&cleaned_xml)
        .map_err(|e| EutilsError::XmlError(format!("Failed to deserialize XML: {}", e)))?;

    let total = article_set.articles.len();
    let records: Vec<ArticleRecord> = article_set
        .articles
        .into_iter()
        .filter_map(|article| article.into_record())
        .collect();

    debug!(
        articles_in_document = total,
        articles_parsed = records.len(),
        "Completed XML parsing"
    );

    Ok(records)
}
