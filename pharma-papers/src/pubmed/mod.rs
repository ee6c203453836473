//! PubMed E-utilities access
//!
//! - `client` - ESearch and EFetch requests
//! - `parser` - EFetch XML into [`ArticleRecord`]s
//! - `models` - article, author and date records
//! - `responses` - ESearch JSON response types

pub mod client;
pub mod models;
pub mod parser;
pub mod responses;

// Re-export public types
pub use client::PubMedClient;
pub use models::{ArticleRecord, AuthorAffiliation, MISSING_TITLE, PartialDate};
pub use parser::parse_articles_from_xml;
