//! # Pharma Papers
//!
//! Find PubMed papers with at least one author affiliated with a
//! pharmaceutical or biotechnology company.
//!
//! The crate searches PubMed through the NCBI E-utilities, fetches article
//! records in batches, classifies every author affiliation with keyword
//! heuristics and extracts a contact email (plain or `[at]`-obfuscated).
//!
//! ## Features
//!
//! - **PubMed retrieval**: ESearch for identifiers, batched EFetch for records
//! - **Affiliation heuristics**: company vs. academic keyword predicates
//! - **Email extraction**: standard and obfuscated addresses
//! - **Deduplication**: identifiers are emitted at most once per run
//! - **Diagnostics**: progress notices through an injected observer
//!
//! ## Quick Start
//!
//! ```no_run
//! use pharma_papers::PaperFinder;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let finder = PaperFinder::new()?;
//!     let papers = finder.fetch_papers("cancer immunotherapy", false).await?;
//!
//!     for paper in papers {
//!         println!("{}: {}", paper.pmid, paper.title);
//!         println!("  Companies: {}", paper.company_affiliations);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Classifying affiliations directly
//!
//! ```
//! use pharma_papers::{extract_email, is_academic_affiliation, is_pharma_company};
//!
//! assert!(is_pharma_company("Acme Pharma Inc"));
//! assert!(!is_academic_affiliation("BioTech Corp"));
//! assert_eq!(
//!     extract_email("reach me at jane [at] biotech.org").as_deref(),
//!     Some("jane@biotech.org")
//! );
//! ```

pub mod affiliation;
pub mod config;
pub mod date;
pub mod email;
pub mod error;
pub mod progress;
pub mod pubmed;
pub mod records;
pub mod retrieval;

// Re-export main types for convenience
pub use affiliation::{AffiliationKind, classify, is_academic_affiliation, is_pharma_company};
pub use config::ClientConfig;
pub use date::normalize_date;
pub use email::extract_email;
pub use error::{EutilsError, Result, RetrievalError};
pub use progress::{NoopObserver, ProgressObserver, TracingObserver};
pub use pubmed::{ArticleRecord, AuthorAffiliation, PartialDate, PubMedClient};
pub use records::{OutputRecord, SeenIds, extract_records, parse_batch};
pub use retrieval::PaperFinder;
