//! Keyword heuristics for author affiliations
//!
//! Both predicates lowercase the text and look for any keyword as a plain
//! substring. Short keywords such as `ag`, `inc` or `corp` match inside longer
//! words on purpose, so false positives are expected.

/// Substrings that mark a pharmaceutical or biotech company
pub const PHARMA_KEYWORDS: &[&str] = &[
    "pharma",
    "pharmaceutical",
    "biotech",
    "biotechnology",
    "inc",
    "ltd",
    "gmbh",
    "ag",
    "corp",
    "corporation",
    "llc",
];

/// Substrings that mark an academic institution
pub const ACADEMIC_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "institute",
    "hospital",
    "lab",
    "laboratory",
    "school",
];

/// Both classifications of one affiliation string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AffiliationKind {
    pub is_company: bool,
    pub is_academic: bool,
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

/// Whether the affiliation looks like a pharmaceutical or biotech company
///
/// ```
/// use pharma_papers::is_pharma_company;
///
/// assert!(is_pharma_company("Acme Pharma Inc"));
/// assert!(!is_pharma_company("Some Random Org"));
/// ```
pub fn is_pharma_company(affiliation: &str) -> bool {
    contains_any(affiliation, PHARMA_KEYWORDS)
}

/// Whether the affiliation looks like an academic institution
///
/// ```
/// use pharma_papers::is_academic_affiliation;
///
/// assert!(is_academic_affiliation("Department of Biology, University of Somewhere"));
/// assert!(!is_academic_affiliation("BioTech Corp"));
/// ```
pub fn is_academic_affiliation(affiliation: &str) -> bool {
    contains_any(affiliation, ACADEMIC_KEYWORDS)
}

/// Run both predicates on the same text
pub fn classify(affiliation: &str) -> AffiliationKind {
    AffiliationKind {
        is_company: is_pharma_company(affiliation),
        is_academic: is_academic_affiliation(affiliation),
    }
}
