//! Email extraction from free-text affiliations

use regex::Regex;
use std::sync::OnceLock;

fn standard_email_regex() -> &'static Regex {
    static STANDARD: OnceLock<Regex> = OnceLock::new();
    STANDARD.get_or_init(|| {
        Regex::new(r"(?i)[a-z0-9_.+-]+@[a-z0-9-]+\.[a-z0-9.-]+")
            .expect("Failed to compile email regex")
    })
}

fn obfuscated_email_regex() -> &'static Regex {
    static OBFUSCATED: OnceLock<Regex> = OnceLock::new();
    OBFUSCATED.get_or_init(|| {
        Regex::new(r"(?i)([a-z0-9_.+-]+)\s*\[at\]\s*([a-z0-9-]+\.[a-z0-9.-]+)")
            .expect("Failed to compile obfuscated email regex")
    })
}

/// Extract the first email address from affiliation text
///
/// A plain `local@domain.tld` address wins. Failing that, an address written
/// as `local [at] domain.tld` is rebuilt with `@` and without whitespace.
///
/// ```
/// use pharma_papers::extract_email;
///
/// assert_eq!(
///     extract_email("Contact: john.doe@biotech.com for details.").as_deref(),
///     Some("john.doe@biotech.com")
/// );
/// assert_eq!(extract_email("No email here!"), None);
/// ```
pub fn extract_email(text: &str) -> Option<String> {
    if let Some(found) = standard_email_regex().find(text) {
        return Some(found.as_str().trim().to_string());
    }

    obfuscated_email_regex().captures(text).map(|caps| {
        let joined = format!("{}@{}", &caps[1], &caps[2]);
        joined.chars().filter(|c| !c.is_whitespace()).collect()
    })
}
