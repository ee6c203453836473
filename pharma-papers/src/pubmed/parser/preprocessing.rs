//! XML preprocessing before deserialization

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Strip inline formatting tags from EFetch XML
///
/// Tags like `<i>`, `<sup>`, `<sub>` or `<b>` show up inside `ArticleTitle`
/// and `Affiliation` and split their text into several nodes. Removing them
/// keeps the whole text together.
pub(crate) fn strip_inline_html_tags(xml: &str) -> String {
    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"</?(?:i|b|u|sup|sub|em|strong|italic|bold)>")
            .expect("Failed to compile inline tag regex")
    });

    let cleaned = re.replace_all(xml, "");

    if cleaned.len() != xml.len() {
        debug!(
            original_bytes = xml.len(),
            cleaned_bytes = cleaned.len(),
            "Stripped inline HTML tags"
        );
    }

    cleaned.into_owned()
}
