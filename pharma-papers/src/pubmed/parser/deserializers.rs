//! Custom serde deserializers for PubMed XML text fields

use serde::Deserializer;
use std::fmt;
use std::result;

/// Deserialize an element's text, tolerating attributes and nested elements
///
/// Titles and affiliations occasionally carry markup that survives
/// preprocessing (MathML, `<ext-link>`, ...). Every `$text` part is kept in
/// order and joined; attributes and child elements are skipped. An empty
/// element yields `Some("")`.
pub(super) fn deserialize_text_content<'de, D>(
    deserializer: D,
) -> result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, IgnoredAny, MapAccess, Visitor};

    struct TextContentVisitor;

    impl<'de> Visitor<'de> for TextContentVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("element text content")
        }

        fn visit_str<E>(self, value: &str) -> result::Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> result::Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_unit<E>(self) -> result::Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(String::new()))
        }

        fn visit_map<M>(self, mut map: M) -> result::Result<Option<String>, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut text_parts = Vec::new();
            while let Some(key) = map.next_key::<String>()? {
                if key == "$text" || key == "$value" {
                    let value: String = map.next_value()?;
                    text_parts.push(value);
                } else {
                    let _: IgnoredAny = map.next_value()?;
                }
            }
            Ok(Some(text_parts.join("")))
        }
    }

    deserializer.deserialize_any(TextContentVisitor)
}
