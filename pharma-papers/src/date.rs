//! Publication date normalization

use crate::pubmed::PartialDate;

fn month_number(month: &str) -> Option<&'static str> {
    let abbrev = month.get(..3)?;
    let number = match abbrev {
        "Jan" => "01",
        "Feb" => "02",
        "Mar" => "03",
        "Apr" => "04",
        "May" => "05",
        "Jun" => "06",
        "Jul" => "07",
        "Aug" => "08",
        "Sep" => "09",
        "Oct" => "10",
        "Nov" => "11",
        "Dec" => "12",
        _ => return None,
    };
    Some(number)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Render a partial publication date as `YYYY`, `YYYY-MM` or `YYYY-MM-DD`
///
/// Months given as English abbreviations (`Jan`..`Dec`, matched on the
/// first three characters) become two-digit numbers; anything else is used
/// verbatim. A day is only kept when it is all ASCII digits. Without a year
/// the result is empty.
///
/// ```
/// use pharma_papers::{PartialDate, normalize_date};
///
/// let date = PartialDate::new(Some("2020"), Some("Sep"), Some("7"));
/// assert_eq!(normalize_date(Some(&date)), "2020-09-07");
/// assert_eq!(normalize_date(None), "");
/// ```
pub fn normalize_date(date: Option<&PartialDate>) -> String {
    let Some(date) = date else {
        return String::new();
    };
    let Some(year) = non_empty(&date.year) else {
        return String::new();
    };

    let mut normalized = year.to_string();

    if let Some(month) = non_empty(&date.month) {
        normalized.push('-');
        normalized.push_str(month_number(month).unwrap_or(month));

        if let Some(day) = non_empty(&date.day).filter(|d| d.chars().all(|c| c.is_ascii_digit())) {
            // All-digit strings can still overflow; those are dropped like other bad days
            if let Ok(day) = day.parse::<u32>() {
                normalized.push_str(&format!("-{day:02}"));
            }
        }
    }

    normalized
}
