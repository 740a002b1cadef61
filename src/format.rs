//! Display formatting for values coming back from the service

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Shown in place of any date that is missing or cannot be parsed
pub const NOT_RETURNED_YET: &str = "Not returned yet";

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Clamp an age to at most three digits. Negative values pass through.
pub fn format_age(age: i64) -> i64 {
    age.min(999)
}

/// First four characters of the year's decimal representation
pub fn format_year_published(year: i64) -> String {
    year.to_string().chars().take(4).collect()
}

/// Render a service date in long `en-US` form, e.g. `January 5, 2024, 03:04:05 PM`.
///
/// Accepts RFC 3339, RFC 2822 (`Fri, 05 Jan 2024 15:04:05 GMT`), ISO date-times
/// without offset and bare ISO dates. Offset-bearing values are shown in UTC.
/// Anything else, including an absent or empty value, yields [`NOT_RETURNED_YET`].
pub fn format_date(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()).and_then(parse_date) {
        Some(dt) => dt.format("%B %-d, %Y, %I:%M:%S %p").to_string(),
        None => NOT_RETURNED_YET.to_string(),
    }
}

fn parse_date(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.naive_utc());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Escape text for placement inside HTML markup
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
