//! Release date formatting.
//!
//! Catalog release dates arrive as `YYYY-MM-DD`, occasionally as a full
//! RFC3339 timestamp. The detail view shows them in US long form
//! (`November 12, 2019`). Anything unparseable renders as [`UNKNOWN_DATE`].

use chrono::{DateTime, NaiveDate};

/// Placeholder shown for a missing or unparseable release date.
pub const UNKNOWN_DATE: &str = "N/A";

/// Parses a catalog release date.
///
/// Accepts `YYYY-MM-DD` and RFC3339; the time and offset of a timestamp are dropped.
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Formats a release date for display, falling back to `"N/A"`.
pub fn format_release_date(raw: Option<&str>) -> String {
    raw.and_then(parse_release_date).map_or_else(
        || UNKNOWN_DATE.to_string(),
        |date| date.format("%B %-d, %Y").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_date() {
        assert_eq!(format_release_date(Some("2019-11-12")), "November 12, 2019");
        assert_eq!(format_release_date(Some("2021-03-05")), "March 5, 2021");
    }

    #[test]
    fn rfc3339_timestamp() {
        assert_eq!(
            format_release_date(Some("2020-12-25T08:00:00Z")),
            "December 25, 2020"
        );
        assert_eq!(
            format_release_date(Some("2020-12-25T23:30:00-05:00")),
            "December 25, 2020"
        );
    }

    #[test]
    fn missing_or_garbage_is_unknown() {
        assert_eq!(format_release_date(None), UNKNOWN_DATE);
        assert_eq!(format_release_date(Some("")), UNKNOWN_DATE);
        assert_eq!(format_release_date(Some("Unknown release date")), UNKNOWN_DATE);
        assert_eq!(format_release_date(Some("2021-13-40")), UNKNOWN_DATE);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(format_release_date(Some(" 1999-01-02 ")), "January 2, 1999");
    }
}
