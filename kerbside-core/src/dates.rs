//! Locale-flexible parsing for the date strings councils render on their pages.

use chrono::NaiveDate;
use regex::Regex;

use crate::ports::SourceError;

// Councils print dates for people, not machines: "Monday 3rd June 2024",
// "Tue 10 Sep 2024". chrono accepts abbreviated and mixed-case names for
// %A/%B, so two formats cover the weekday and weekday-less variants.
const FORMATS: &[&str] = &["%A %d %B %Y", "%d %B %Y"];

/// Parse a display date such as "Monday 3rd June 2024" into a calendar date.
///
/// Surplus whitespace and commas are dropped and English ordinal suffixes
/// (1st, 2nd, 3rd, 4th, ...) are stripped before the format attempts.
///
/// # Errors
///
/// Returns [`SourceError::DateParse`] carrying the original text when no
/// format matches. Callers propagate this rather than dropping the row, since
/// it signals the upstream page format has drifted.
pub fn parse_display_date(text: &str) -> Result<NaiveDate, SourceError> {
    let normalized = normalize(text);

    FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&normalized, format).ok())
        .ok_or_else(|| SourceError::DateParse(text.trim().to_owned()))
}

fn normalize(text: &str) -> String {
    let collapsed = text
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let ordinals = Regex::new(r"(\d{1,2})(?:st|nd|rd|th)\b").expect("ordinal pattern is valid");
    ordinals.replace_all(&collapsed, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn parses_full_display_dates_with_ordinals() {
        let parsed = parse_display_date("Monday 3rd June 2024").expect("date should parse");
        assert_eq!(parsed, date(2024, 6, 3));
    }

    #[test]
    fn parses_every_ordinal_suffix() {
        assert_eq!(
            parse_display_date("1st June 2024").expect("1st"),
            date(2024, 6, 1)
        );
        assert_eq!(
            parse_display_date("2nd June 2024").expect("2nd"),
            date(2024, 6, 2)
        );
        assert_eq!(
            parse_display_date("Friday 21st June 2024").expect("21st"),
            date(2024, 6, 21)
        );
        assert_eq!(
            parse_display_date("4th June 2024").expect("4th"),
            date(2024, 6, 4)
        );
    }

    #[test]
    fn tolerates_commas_abbreviations_and_surplus_whitespace() {
        assert_eq!(
            parse_display_date("Monday, 3rd June 2024").expect("comma form"),
            date(2024, 6, 3)
        );
        assert_eq!(
            parse_display_date("Mon 3 Jun 2024").expect("abbreviated form"),
            date(2024, 6, 3)
        );
        assert_eq!(
            parse_display_date("  Monday   3rd   June   2024  ").expect("spaced form"),
            date(2024, 6, 3)
        );
    }

    #[test]
    fn rejects_unparseable_text_with_the_original_wording() {
        let err = parse_display_date("  to be confirmed  ").expect_err("should not parse");
        match err {
            SourceError::DateParse(text) => assert_eq!(text, "to be confirmed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_dates_whose_weekday_does_not_match() {
        // 3rd June 2024 was a Monday; a drifted page printing the wrong
        // weekday is content drift, not a parseable date.
        let err = parse_display_date("Tuesday 3rd June 2024");
        assert!(matches!(err, Err(SourceError::DateParse(_))));
    }
}
