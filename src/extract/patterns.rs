// File: ./src/extract/patterns.rs
// Free-text patterns used while walking the calendar tables: academic-year
// ranges, semester labels, and "Month day" date strings.
use crate::model::YearRange;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{4})-(\d{4})").unwrap());
static SEMESTER_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(Fall|Spring|Summer)\s+(\d{4})").unwrap());
static MONTH_DAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+\s+\d+").unwrap());

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Extract an academic-year pair from a heading like "Academic Calendar 2026-2027".
pub fn year_range(text: &str) -> Option<YearRange> {
    let caps = YEAR_RANGE.captures(text)?;
    Some(YearRange {
        start: caps[1].parse().ok()?,
        end: caps[2].parse().ok()?,
    })
}

/// Extract a semester label like "Fall 2026" anywhere in `text`.
/// The season name is matched case-insensitively and normalized to
/// capitalized form, so "fall 2026" and "FALL 2026" both yield ("Fall", 2026).
pub fn semester_label(text: &str) -> Option<(String, i32)> {
    let caps = SEMESTER_LABEL.captures(text)?;
    let season = &caps[1];
    let mut chars = season.chars();
    let name = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => return None,
    };
    Some((name, caps[2].parse().ok()?))
}

/// Loose "word(s) then number" check used to decide whether a date cell is
/// worth handing to [`parse_month_day`]. Anchored at the start of the cell.
pub fn looks_like_month_day(text: &str) -> bool {
    MONTH_DAY.is_match(text)
}

/// Parse a "<Month name> <day>" string plus a year into a calendar date.
///
/// Only full English month names are accepted (no abbreviations), matched
/// case-insensitively. Invalid combinations like "February 30" yield `None`;
/// so does anything trailing the day number ("October 13-14").
pub fn parse_month_day(text: &str, year: i32) -> Option<NaiveDate> {
    let mut words = text.split_whitespace();
    let month_name = words.next()?;
    let day: u32 = words.next()?.parse().ok()?;
    if words.next().is_some() {
        return None;
    }
    let month_idx = MONTHS
        .iter()
        .position(|m| month_name.eq_ignore_ascii_case(m))?;
    NaiveDate::from_ymd_opt(year, month_idx as u32 + 1, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_range_from_heading() {
        assert_eq!(
            year_range("Academic Calendar 2026-2027"),
            Some(YearRange {
                start: 2026,
                end: 2027
            })
        );
    }

    #[test]
    fn year_range_requires_four_digit_pair() {
        assert_eq!(year_range("Spring Break Schedule"), None);
        assert_eq!(year_range("Est. 1839-40"), None);
    }

    #[test]
    fn semester_label_is_case_insensitive_and_normalized() {
        assert_eq!(semester_label("fall 2026"), Some(("Fall".to_string(), 2026)));
        assert_eq!(semester_label("FALL 2026"), Some(("Fall".to_string(), 2026)));
        assert_eq!(
            semester_label("Semester: sPrInG 2027"),
            Some(("Spring".to_string(), 2027))
        );
    }

    #[test]
    fn semester_label_rejects_other_text() {
        assert_eq!(semester_label("Winter 2026"), None);
        assert_eq!(semester_label("Fall semester"), None);
    }

    #[test]
    fn month_day_shape_check() {
        assert!(looks_like_month_day("October 13"));
        assert!(looks_like_month_day("October 13-14 (weekend)"));
        assert!(!looks_like_month_day("13 October"));
        assert!(!looks_like_month_day(""));
    }

    #[test]
    fn parse_valid_dates() {
        assert_eq!(
            parse_month_day("October 13", 2026),
            NaiveDate::from_ymd_opt(2026, 10, 13)
        );
        assert_eq!(
            parse_month_day("february 29", 2028),
            NaiveDate::from_ymd_opt(2028, 2, 29)
        );
    }

    #[test]
    fn parse_rejects_invalid_day_of_month() {
        assert_eq!(parse_month_day("February 30", 2026), None);
        assert_eq!(parse_month_day("February 29", 2026), None); // not a leap year
    }

    #[test]
    fn parse_rejects_abbreviations_and_junk() {
        assert_eq!(parse_month_day("Oct 13", 2026), None);
        assert_eq!(parse_month_day("October 13-14", 2026), None);
        assert_eq!(parse_month_day("October", 2026), None);
        assert_eq!(parse_month_day("Octember 13", 2026), None);
    }
}
