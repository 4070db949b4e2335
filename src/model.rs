// File: ./src/model.rs
// Data types produced by the calendar extraction and shipped to Convex.
use chrono::NaiveDate;
use serde::Serialize;

/// Academic-year pair parsed from a section heading, e.g. "2026-2027".
/// Acts as a recency filter and as the fallback year when no semester
/// header has been seen yet in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// A holiday ("Classes Suspended") or a Monday-schedule substitution day.
///
/// Serialized field names match what the Convex endpoint expects; the
/// `isSubstitution` key is only present on substitution events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayEvent {
    pub date: NaiveDate,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    pub is_monday: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_substitution: bool,
}

/// First and last day of classes for one semester, labeled "Fall 2026" style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterEvent {
    pub semester: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Output bundle of one scrape run.
#[derive(Debug, Default)]
pub struct CalendarData {
    pub holidays: Vec<HolidayEvent>,
    pub semesters: Vec<SemesterEvent>,
}

impl CalendarData {
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty() && self.semesters.is_empty()
    }
}
