// File: ./src/extract/rows.rs
// Row interpreter: walks one table's rows top-to-bottom, carrying the
// current semester and date across rows and emitting events as they appear.
use crate::extract::patterns;
use crate::model::{CalendarData, HolidayEvent, SemesterEvent, YearRange};
use chrono::{Datelike, NaiveDate, Weekday};

const SUBSTITUTION_NAME: &str = "Monday Schedule (Substituted)";

/// One cell of a table row, already reduced to normalized text.
/// Whether the cell was a `<th colspan=…>` decides semester-header handling.
#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub is_header_span: bool,
}

/// Mutable traversal state, created fresh for each accepted table.
///
/// `current_date` deliberately persists across rows: dates are sparse in the
/// source markup and rows without a parseable date inherit the last seen one.
#[derive(Debug, Default)]
pub struct SemesterContext {
    semester: Option<(String, i32)>,
    current_date: Option<NaiveDate>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl SemesterContext {
    fn label(&self) -> Option<String> {
        self.semester
            .as_ref()
            .map(|(name, year)| format!("{} {}", name, year))
    }

    /// Replace the semester in progress, flushing the previous one first.
    /// Start/end dates are cleared; the running date is kept.
    fn begin_semester(&mut self, name: String, year: i32, out: &mut CalendarData) {
        self.flush_semester(out);
        self.semester = Some((name, year));
        self.start_date = None;
        self.end_date = None;
    }

    /// Emit a SemesterEvent if name, year, start and end are all known and
    /// no semester with the same label was emitted earlier in the run.
    /// Incomplete or duplicate semesters are dropped silently.
    pub fn flush_semester(&mut self, out: &mut CalendarData) {
        let (Some(label), Some(start_date), Some(end_date)) =
            (self.label(), self.start_date, self.end_date)
        else {
            return;
        };
        if out.semesters.iter().any(|s| s.semester == label) {
            return;
        }
        log::info!(
            "Semester {}: classes {} through {}",
            label,
            start_date,
            end_date
        );
        out.semesters.push(SemesterEvent {
            semester: label,
            start_date,
            end_date,
        });
    }

    /// Interpret one table row. `range` supplies the fallback year for date
    /// parsing when no semester header has been seen yet in this table.
    pub fn process_row(&mut self, cells: &[Cell], range: YearRange, out: &mut CalendarData) {
        // Semester header row: a lone <th colspan=…> announcing e.g. "Fall 2026".
        if let [cell] = cells
            && cell.is_header_span
            && let Some((name, year)) = patterns::semester_label(&cell.text)
        {
            self.begin_semester(name, year, out);
            return;
        }

        let [date_cell, desc_cell, ..] = cells else {
            return;
        };
        let date_text = date_cell.text.as_str();
        let desc = desc_cell.text.as_str();

        // Some tables announce the semester in the date column instead.
        if let Some((name, year)) = patterns::semester_label(date_text) {
            self.begin_semester(name, year, out);
            return;
        }

        if patterns::looks_like_month_day(date_text) {
            let year = self.semester.as_ref().map_or(range.start, |(_, y)| *y);
            match patterns::parse_month_day(date_text, year) {
                Some(date) => self.current_date = Some(date),
                // Keep the previous date; the row may still describe an event.
                None => log::warn!(
                    "Failed to parse date '{}' with year {}, skipping",
                    date_text,
                    year
                ),
            }
        }

        if desc.contains("Classes Begin")
            && let Some(date) = self.current_date
            && self.start_date.is_none()
        {
            self.start_date = Some(date);
        }

        // Last occurrence wins; summer sessions list several "Last Day" rows.
        if desc.contains("Last Day of Classes")
            && let Some(date) = self.current_date
        {
            self.end_date = Some(date);
        }

        let is_holiday = desc.contains("Holiday") && desc.contains("Classes Suspended");
        if is_holiday && let Some(date) = self.current_date {
            let name = desc.split(',').next().unwrap_or(desc).trim().to_string();
            let is_monday = date.weekday() == Weekday::Mon;
            log::info!(
                "Found holiday: {} - {} ({})",
                date,
                name,
                if is_monday { "Monday" } else { "Other" }
            );
            out.holidays.push(HolidayEvent {
                date,
                name,
                semester: self.label(),
                is_monday,
                is_substitution: false,
            });
        }

        let lower = desc.to_lowercase();
        let is_substitution = desc.contains("Substitute a Monday schedule")
            || desc.contains("Substitute Monday Schedule")
            || desc.contains("Substitute Monday")
            || (lower.contains("substitute") && lower.contains("monday"));
        if is_substitution && let Some(date) = self.current_date {
            log::info!("Found Monday substitution: {}", date);
            out.holidays.push(HolidayEvent {
                date,
                name: SUBSTITUTION_NAME.to_string(),
                semester: self.label(),
                is_monday: false,
                is_substitution: true,
            });
        }
    }
}
