// File: ./src/extract/mod.rs
// HTML-to-structured-data extraction: locates the calendar tables, filters
// out historical ones, and runs the row interpreter over the rest.
pub mod patterns;
pub mod rows;

use crate::model::{CalendarData, YearRange};
use rows::{Cell, SemesterContext};
use scraper::{ElementRef, Html, Selector};

/// Tables whose academic-year range starts before this are old entries the
/// registrar keeps around; they must not be re-ingested.
const MIN_ACADEMIC_YEAR: i32 = 2025;

/// How many preceding section headings to inspect when looking for the
/// year range a table belongs to.
const HEADING_LOOKBACK: usize = 5;

/// Extract holidays and semester boundaries from the calendar page markup.
///
/// Walks headings and tables in document order; each table is associated
/// with the nearest preceding heading that declares a year range, and is
/// skipped entirely when there is none or the range is too old.
pub fn extract_calendar(html: &str) -> CalendarData {
    let document = Html::parse_document(html);
    let landmarks = Selector::parse("h2, h3, h4, table").unwrap();
    let table_sel = Selector::parse("table").unwrap();
    let tr_sel = Selector::parse("tr").unwrap();
    let cell_sel = Selector::parse("td, th").unwrap();

    log::info!(
        "Found {} tables to parse",
        document.select(&table_sel).count()
    );

    let mut out = CalendarData::default();
    let mut headings: Vec<String> = Vec::new();

    for element in document.select(&landmarks) {
        if element.value().name() != "table" {
            headings.push(element_text(&element));
            continue;
        }

        let range = match nearest_year_range(&headings) {
            Some(range) if range.start >= MIN_ACADEMIC_YEAR => range,
            _ => continue,
        };
        log::info!(
            "Processing table with year range {}-{}",
            range.start,
            range.end
        );

        let mut ctx = SemesterContext::default();
        for row in element.select(&tr_sel) {
            let cells: Vec<Cell> = row
                .select(&cell_sel)
                .map(|cell| Cell {
                    text: element_text(&cell),
                    is_header_span: cell.value().name() == "th"
                        && cell.value().attr("colspan").is_some(),
                })
                .collect();
            ctx.process_row(&cells, range, &mut out);
        }
        ctx.flush_semester(&mut out);
    }

    log::info!(
        "Scraping complete - found {} holidays, {} semesters",
        out.holidays.len(),
        out.semesters.len()
    );
    out
}

/// Nearest-first scan of the last few headings for a year-range declaration.
fn nearest_year_range(headings: &[String]) -> Option<YearRange> {
    headings
        .iter()
        .rev()
        .take(HEADING_LOOKBACK)
        .find_map(|text| patterns::year_range(text))
}

/// Concatenated descendant text with whitespace collapsed and trimmed.
fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_with_old_year_range_is_skipped_entirely() {
        let html = r#"
            <h2>Academic Calendar 2024-2025</h2>
            <table>
              <tr><th colspan="2">Fall 2024</th></tr>
              <tr><td>October 14</td><td>Indigenous Peoples Day, Holiday, Classes Suspended</td></tr>
            </table>
        "#;
        let out = extract_calendar(html);
        assert!(out.holidays.is_empty(), "historical table must contribute nothing");
        assert!(out.semesters.is_empty());
    }

    #[test]
    fn table_without_year_range_heading_is_skipped() {
        let html = r#"
            <h2>Registrar Links</h2>
            <table>
              <tr><td>October 12</td><td>Some Day, Holiday, Classes Suspended</td></tr>
            </table>
        "#;
        let out = extract_calendar(html);
        assert!(out.holidays.is_empty());
    }

    #[test]
    fn nearest_preceding_heading_wins() {
        // Two ranges precede the table; the closer one (2026-2027) applies,
        // so the date parses into 2026 via the range's fallback year.
        let html = r#"
            <h3>Academic Calendar 2024-2025</h3>
            <h3>Academic Calendar 2026-2027</h3>
            <table>
              <tr><td>October 12</td><td>Some Day, Holiday, Classes Suspended</td></tr>
            </table>
        "#;
        let out = extract_calendar(html);
        assert_eq!(out.holidays.len(), 1);
        assert_eq!(out.holidays[0].date.to_string(), "2026-10-12");
    }

    #[test]
    fn year_range_heading_beyond_lookback_window_is_ignored() {
        let html = r#"
            <h2>Academic Calendar 2026-2027</h2>
            <h3>One</h3><h3>Two</h3><h3>Three</h3><h3>Four</h3><h3>Five</h3>
            <table>
              <tr><td>October 12</td><td>Some Day, Holiday, Classes Suspended</td></tr>
            </table>
        "#;
        let out = extract_calendar(html);
        assert!(
            out.holidays.is_empty(),
            "only the 5 nearest headings are searched"
        );
    }

    #[test]
    fn headings_after_a_table_apply_to_the_next_table() {
        let html = r#"
            <h2>Academic Calendar 2024-2025</h2>
            <table><tr><td>October 14</td><td>Old Day, Holiday, Classes Suspended</td></tr></table>
            <h2>Academic Calendar 2026-2027</h2>
            <table><tr><td>October 12</td><td>New Day, Holiday, Classes Suspended</td></tr></table>
        "#;
        let out = extract_calendar(html);
        assert_eq!(out.holidays.len(), 1);
        assert_eq!(out.holidays[0].name, "New Day");
    }

    #[test]
    fn cell_text_is_whitespace_normalized() {
        let html = r#"
            <h2>Academic Calendar 2026-2027</h2>
            <table>
              <tr><th colspan="4">Fall   2026</th></tr>
              <tr><td>October
                  12</td><td><strong>Indigenous Peoples Day</strong>, Holiday,
                  Classes Suspended</td></tr>
            </table>
        "#;
        let out = extract_calendar(html);
        assert_eq!(out.holidays.len(), 1);
        assert_eq!(out.holidays[0].name, "Indigenous Peoples Day");
        assert_eq!(out.holidays[0].semester.as_deref(), Some("Fall 2026"));
    }
}
