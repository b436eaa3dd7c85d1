//! Search term to display month resolution.
//!
//! # Invariants
//! - Blank (empty or whitespace-only) terms never move the calendar.
//! - Only the first matching process in store order is considered; if its
//!   due date is unusable the calendar stays put.
//! - Matching uses the raw term, case-insensitively, as a substring.

use crate::model::calendar::YearMonth;
use crate::model::process::Process;

/// Returns the month the calendar should display for `search_term`.
pub fn resolve_display_month(
    search_term: &str,
    processes: &[Process],
    current: YearMonth,
) -> YearMonth {
    if search_term.trim().is_empty() {
        return current;
    }

    processes
        .iter()
        .find(|process| process.name_matches(search_term))
        .and_then(Process::due_date)
        .map_or(current, YearMonth::of)
}
