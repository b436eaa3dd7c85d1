//! Day-keyed grouping of processes for one calendar month.
//!
//! # Responsibility
//! - Filter processes by search term and displayed month.
//! - Bucket survivors by day of month for the side panel.
//!
//! # Invariants
//! - Only days with at least one process are present.
//! - Within a day, processes keep their input order.
//! - Processes with missing or malformed due dates never land in a bucket.

use crate::model::calendar::YearMonth;
use crate::model::process::Process;
use chrono::Datelike;
use std::collections::BTreeMap;

/// Processes due in one month, keyed by day of month (ascending).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthAgenda<'a> {
    days: BTreeMap<u32, Vec<&'a Process>>,
}

impl<'a> MonthAgenda<'a> {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Processes due on `day`, or `None` when that day has none.
    pub fn day(&self, day: u32) -> Option<&[&'a Process]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    /// Iterates non-empty days in ascending order.
    pub fn days<'s>(&'s self) -> impl Iterator<Item = (u32, &'s [&'a Process])> + 's {
        self.days
            .iter()
            .map(|(day, processes)| (*day, processes.as_slice()))
    }

    pub fn process_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

/// Groups processes matching `search_term` and due in `month` by day.
pub fn group_by_day<'a>(
    processes: &'a [Process],
    search_term: &str,
    month: YearMonth,
) -> MonthAgenda<'a> {
    let mut days: BTreeMap<u32, Vec<&'a Process>> = BTreeMap::new();

    for process in processes
        .iter()
        .filter(|process| process.name_matches(search_term))
    {
        let Some(due) = process.due_date() else {
            continue;
        };
        if !month.contains(due) {
            continue;
        }
        days.entry(due.day()).or_default().push(process);
    }

    MonthAgenda { days }
}
