//! Tracker session service.
//!
//! # Responsibility
//! - Own the process store, the live search term and the displayed month.
//! - Re-derive the displayed month after every event that can change it.
//! - Notify subscribers when the displayed month actually changes.
//!
//! # Invariants
//! - `save_process` and `set_search_term` always end with a display-month
//!   recomputation; callers never trigger it by hand.
//! - Listeners are called only on a real change, once per change.

use crate::agenda::month_grouper::{group_by_day, MonthAgenda};
use crate::model::calendar::YearMonth;
use crate::model::process::Process;
use crate::repo::process_repo::{ProcessStore, UpsertOutcome};
use crate::search::navigator::resolve_display_month;
use crate::status::classifier::{classify_with_policy, DuePolicy, DueStatus};
use chrono::NaiveDate;
use log::debug;

/// Callback invoked with the new displayed month.
pub type MonthListener = Box<dyn FnMut(YearMonth) + Send>;

/// Which event moved the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MonthChangeCause {
    Search,
    Navigation,
}

impl MonthChangeCause {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Navigation => "navigation",
        }
    }
}

/// Single-user session over a process store.
pub struct TrackerService<S: ProcessStore> {
    store: S,
    policy: DuePolicy,
    search_term: String,
    display_month: YearMonth,
    listeners: Vec<MonthListener>,
}

impl<S: ProcessStore> TrackerService<S> {
    /// Creates a session showing `initial_month` with an empty search term.
    pub fn new(store: S, initial_month: YearMonth, policy: DuePolicy) -> Self {
        Self {
            store,
            policy,
            search_term: String::new(),
            display_month: initial_month,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener for displayed-month changes.
    pub fn subscribe(&mut self, listener: impl FnMut(YearMonth) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Upserts a form submission, then follows any search match it creates.
    pub fn save_process(&mut self, candidate: Process) -> UpsertOutcome {
        let outcome = self.store.upsert(candidate);
        self.recompute_display_month();
        outcome
    }

    /// Replaces the live search term and follows the first match.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.recompute_display_month();
    }

    /// Applies user calendar navigation.
    pub fn navigate_to(&mut self, month: YearMonth) {
        self.set_display_month(month, MonthChangeCause::Navigation);
    }

    pub fn display_month(&self) -> YearMonth {
        self.display_month
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn processes(&self) -> &[Process] {
        self.store.all()
    }

    /// Status of the tile for `date`, relative to `today`.
    pub fn tile_status(&self, date: NaiveDate, today: NaiveDate) -> DueStatus {
        classify_with_policy(date, self.store.all(), today, &self.policy)
    }

    /// Side-panel grouping for the displayed month and live search term.
    pub fn month_agenda(&self) -> MonthAgenda<'_> {
        group_by_day(self.store.all(), &self.search_term, self.display_month)
    }

    fn recompute_display_month(&mut self) {
        let resolved =
            resolve_display_month(&self.search_term, self.store.all(), self.display_month);
        self.set_display_month(resolved, MonthChangeCause::Search);
    }

    fn set_display_month(&mut self, month: YearMonth, cause: MonthChangeCause) {
        if month == self.display_month {
            return;
        }
        self.display_month = month;
        debug!(
            "event=display_month_change module=service status=ok cause={} month={}",
            cause.as_str(),
            month
        );
        for listener in &mut self.listeners {
            listener(month);
        }
    }
}
