//! Calendar tile classifier.
//!
//! # Responsibility
//! - Map one calendar date to a visual status given the process set.
//!
//! # Invariants
//! - Comparison happens at day resolution; time of day never matters.
//! - Result depends only on the matched due date, so ties between
//!   processes sharing a due date cannot change the outcome.
//! - Processes with missing or malformed due dates are ignored.

use crate::model::process::Process;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default number of days ahead of today that still count as `Attention`.
pub const DEFAULT_ATTENTION_WINDOW_DAYS: i64 = 90;

/// Visual status of a calendar tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    /// Due date is in the past.
    Expired,
    /// Due today or within the attention window.
    Attention,
    /// Due beyond the attention window.
    Valid,
    /// No process is due on this date.
    None,
}

impl DueStatus {
    /// Stable lowercase label for UI bridges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::Attention => "attention",
            Self::Valid => "valid",
            Self::None => "none",
        }
    }

    /// Tile class name understood by the calendar widget stylesheet.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Self::Expired => Some("react-calendar__tile--expired"),
            Self::Attention => Some("react-calendar__tile--attention"),
            Self::Valid => Some("react-calendar__tile--valid"),
            Self::None => None,
        }
    }
}

/// Thresholds used by [`classify_with_policy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuePolicy {
    pub attention_window_days: i64,
}

impl Default for DuePolicy {
    fn default() -> Self {
        Self {
            attention_window_days: DEFAULT_ATTENTION_WINDOW_DAYS,
        }
    }
}

impl DuePolicy {
    /// Status for a due date relative to `today`.
    pub fn status_for(&self, due: NaiveDate, today: NaiveDate) -> DueStatus {
        let diff_days = (due - today).num_days();
        if diff_days < 0 {
            DueStatus::Expired
        } else if diff_days <= self.attention_window_days {
            DueStatus::Attention
        } else {
            DueStatus::Valid
        }
    }
}

/// Classifies `date` with the default 90-day attention window.
pub fn classify(date: NaiveDate, processes: &[Process], today: NaiveDate) -> DueStatus {
    classify_with_policy(date, processes, today, &DuePolicy::default())
}

/// Classifies `date` against the first process due on it.
///
/// Returns `DueStatus::None` when no process is due on `date`.
pub fn classify_with_policy(
    date: NaiveDate,
    processes: &[Process],
    today: NaiveDate,
    policy: &DuePolicy,
) -> DueStatus {
    processes
        .iter()
        .filter_map(Process::due_date)
        .find(|due| *due == date)
        .map_or(DueStatus::None, |due| policy.status_for(due, today))
}
