//! Core domain logic for duetrack.
//! This crate is the single source of truth for process tracking rules.

pub mod agenda;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod status;

pub use agenda::month_grouper::{group_by_day, MonthAgenda};
pub use config::{ConfigError, TrackerConfig, CONFIG_PATH_ENV};
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LogSettings,
};
pub use model::calendar::{YearMonth, YearMonthError};
pub use model::process::{
    parse_iso_date, Attachment, Process, ProcessValidationError, ISO_DATE_FORMAT,
};
pub use repo::process_repo::{InMemoryProcessStore, ProcessStore, UpsertOutcome};
pub use search::navigator::resolve_display_month;
pub use service::tracker_service::{MonthListener, TrackerService};
pub use status::classifier::{
    classify, classify_with_policy, DuePolicy, DueStatus, DEFAULT_ATTENTION_WINDOW_DAYS,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
