//! FFI use-case API for the calendar UI.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the presentation layer via FRB.
//! - Hold the single process-wide tracker session.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Dates cross the boundary as ISO `YYYY-MM-DD` strings.
//! - Every mutating call returns the month the calendar should now show.

use chrono::{NaiveDate, Utc};
use duetrack_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    init_logging_from_config, parse_iso_date, ping as ping_inner, Attachment,
    InMemoryProcessStore, Process, TrackerConfig, TrackerService, YearMonth,
};
use log::{info, warn};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

const DEFAULT_ATTACHMENT_NAME: &str = "attachment.pdf";
const EMPTY_AGENDA_MESSAGE: &str = "No processes this month.";

static CONFIG: OnceLock<TrackerConfig> = OnceLock::new();
static SESSION: OnceLock<Mutex<TrackerService<InMemoryProcessStore>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive), or
///   blank to use the level from the `DUETRACK_CONFIG` file.
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let result = if level.trim().is_empty() {
        init_logging_from_config(tracker_config(), log_dir.as_str())
    } else {
        init_logging_inner(level.as_str(), log_dir.as_str())
    };
    match result {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Calendar page the UI should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    /// Empty on success, diagnostic text otherwise.
    pub message: String,
}

impl MonthView {
    fn of(month: YearMonth) -> Self {
        Self {
            year: month.year(),
            month: month.month(),
            message: String::new(),
        }
    }

    fn with_message(month: YearMonth, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::of(month)
        }
    }
}

/// Result envelope for the process form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the process was stored.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
    /// Month the calendar should display after this call.
    pub view: MonthView,
}

/// One row in the side panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaItem {
    pub name: String,
    pub due_date: String,
    pub has_attachment: bool,
}

/// Processes due on one day of the displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaDay {
    pub day: u32,
    pub items: Vec<AgendaItem>,
}

/// Side-panel payload for the displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthAgendaResponse {
    pub year: i32,
    pub month: u32,
    /// Ascending by day; never contains empty days.
    pub days: Vec<AgendaDay>,
    pub message: String,
}

/// Saves a form submission (insert or update by exact name).
///
/// A missing `attachment_bytes` means the file read failed or no file was
/// picked; the process is stored without an attachment either way.
///
/// # FFI contract
/// - Rejects blank names and missing/malformed dates without touching state.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn save_process(
    name: String,
    send_date: String,
    due_date: String,
    attachment_name: Option<String>,
    attachment_bytes: Option<Vec<u8>>,
) -> ActionResponse {
    let mut candidate = Process::new(name, due_date.trim()).with_send_date(send_date.trim());
    if let Some(bytes) = attachment_bytes {
        let file_name = attachment_name
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ATTACHMENT_NAME.to_string());
        candidate = candidate.with_attachment(Attachment::new(file_name, bytes));
    }

    let mut session = lock_session();
    if let Err(err) = candidate.validate() {
        return ActionResponse {
            ok: false,
            message: format!("save_process failed: {err}"),
            view: MonthView::of(session.display_month()),
        };
    }

    let outcome = session.save_process(candidate);
    ActionResponse {
        ok: true,
        message: format!("Process {}.", outcome.as_str()),
        view: MonthView::of(session.display_month()),
    }
}

/// Updates the live search term and returns the month to display.
#[flutter_rust_bridge::frb(sync)]
pub fn set_search_term(term: String) -> MonthView {
    let mut session = lock_session();
    session.set_search_term(term);
    MonthView::of(session.display_month())
}

/// Applies user calendar navigation (`month` is 1-based).
///
/// Invalid months leave the calendar unchanged and report why.
#[flutter_rust_bridge::frb(sync)]
pub fn navigate_month(year: i32, month: u32) -> MonthView {
    let mut session = lock_session();
    match YearMonth::new(year, month) {
        Ok(target) => {
            session.navigate_to(target);
            MonthView::of(session.display_month())
        }
        Err(err) => MonthView::with_message(
            session.display_month(),
            format!("navigate_month failed: {err}"),
        ),
    }
}

/// Returns the tile label (`expired|attention|valid|none`) for `date`.
///
/// `today` defaults to the current UTC calendar date; tile dates arrive as
/// UTC ISO strings too. Unparseable input yields `none`.
#[flutter_rust_bridge::frb(sync)]
pub fn tile_status(date: String, today: Option<String>) -> String {
    let Some(date) = parse_iso_date(date.trim()) else {
        return "none".to_string();
    };
    let today = match today {
        Some(raw) => match parse_iso_date(raw.trim()) {
            Some(parsed) => parsed,
            None => return "none".to_string(),
        },
        None => utc_today(),
    };

    lock_session().tile_status(date, today).label().to_string()
}

/// Returns processes due in the displayed month, filtered by the live search.
#[flutter_rust_bridge::frb(sync)]
pub fn month_agenda() -> MonthAgendaResponse {
    let session = lock_session();
    let month = session.display_month();
    let days = session
        .month_agenda()
        .days()
        .map(|(day, processes)| AgendaDay {
            day,
            items: processes
                .iter()
                .map(|process| AgendaItem {
                    name: process.name.clone(),
                    due_date: process.due_date.clone(),
                    has_attachment: process.attachment.is_some(),
                })
                .collect(),
        })
        .collect::<Vec<_>>();

    let message = if days.is_empty() {
        EMPTY_AGENDA_MESSAGE.to_string()
    } else {
        String::new()
    };

    MonthAgendaResponse {
        year: month.year(),
        month: month.month(),
        days,
        message,
    }
}

fn lock_session() -> MutexGuard<'static, TrackerService<InMemoryProcessStore>> {
    SESSION
        .get_or_init(|| Mutex::new(new_session()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

fn tracker_config() -> &'static TrackerConfig {
    CONFIG.get_or_init(|| match TrackerConfig::load_from_env() {
        Ok(Some(config)) => config,
        Ok(None) => TrackerConfig::default(),
        Err(err) => {
            warn!("event=config_load module=ffi status=error fallback=defaults error={err}");
            TrackerConfig::default()
        }
    })
}

fn new_session() -> TrackerService<InMemoryProcessStore> {
    let policy = tracker_config().due_policy();
    // The calendar opens on the user's local month.
    let opening_month = YearMonth::of(chrono::Local::now().date_naive());
    info!(
        "event=session_init module=ffi status=ok month={} attention_window_days={}",
        opening_month, policy.attention_window_days
    );

    TrackerService::new(InMemoryProcessStore::new(), opening_month, policy)
}
