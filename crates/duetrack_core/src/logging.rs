//! Core logging bootstrap.
//!
//! # Responsibility
//! - Start the rolling file logger once per process, from explicit settings
//!   or from a [`TrackerConfig`].
//! - Capture panics as single-line log records.
//!
//! # Invariants
//! - Activation is idempotent for identical [`LogSettings`]; any other
//!   settings are rejected once a logger is active.
//! - Activation never panics.
//! - Log lines carry metadata only: no process names, no attachment bytes.

use crate::config::TrackerConfig;
use crate::status::classifier::DuePolicy;
use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::path::PathBuf;

const LOG_BASENAME: &str = "duetrack";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 5;
const PANIC_PREVIEW_CHARS: usize = 160;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

/// Validated logger settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    /// Absolute directory holding the rolling files.
    pub log_dir: PathBuf,
}

impl LogSettings {
    /// Validates a raw `(level, log_dir)` pair as received from a UI bridge.
    pub fn parse(level: &str, log_dir: &str) -> Result<Self, String> {
        let level = parse_level(level)?;
        let log_dir = log_dir.trim();
        if log_dir.is_empty() {
            return Err("log_dir cannot be empty".to_string());
        }
        let log_dir = PathBuf::from(log_dir);
        if !log_dir.is_absolute() {
            return Err(format!(
                "log_dir must be an absolute path, got `{}`",
                log_dir.display()
            ));
        }
        Ok(Self { level, log_dir })
    }

    /// Uses the level configured in `config`.
    pub fn from_config(config: &TrackerConfig, log_dir: &str) -> Result<Self, String> {
        Self::parse(&config.log_level, log_dir)
    }
}

struct ActiveLogger {
    settings: LogSettings,
    _handle: LoggerHandle,
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - `level` is not one of `trace|debug|info|warn|error`.
/// - `log_dir` is blank, relative, or cannot be created.
/// - Logging is already active with different settings.
/// - The logger backend fails to start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    activate(LogSettings::parse(level, log_dir)?, DuePolicy::default())
}

/// Starts file logging with the level and due policy of `config`.
///
/// Same errors as [`init_logging`].
pub fn init_logging_from_config(config: &TrackerConfig, log_dir: &str) -> Result<(), String> {
    activate(LogSettings::from_config(config, log_dir)?, config.due_policy())
}

/// Settings of the active logger, if any.
pub fn logging_status() -> Option<LogSettings> {
    ACTIVE.get().map(|active| active.settings.clone())
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Parses a level name; `warning` is accepted as `warn`, `off` is rejected.
pub(crate) fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    let name = raw.trim().to_ascii_lowercase();
    let name = if name == "warning" { "warn" } else { name.as_str() };
    match name.parse::<LevelFilter>() {
        Ok(LevelFilter::Off) | Err(_) => Err(format!(
            "unsupported log level `{name}`; expected trace|debug|info|warn|error"
        )),
        Ok(level) => Ok(level),
    }
}

fn activate(settings: LogSettings, policy: DuePolicy) -> Result<(), String> {
    let active = ACTIVE.get_or_try_init(|| start(settings.clone(), policy))?;
    if active.settings == settings {
        return Ok(());
    }
    Err(format!(
        "logging already active at level `{}` in `{}`; refusing to switch to level `{}` in `{}`",
        active.settings.level,
        active.settings.log_dir.display(),
        settings.level,
        settings.log_dir.display()
    ))
}

fn start(settings: LogSettings, policy: DuePolicy) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(&settings.log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            settings.log_dir.display()
        )
    })?;

    let spec = LogSpecification::builder().default(settings.level).build();
    let files = FileSpec::default()
        .directory(settings.log_dir.as_path())
        .basename(LOG_BASENAME);
    let handle = Logger::with(spec)
        .log_to_file(files)
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook();

    info!(
        "event=tracker_start module=core status=ok platform={} version={} level={} attention_window_days={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION"),
        settings.level,
        policy.attention_window_days
    );

    Ok(ActiveLogger {
        settings,
        _handle: handle,
    })
}

fn install_panic_hook() {
    PANIC_HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let location = info.location().map_or_else(
                || "unknown".to_string(),
                |loc| format!("{}:{}", loc.file(), loc.line()),
            );
            error!(
                "event=panic_captured module=core status=error location={location} payload={}",
                panic_preview(info.payload())
            );
            previous(info);
        }));
    });
}

fn panic_preview(payload: &(dyn Any + Send)) -> String {
    let text = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload");
    one_line_preview(text, PANIC_PREVIEW_CHARS)
}

// Panic payloads may echo process names typed into the form.
fn one_line_preview(text: &str, max_chars: usize) -> String {
    let mut preview: String = text
        .chars()
        .take(max_chars)
        .map(|c| if matches!(c, '\n' | '\r') { ' ' } else { c })
        .collect();
    if text.chars().nth(max_chars).is_some() {
        preview.push_str("...");
    }
    preview
}
