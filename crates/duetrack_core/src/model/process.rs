//! Process domain model.
//!
//! # Responsibility
//! - Define the record registered through the process form.
//! - Parse stored ISO date text into calendar dates.
//!
//! # Invariants
//! - `name` is the upsert key; comparison is exact and case-sensitive.
//! - Unparseable `due_date` text never raises; it parses to `None`.
//! - The attachment is owned by the record until replaced.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wire/storage format for every date field.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Parses canonical ISO `YYYY-MM-DD` text into a calendar date.
///
/// Text must round-trip through the format unchanged: `2024-3-5`,
/// `+2024-03-05` and ` 2024-03-05` all yield `None`.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT).ok()?;
    (parsed.format(ISO_DATE_FORMAT).to_string() == raw).then_some(parsed)
}

/// Opaque binary blob attached to a process (usually a PDF).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Display name reported by the file picker.
    pub file_name: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Returns whether the content starts with the PDF magic header.
    pub fn is_pdf(&self) -> bool {
        self.bytes.starts_with(PDF_MAGIC)
    }
}

/// Validation failures for form-submitted processes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessValidationError {
    /// Name is empty after trim.
    BlankName,
    /// Due date field was left empty.
    MissingDueDate,
    /// Due date text is not a valid `YYYY-MM-DD` date.
    InvalidDueDate(String),
    /// Send date text is present but not a valid `YYYY-MM-DD` date.
    InvalidSendDate(String),
}

impl Display for ProcessValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "process name must not be blank"),
            Self::MissingDueDate => write!(f, "due_date is required"),
            Self::InvalidDueDate(raw) => {
                write!(f, "due_date `{raw}` is not a valid YYYY-MM-DD date")
            }
            Self::InvalidSendDate(raw) => {
                write!(f, "send_date `{raw}` is not a valid YYYY-MM-DD date")
            }
        }
    }
}

impl Error for ProcessValidationError {}

/// A tracked process with send/due dates and an optional attachment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Process {
    /// Unique identifier within a store.
    pub name: String,
    /// ISO date text; may be empty.
    #[serde(default)]
    pub send_date: String,
    /// ISO date text driving classification and grouping.
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub attachment: Option<Attachment>,
}

impl Process {
    /// Creates a process without send date or attachment.
    pub fn new(name: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            send_date: String::new(),
            due_date: due_date.into(),
            attachment: None,
        }
    }

    pub fn with_send_date(mut self, send_date: impl Into<String>) -> Self {
        self.send_date = send_date.into();
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// Parsed due date, or `None` when absent or malformed.
    pub fn due_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.due_date)
    }

    /// Parsed send date, or `None` when absent or malformed.
    pub fn send_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.send_date)
    }

    /// Case-insensitive substring match of `term` against `name`.
    ///
    /// An empty term matches every process. The term is not trimmed.
    pub fn name_matches(&self, term: &str) -> bool {
        term.is_empty() || self.name.to_lowercase().contains(&term.to_lowercase())
    }

    /// Checks form-level invariants.
    ///
    /// Store writes do not require this; it exists for input surfaces that
    /// want to reject incomplete submissions before upsert.
    pub fn validate(&self) -> Result<(), ProcessValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProcessValidationError::BlankName);
        }
        if self.due_date.trim().is_empty() {
            return Err(ProcessValidationError::MissingDueDate);
        }
        if self.due_date().is_none() {
            return Err(ProcessValidationError::InvalidDueDate(self.due_date.clone()));
        }
        if !self.send_date.trim().is_empty() && self.send_date().is_none() {
            return Err(ProcessValidationError::InvalidSendDate(
                self.send_date.clone(),
            ));
        }
        Ok(())
    }
}
