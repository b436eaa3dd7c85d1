//! Process store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide upsert-by-name and ordered listing over tracked processes.
//!
//! # Invariants
//! - Upsert on an existing name replaces only `due_date` and `attachment`.
//!   The stored `name` and `send_date` are kept as first submitted.
//! - Upsert never fails and grows the store by at most one record.

use crate::model::process::Process;
use log::debug;

/// What an upsert did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// Candidate was appended as a new record.
    Inserted,
    /// An existing record with the same name was updated in place.
    Updated,
}

impl UpsertOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inserted => "inserted",
            Self::Updated => "updated",
        }
    }
}

/// Storage interface for tracked processes.
pub trait ProcessStore {
    fn upsert(&mut self, candidate: Process) -> UpsertOutcome;
    fn all(&self) -> &[Process];

    fn get(&self, name: &str) -> Option<&Process> {
        self.all().iter().find(|process| process.name == name)
    }

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

/// Vec-backed store; contents live as long as the value.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProcessStore {
    processes: Vec<Process>,
}

impl InMemoryProcessStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProcessStore for InMemoryProcessStore {
    fn upsert(&mut self, candidate: Process) -> UpsertOutcome {
        let outcome = match self
            .processes
            .iter_mut()
            .find(|existing| existing.name == candidate.name)
        {
            Some(existing) => {
                existing.due_date = candidate.due_date;
                existing.attachment = candidate.attachment;
                UpsertOutcome::Updated
            }
            None => {
                self.processes.push(candidate);
                UpsertOutcome::Inserted
            }
        };

        debug!(
            "event=process_upsert module=store status=ok action={} size={}",
            outcome.as_str(),
            self.processes.len()
        );
        outcome
    }

    fn all(&self) -> &[Process] {
        &self.processes
    }
}

impl FromIterator<Process> for InMemoryProcessStore {
    fn from_iter<T: IntoIterator<Item = Process>>(iter: T) -> Self {
        let mut store = Self::new();
        for process in iter {
            store.upsert(process);
        }
        store
    }
}
