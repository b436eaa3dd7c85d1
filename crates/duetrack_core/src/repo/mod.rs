//! Process storage contracts and implementations.
//!
//! # Responsibility
//! - Own the tracked process list exclusively.
//! - Isolate storage details from session orchestration.
//!
//! # Invariants
//! - At most one record per distinct `name`.
//! - Insertion order is observable through `all()`.

pub mod process_repo;
