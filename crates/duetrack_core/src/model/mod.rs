//! Domain model for tracked processes and calendar months.
//!
//! # Responsibility
//! - Define the canonical process record consumed by store and derivations.
//! - Provide the month value type used for calendar navigation.
//!
//! # Invariants
//! - A process is identified by its exact `name`.
//! - Dates are carried as ISO `YYYY-MM-DD` text and parsed on demand.

pub mod calendar;
pub mod process;
