//! Search-driven calendar navigation.
//!
//! # Responsibility
//! - Decide which month the calendar shows for a live search term.
//!
//! # See also
//! - `service::tracker_service` for the reactive recomputation trigger.

pub mod navigator;
