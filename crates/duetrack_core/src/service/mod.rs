//! Core use-case services.
//!
//! # Responsibility
//! - Turn UI events into store mutations and navigation state changes.
//! - Keep presentation bridges decoupled from store implementations.

pub mod tracker_service;
