//! UI bridge for duetrack core.

pub mod api;
