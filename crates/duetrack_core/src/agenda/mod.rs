//! Side-panel projection of processes due in the displayed month.

pub mod month_grouper;
