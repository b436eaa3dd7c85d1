//! Due-date proximity classification for calendar tiles.
//!
//! # See also
//! - `agenda` for the side-panel projection of the same process set.

pub mod classifier;
