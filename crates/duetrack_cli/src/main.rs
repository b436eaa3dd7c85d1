//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `duetrack_core` linkage.
//! - Keep output deterministic apart from the local date line.

use duetrack_core::{classify, Process, ISO_DATE_FORMAT};

fn main() {
    println!("duetrack_core ping={}", duetrack_core::ping());
    println!("duetrack_core version={}", duetrack_core::core_version());

    let today = chrono::Local::now().date_naive();
    let probe = [Process::new("probe", today.format(ISO_DATE_FORMAT).to_string())];
    println!(
        "duetrack_core today={} status={}",
        today,
        classify(today, &probe, today).label()
    );
}
