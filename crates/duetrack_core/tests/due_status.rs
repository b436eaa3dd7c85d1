use chrono::{Duration, NaiveDate};
use duetrack_core::{classify, DueStatus, Process};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn due_in(days: i64) -> (NaiveDate, Vec<Process>) {
    let due = today() + Duration::days(days);
    let processes = vec![Process::new("P", due.format("%Y-%m-%d").to_string())];
    (due, processes)
}

#[test]
fn due_today_needs_attention() {
    let (due, processes) = due_in(0);
    assert_eq!(classify(due, &processes, today()), DueStatus::Attention);
}

#[test]
fn due_yesterday_is_expired() {
    let (due, processes) = due_in(-1);
    assert_eq!(classify(due, &processes, today()), DueStatus::Expired);
}

#[test]
fn ninety_day_boundary_is_inclusive() {
    let (due, processes) = due_in(90);
    assert_eq!(classify(due, &processes, today()), DueStatus::Attention);

    let (due, processes) = due_in(91);
    assert_eq!(classify(due, &processes, today()), DueStatus::Valid);
}

#[test]
fn dates_without_a_due_process_are_none() {
    let (due, processes) = due_in(10);
    let other = due + Duration::days(1);
    assert_eq!(classify(other, &processes, today()), DueStatus::None);
    assert_eq!(classify(due, &[], today()), DueStatus::None);
}

#[test]
fn malformed_due_dates_are_never_classified() {
    let processes = vec![
        Process::new("broken", "2024-13-40"),
        Process::new("empty", ""),
    ];
    assert_eq!(classify(today(), &processes, today()), DueStatus::None);
}

#[test]
fn tied_processes_share_one_status() {
    let processes = vec![
        Process::new("first", "2024-07-01"),
        Process::new("second", "2024-07-01"),
    ];
    let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

    let forward = classify(date, &processes, today());
    let reversed: Vec<Process> = processes.iter().rev().cloned().collect();
    assert_eq!(forward, classify(date, &reversed, today()));
    assert_eq!(forward, DueStatus::Attention);
}

#[test]
fn classify_is_repeatable() {
    let (due, processes) = due_in(-30);
    let first = classify(due, &processes, today());
    for _ in 0..3 {
        assert_eq!(classify(due, &processes, today()), first);
    }
}

#[test]
fn non_canonical_due_dates_are_never_classified() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    for raw in ["2024-3-5", "2024-03-5", "+2024-03-05", " 2024-03-05 "] {
        let processes = vec![Process::new("x", raw)];
        assert_eq!(
            classify(date, &processes, date),
            DueStatus::None,
            "`{raw}` must not color a tile"
        );
    }
}
