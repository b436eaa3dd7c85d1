use duetrack_core::{group_by_day, Process, YearMonth};

fn march_2024() -> YearMonth {
    YearMonth::new(2024, 3).unwrap()
}

#[test]
fn same_day_processes_keep_input_order() {
    let processes = vec![
        Process::new("A", "2024-03-05"),
        Process::new("B", "2024-03-05"),
    ];

    let agenda = group_by_day(&processes, "", march_2024());
    let day = agenda.day(5).expect("day 5 should be present");
    let names: Vec<&str> = day.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(agenda.days().count(), 1);
}

#[test]
fn other_months_are_excluded_even_when_search_matches() {
    let processes = vec![
        Process::new("Alpha", "2024-04-05"),
        Process::new("Alpha", "2023-03-05"),
        Process::new("Alpha beta", "2024-03-09"),
    ];

    let agenda = group_by_day(&processes, "alpha", march_2024());
    assert_eq!(agenda.process_count(), 1);
    assert!(agenda.day(9).is_some());
    assert!(agenda.day(5).is_none());
}

#[test]
fn search_filter_is_case_insensitive_substring() {
    let processes = vec![
        Process::new("Renewal CNPJ", "2024-03-01"),
        Process::new("Audit", "2024-03-01"),
    ];

    let agenda = group_by_day(&processes, "cnpj", march_2024());
    let names: Vec<&str> = agenda
        .day(1)
        .unwrap()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Renewal CNPJ"]);
}

#[test]
fn days_iterate_ascending_without_empty_buckets() {
    let processes = vec![
        Process::new("late", "2024-03-28"),
        Process::new("early", "2024-03-02"),
        Process::new("broken", "2024-03-xx"),
    ];

    let agenda = group_by_day(&processes, "", march_2024());
    let days: Vec<u32> = agenda.days().map(|(day, _)| day).collect();
    assert_eq!(days, vec![2, 28]);
    assert!(agenda.days().all(|(_, items)| !items.is_empty()));
}

#[test]
fn nothing_matching_yields_empty_agenda() {
    let processes = vec![Process::new("Alpha", "2024-03-05")];

    assert!(group_by_day(&processes, "zeta", march_2024()).is_empty());
    assert!(group_by_day(&[], "", march_2024()).is_empty());
}

#[test]
fn non_canonical_due_dates_never_land_in_a_bucket() {
    let processes = vec![
        Process::new("unpadded", "2024-3-5"),
        Process::new("signed", "+2024-03-05"),
        Process::new("padded", "2024-03-05"),
    ];

    let agenda = group_by_day(&processes, "", march_2024());
    assert_eq!(agenda.process_count(), 1);
    let names: Vec<&str> = agenda
        .day(5)
        .unwrap()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["padded"]);
}
