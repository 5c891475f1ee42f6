#![forbid(unsafe_code)]
use chrono::NaiveDate;
use roulement::io::date_headers;
use roulement::report::{render_coverage, render_roster_table, uncovered_warning};
use roulement::{
    build_schedule, coverage_grid, parse_pattern, prepare_summary, RotationPattern, Schedule,
    ScheduleOptions, Scheduler, TextSummary,
};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()
}

const NAMES: [&str; 7] = ["Alice", "Bob", "Charlie", "Diana", "Ethan", "Fiona", "George"];

#[test]
fn text_summary_for_default_roster() {
    let s = build_schedule(&NAMES, 8, &RotationPattern::simple(3, 3), 3);
    let summary = prepare_summary(&s, start(), ScheduleOptions::default(), &TextSummary).unwrap();

    assert_eq!(summary.end, NaiveDate::from_ymd_opt(2026, 2, 22).unwrap());
    assert!(summary.warnings.is_empty());
    insta::assert_snapshot!(summary.content.trim_end(), @r"
    Schedule: January 26, 2026 – February 22, 2026 (28 days)
    Pattern: OOOFFFFFF (9-day cycle, 3 crews) | 6 shifts, 48 hours per pay period
    Crews: 3 (9 employees minimum)
    ");
}

#[test]
fn summary_flags_gaps_and_overage() {
    let gaps = build_schedule(&NAMES, 8, &parse_pattern("OOFF").unwrap(), 1);
    let summary =
        prepare_summary(&gaps, start(), ScheduleOptions::default(), &TextSummary).unwrap();
    assert_eq!(
        summary.warnings,
        vec!["Warning: 2 uncovered day(s) in cycle: 3, 4".to_string()]
    );
    assert!(summary
        .content
        .contains("Warning: 2 uncovered day(s) in cycle: 3, 4"));

    let heavy = build_schedule(&["A"], 8, &parse_pattern("O").unwrap(), 1);
    let summary =
        prepare_summary(&heavy, start(), ScheduleOptions::default(), &TextSummary).unwrap();
    assert!(summary
        .content
        .contains("| 14 shifts, 112 hours per pay period (exceeds 80h cap)"));
    assert_eq!(summary.warnings.len(), 1);
    assert!(summary.warnings[0].contains("by 32h"));
}

#[test]
fn empty_schedule_has_no_summary() {
    let err = prepare_summary(
        &Schedule::default(),
        start(),
        ScheduleOptions::default(),
        &TextSummary,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "no employees to schedule");
}

#[test]
fn uncovered_days_are_one_based() {
    assert_eq!(uncovered_warning(&[]), None);
    assert_eq!(
        uncovered_warning(&[0, 5]).unwrap(),
        "Warning: 2 uncovered day(s) in cycle: 1, 6"
    );
}

#[test]
fn roster_and_coverage_tables() {
    let opts = ScheduleOptions {
        pay_period_days: 4,
        display_periods: 1,
        max_hours_per_period: 80,
    };
    let s = Scheduler::new(opts).build_schedule(&["Al", "Bo", "Cy"], 8, &parse_pattern("OOFF").unwrap(), 1);
    let headers = date_headers(start(), s.total_days).unwrap();

    insta::assert_snapshot!(render_roster_table(&s.employees, &headers).trim_end(), @r"
    Employee MTWT Hours
    Al       DD.. 16
    Bo       SS.. 16
    Cy       NN.. 16
    ");

    insta::assert_snapshot!(render_coverage(&coverage_grid(&s.employees, 4)).trim_end(), @r"
    Day     1  1  0  0
    Swing   1  1  0  0
    Night   1  1  0  0
    Total   3  3  0  0
    ");
}
