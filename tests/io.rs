#![forbid(unsafe_code)]
use chrono::NaiveDate;
use roulement::io::{
    date_headers, export_schedule_csv, export_schedule_json, import_names_csv, parse_names,
    write_schedule_csv,
};
use roulement::{build_schedule, parse_pattern, Schedule, ScheduleOptions, Scheduler};
use std::fs;
use tempfile::tempdir;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()
}

#[test]
fn names_are_trimmed_and_filtered() {
    assert_eq!(parse_names(" Alice, ,Bob ,"), vec!["Alice", "Bob"]);
    assert!(parse_names(" , ").is_empty());
}

#[test]
fn headers_follow_calendar() {
    let headers = date_headers(start(), 8).unwrap();
    assert_eq!(headers[0], "Mon 01/26");
    assert_eq!(headers[1], "Tue 01/27");
    assert_eq!(headers[6], "Sun 02/01");
    assert_eq!(headers.len(), 8);
    assert!(date_headers(start(), 0).unwrap().is_empty());
}

#[test]
fn csv_rows_mark_off_days_empty() {
    let opts = ScheduleOptions {
        pay_period_days: 2,
        display_periods: 1,
        max_hours_per_period: 80,
    };
    let s = Scheduler::new(opts).build_schedule(&["A", "B"], 8, &parse_pattern("OF").unwrap(), 1);
    let headers = date_headers(start(), s.total_days).unwrap();

    let mut buf = Vec::new();
    write_schedule_csv(&mut buf, &s.employees, &headers).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Employee,Mon 01/26,Tue 01/27,Total Hours",
            "A,D,,8",
            "B,S,,8",
        ]
    );
}

#[test]
fn csv_export_to_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.csv");
    let s = build_schedule(&["A", "B", "C", "D"], 12, &parse_pattern("OOFF").unwrap(), 2);
    let headers = date_headers(start(), s.total_days).unwrap();
    export_schedule_csv(&path, &s.employees, &headers).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    assert_eq!(rdr.headers().unwrap().len(), 30);
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(&rows[3][0], "D");
    // D ouvre l'équipe 1, décalée de 2 jours
    assert_eq!(&rows[3][1], "");
    assert_eq!(&rows[3][3], "D");
    assert_eq!(&rows[3][29], "168");
}

#[test]
fn json_export_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.json");
    let s = build_schedule(&["A", "B", "C"], 8, &parse_pattern("OOOFFFF").unwrap(), 1);
    export_schedule_json(&path, &s).unwrap();

    let back: Schedule = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back, s);
}

#[test]
fn import_names_from_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("people.csv");
    fs::write(&path, "name,team\nAlice,1\n Bob ,2\n").unwrap();
    assert_eq!(import_names_csv(&path).unwrap(), vec!["Alice", "Bob"]);

    fs::write(&path, "name\nAlice\n\"\"\n").unwrap();
    assert!(import_names_csv(&path).is_err());
}
