use std::env;
use std::fs;

use chrono::NaiveDate;

use creelboard::aggregate::{ScoringPolicy, aggregate_multi_day};
use creelboard::export::export_workbook;
use creelboard::report::{build_report, movement_indicator, render};
use creelboard::rows::RawResultRow;
use creelboard::schedule::EventDay;

fn day(code: &str, date: (i32, u32, u32)) -> EventDay {
    EventDay {
        day_code: code.to_string(),
        event_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid test date"),
    }
}

fn row(id: &str, name: &str, day_code: &str, weight: f64) -> RawResultRow {
    RawResultRow {
        row_id: None,
        competitor_id: Some(id.to_string()),
        competitor_name: name.to_string(),
        day_code: Some(day_code.to_string()),
        weight: Some(weight),
        fish_count: None,
        placement: None,
        season_points: None,
    }
}

fn two_day_report() -> creelboard::report::TournamentReport {
    let days = vec![day("d1", (2026, 4, 11)), day("d2", (2026, 4, 12))];
    let rows = vec![
        row("m1", "Avery Stone", "d1", 9.0),
        row("m2", "Rosa Vega", "d1", 7.0),
        row("m1", "Avery Stone", "d2", 3.0),
        row("m2", "Rosa Vega", "d2", 8.0),
    ];
    let aggregate = aggregate_multi_day(&rows, &days, ScoringPolicy::default());
    build_report(&aggregate, &days, Vec::new())
}

#[test]
fn movement_starts_on_the_second_day() {
    let report = two_day_report();
    assert_eq!(report.day_standings.len(), 2);

    let (_, day1) = &report.day_standings[0];
    assert!(day1.iter().all(|r| r.movement.is_none()));

    let (_, day2) = &report.day_standings[1];
    let rosa = day2.iter().find(|r| r.competitor_key == "m2").unwrap();
    assert_eq!(rosa.rank, 1);
    assert_eq!(rosa.movement, Some(1));
    let avery = day2.iter().find(|r| r.competitor_key == "m1").unwrap();
    assert_eq!(avery.movement, Some(-1));
}

#[test]
fn single_day_competitions_never_compute_movement() {
    let days = vec![day("d1", (2026, 4, 11))];
    let rows = vec![
        row("m1", "Avery Stone", "d1", 9.0),
        row("m2", "Rosa Vega", "d1", 7.0),
    ];
    let aggregate = aggregate_multi_day(&rows, &days, ScoringPolicy::default());
    let report = build_report(&aggregate, &days, Vec::new());

    let (_, standings) = &report.day_standings[0];
    assert!(standings.iter().all(|r| r.movement.is_none()));
}

#[test]
fn combined_records_come_out_ranked() {
    let report = two_day_report();
    // Avery 12.0 total, Rosa 15.0 total.
    assert_eq!(report.combined[0].competitor_key, "m2");
    assert_eq!(report.combined[1].competitor_key, "m1");
}

#[test]
fn movement_indicators_render_signed_arrows() {
    assert_eq!(movement_indicator(Some(3)), "▲3");
    assert_eq!(movement_indicator(Some(-2)), "▼2");
    assert_eq!(movement_indicator(Some(0)), "–");
    assert_eq!(movement_indicator(None), "–");
}

#[test]
fn rendered_report_contains_all_sections() {
    let mut report = two_day_report();
    report.provisional = true;
    let text = render(&report);

    assert!(text.contains("FINAL STANDINGS"));
    assert!(text.contains("DAY 1"));
    assert!(text.contains("DAY 2"));
    assert!(text.contains("Rosa Vega"));
    assert!(text.contains("15.00"));
    assert!(text.contains("provisional"));
}

#[test]
fn name_keyed_records_are_flagged_in_the_table() {
    let days = vec![day("d1", (2026, 4, 11))];
    let rows = vec![RawResultRow {
        competitor_id: None,
        ..row("", "Dana Pike", "d1", 5.0)
    }];
    let aggregate = aggregate_multi_day(&rows, &days, ScoringPolicy::default());
    let report = build_report(&aggregate, &days, Vec::new());

    let text = render(&report);
    assert!(text.contains("Dana Pike*"));
    assert!(text.contains("identity matched by name only"));
}

#[test]
fn workbook_export_writes_one_sheet_per_section() {
    let report = two_day_report();
    let path = env::temp_dir().join("creelboard_report_test.xlsx");

    let summary = export_workbook(&path, &report).expect("export should succeed");
    // "Final" plus one sheet per day; no AOY standings in this report.
    assert_eq!(summary.sheets, 3);
    assert_eq!(summary.rows, 6);
    assert!(fs::metadata(&path).is_ok());
    let _ = fs::remove_file(&path);
}
