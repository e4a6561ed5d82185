use std::fs;
use std::path::PathBuf;

use creelboard::rows::{parse_number, parse_result_rows_json, parse_schedule_json};
use creelboard::schedule::{day_label, order_event_days};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_day_results_fixture() {
    let raw = read_fixture("day_results.json");
    let rows = parse_result_rows_json(&raw).expect("fixture should parse");
    // The entry with neither name nor id is unusable and skipped.
    assert_eq!(rows.len(), 4);

    let dana = &rows[0];
    assert_eq!(dana.row_id.as_deref(), Some("r1"));
    assert_eq!(dana.competitor_id.as_deref(), Some("m7"));
    assert_eq!(dana.weight, Some(12.40));
    assert_eq!(dana.fish_count, Some(5));
    assert_eq!(dana.placement, Some(1));
    assert_eq!(dana.season_points, Some(100.0));

    let lee = &rows[1];
    assert!(lee.competitor_id.is_none());
    assert_eq!(lee.competitor_name, "Lee   Moss");
    assert_eq!(lee.weight, Some(8.75));

    let kim = &rows[2];
    assert_eq!(kim.weight, None);
    assert_eq!(kim.fish_count, Some(0));
}

#[test]
fn null_and_empty_documents_are_empty() {
    assert!(
        parse_result_rows_json("null")
            .expect("null should parse")
            .is_empty()
    );
    assert!(
        parse_result_rows_json("  ")
            .expect("blank should parse")
            .is_empty()
    );
    assert!(
        parse_schedule_json("null")
            .expect("null should parse")
            .is_empty()
    );
}

#[test]
fn wrapped_results_object_parses() {
    let raw = r#"{"results": [{"memberId": "m1", "memberName": "A", "weight": "3.5"}]}"#;
    let rows = parse_result_rows_json(raw).expect("wrapped list should parse");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].weight, Some(3.5));
}

#[test]
fn malformed_documents_are_errors() {
    assert!(parse_result_rows_json("5").is_err());
    assert!(parse_result_rows_json(r#"{"unexpected": true}"#).is_err());
    assert!(parse_schedule_json(r#""just a string""#).is_err());
}

#[test]
fn parses_schedule_fixture_in_date_order() {
    let raw = read_fixture("schedule.json");
    let days = parse_schedule_json(&raw).expect("fixture should parse");
    assert_eq!(days.len(), 3);

    // Stored order is d2 first; canonical order follows the dates.
    let ordered = order_event_days(&days);
    let codes: Vec<&str> = ordered.iter().map(|d| d.day_code.as_str()).collect();
    assert_eq!(codes, vec!["d1", "d2", "d3"]);
    assert_eq!(day_label(0), "Day 1");
    assert_eq!(day_label(2), "Day 3");
}

#[test]
fn parse_number_strips_decorations() {
    assert_eq!(parse_number("12.40 lbs"), Some(12.40));
    assert_eq!(parse_number(" 1,204 "), Some(1204.0));
    assert_eq!(parse_number("8.75"), Some(8.75));
    assert_eq!(parse_number("-"), None);
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("n/a"), None);
}
