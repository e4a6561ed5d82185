use std::collections::HashMap;

use creelboard::aoy::{AoyConfig, points_for_placement, rank_aoy, season_total};

#[test]
fn placement_to_points_formula() {
    assert_eq!(points_for_placement(1), 100.0);
    assert_eq!(points_for_placement(2), 99.0);
    assert_eq!(points_for_placement(5), 96.0);
    assert_eq!(points_for_placement(15), 86.0);
}

#[test]
fn points_floor_at_zero_beyond_place_101() {
    assert_eq!(points_for_placement(100), 1.0);
    assert_eq!(points_for_placement(101), 0.0);
    assert_eq!(points_for_placement(102), 0.0);
    assert_eq!(points_for_placement(5000), 0.0);
    for place in 1..=200 {
        assert!(points_for_placement(place) >= 0.0);
    }
}

#[test]
fn season_counts_exactly_the_best_four_events() {
    let points = vec![100.0, 96.0, 86.0, 98.0, 81.0];
    assert_eq!(season_total(&points, AoyConfig::default()), 380.0);

    // Chronological order of events never matters.
    let shuffled = vec![81.0, 98.0, 100.0, 86.0, 96.0];
    assert_eq!(season_total(&shuffled, AoyConfig::default()), 380.0);
}

#[test]
fn fewer_events_than_the_cap_all_count() {
    let points = vec![92.0, 88.0];
    assert_eq!(season_total(&points, AoyConfig::default()), 180.0);
    assert_eq!(season_total(&[], AoyConfig::default()), 0.0);
}

#[test]
fn counted_events_cap_is_configurable() {
    let points = vec![100.0, 96.0, 86.0, 98.0, 81.0];
    let top_two = AoyConfig { counted_events: 2 };
    assert_eq!(season_total(&points, top_two), 198.0);
}

#[test]
fn aoy_standings_rank_by_total_points_descending() {
    let per_event: HashMap<String, Vec<f64>> = HashMap::from([
        ("m1".to_string(), vec![100.0, 96.0, 86.0, 98.0, 81.0]),
        ("m2".to_string(), vec![99.0, 99.0, 99.0, 99.0]),
        ("m3".to_string(), vec![90.0]),
    ]);

    let standings = rank_aoy(&per_event, 2026, AoyConfig::default());
    assert_eq!(standings.len(), 3);

    assert_eq!(standings[0].competitor_id, "m2");
    assert_eq!(standings[0].rank, 1);
    assert_eq!(standings[0].total_points, 396.0);
    assert_eq!(standings[1].competitor_id, "m1");
    assert_eq!(standings[1].total_points, 380.0);
    assert_eq!(standings[2].competitor_id, "m3");
    assert_eq!(standings[2].rank, 3);
    assert!(standings.iter().all(|s| s.season_year == 2026));
}

#[test]
fn aoy_point_ties_order_by_competitor_id() {
    let per_event: HashMap<String, Vec<f64>> = HashMap::from([
        ("m9".to_string(), vec![95.0]),
        ("m2".to_string(), vec![95.0]),
    ]);

    let standings = rank_aoy(&per_event, 2026, AoyConfig::default());
    assert_eq!(standings[0].competitor_id, "m2");
    assert_eq!(standings[1].competitor_id, "m9");
    assert_eq!(standings[1].rank, 2);
}
