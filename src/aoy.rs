use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Season scoring knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AoyConfig {
    /// How many of a competitor's best event totals count toward the
    /// season. Rewards consistency among a capped number of events.
    pub counted_events: usize,
}

impl Default for AoyConfig {
    fn default() -> Self {
        Self { counted_events: 4 }
    }
}

/// Season-level standing for one competitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AoyStanding {
    pub competitor_id: String,
    pub rank: u32,
    pub total_points: f64,
    pub season_year: i32,
}

/// Event placement to Angler of the Year points: place 1 earns 100, each
/// subsequent place one fewer, floored at 0 beyond place 101.
pub fn points_for_placement(placement: u32) -> f64 {
    if placement == 0 {
        return 0.0;
    }
    (101i64 - i64::from(placement)).max(0) as f64
}

/// Sum of the best `counted_events` event totals, regardless of the order
/// events were fished in. Fewer events than the cap: sum them all.
pub fn season_total(event_points: &[f64], config: AoyConfig) -> f64 {
    let mut sorted: Vec<f64> = event_points
        .iter()
        .copied()
        .filter(|p| p.is_finite())
        .collect();
    sorted.sort_by(|a, b| b.total_cmp(a));
    sorted.iter().take(config.counted_events).sum()
}

/// Build season standings from each competitor's per-event point totals.
/// Ordered by season total descending, competitor id ascending on ties;
/// ranks are 1-based.
pub fn rank_aoy(
    per_event_points: &HashMap<String, Vec<f64>>,
    season_year: i32,
    config: AoyConfig,
) -> Vec<AoyStanding> {
    let mut standings: Vec<AoyStanding> = per_event_points
        .iter()
        .map(|(competitor_id, points)| AoyStanding {
            competitor_id: competitor_id.clone(),
            rank: 0,
            total_points: season_total(points, config),
            season_year,
        })
        .collect();

    standings.sort_by(|a, b| {
        b.total_points
            .total_cmp(&a.total_points)
            .then_with(|| a.competitor_id.cmp(&b.competitor_id))
    });
    for (idx, standing) in standings.iter_mut().enumerate() {
        standing.rank = (idx + 1) as u32;
    }
    standings
}
