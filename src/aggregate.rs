use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::normalize::{NormalizedRow, normalize_row};
use crate::rows::RawResultRow;
use crate::schedule::{self, EventDay};

/// Scoring knobs for combined aggregation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    /// Points awarded to a competitor whose best placement is 1 but whose
    /// points field never arrived from upstream. This is a compensating
    /// default for the event winner, not a scoring formula; it never
    /// overwrites nonzero points. `None` disables the award entirely.
    pub winner_default_points: Option<f64>,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            winner_default_points: Some(100.0),
        }
    }
}

/// Per-day slice of a competitor's combined record.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DayTotals {
    pub fish_count: u32,
    pub weight: f64,
}

/// One competitor's totals across all days of a competition. Exactly one
/// record exists per competitor key; `total_weight` always equals the sum
/// of the per-day weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedRecord {
    pub competitor_key: String,
    pub display_name: String,
    pub key_from_name: bool,
    pub per_day: HashMap<String, DayTotals>,
    pub total_weight: f64,
    pub total_fish_count: u32,
    pub total_season_points: f64,
    pub best_placement: Option<u32>,
}

/// Data-quality counters. Neither counter is an error: dropped and
/// duplicate rows degrade gracefully, but callers monitoring feed quality
/// want to see them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateStats {
    pub dropped_unknown_day: usize,
    pub duplicates_collapsed: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MultiDayAggregate {
    /// Normalized, deduplicated rows per day code. Every known day has an
    /// entry, possibly empty.
    pub per_day: HashMap<String, Vec<NormalizedRow>>,
    /// Unordered; ordering is `rank::rank_combined`'s job.
    pub combined: Vec<CombinedRecord>,
    pub stats: AggregateStats,
}

/// Full multi-day aggregation: group rows by known event day, deduplicate
/// within each day, fold everything into one combined record per
/// competitor, then apply the winner-default policy. Recomputes from
/// scratch on every call; nothing here is incremental or stateful.
///
/// Zero known event days is the explicit "no data" case: the result is
/// empty rather than a guess computed over an empty grouping.
pub fn aggregate_multi_day(
    rows: &[RawResultRow],
    event_days: &[EventDay],
    policy: ScoringPolicy,
) -> MultiDayAggregate {
    let days = schedule::order_event_days(event_days);
    if days.is_empty() {
        return MultiDayAggregate::default();
    }

    let grouped = schedule::group_rows_by_day(rows, &days);
    let mut stats = AggregateStats {
        dropped_unknown_day: grouped.dropped_unknown_day,
        duplicates_collapsed: 0,
    };

    let mut per_day: HashMap<String, Vec<NormalizedRow>> = HashMap::new();
    let mut records: HashMap<String, CombinedRecord> = HashMap::new();
    for day in &days {
        let raw = grouped
            .by_day
            .get(&day.day_code)
            .map(|rows| rows.as_slice())
            .unwrap_or(&[]);
        let normalized = dedup_day_rows(raw, &mut stats);
        for row in &normalized {
            fold_row(&mut records, &day.day_code, row, true);
        }
        per_day.insert(day.day_code.clone(), normalized);
    }

    let mut combined: Vec<CombinedRecord> = records.into_values().collect();
    if let Some(points) = policy.winner_default_points {
        for record in &mut combined {
            if record.total_season_points == 0.0 && record.best_placement == Some(1) {
                record.total_season_points = points;
            }
        }
    }

    MultiDayAggregate {
        per_day,
        combined,
        stats,
    }
}

/// Single-day convenience aggregation: no cross-day merge, no season
/// points, no winner default. Rows are deduplicated as one day's set and
/// keyed in the breakdown by their own day code when present.
pub fn aggregate_day(rows: &[RawResultRow]) -> Vec<CombinedRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut records: HashMap<String, CombinedRecord> = HashMap::new();
    for raw in rows {
        let row = normalize_row(raw);
        if !seen.insert(dedup_key(&row)) {
            continue;
        }
        let day_code = raw.day_code.as_deref().unwrap_or("day");
        fold_row(&mut records, day_code, &row, false);
    }
    records.into_values().collect()
}

/// Normalize one day's rows, collapsing duplicates. Two rows with the same
/// dedup key within a single day are the same row (double fetch, duplicate
/// upstream record) and count once.
fn dedup_day_rows(rows: &[RawResultRow], stats: &mut AggregateStats) -> Vec<NormalizedRow> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let normalized = normalize_row(row);
        if seen.insert(dedup_key(&normalized)) {
            out.push(normalized);
        } else {
            stats.duplicates_collapsed += 1;
        }
    }
    out
}

/// Row identity: the upstream row id when present, else a composite of
/// competitor key, placement, and weight.
fn dedup_key(row: &NormalizedRow) -> String {
    match row.row_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            let placement = row.placement.map(|p| p.to_string()).unwrap_or_default();
            format!("{}|{}|{:.4}", row.competitor_key, placement, row.weight)
        }
    }
}

fn fold_row(
    records: &mut HashMap<String, CombinedRecord>,
    day_code: &str,
    row: &NormalizedRow,
    accumulate_points: bool,
) {
    let record = records
        .entry(row.competitor_key.clone())
        .or_insert_with(|| CombinedRecord {
            competitor_key: row.competitor_key.clone(),
            display_name: row.display_name.clone(),
            key_from_name: false,
            per_day: HashMap::new(),
            total_weight: 0.0,
            total_fish_count: 0,
            total_season_points: 0.0,
            best_placement: None,
        });

    record.total_weight += row.weight;
    record.total_fish_count += row.fish_count;
    if accumulate_points {
        record.total_season_points += row.season_points.unwrap_or(0.0);
    }
    record.key_from_name |= row.key_from_name;

    let day = record.per_day.entry(day_code.to_string()).or_default();
    day.weight += row.weight;
    day.fish_count += row.fish_count;

    record.best_placement = match (record.best_placement, row.placement) {
        (Some(best), Some(p)) => Some(best.min(p)),
        (best, p) => best.or(p),
    };
}
