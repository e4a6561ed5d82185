use std::cmp::Ordering;
use std::collections::HashMap;

use crate::aggregate::CombinedRecord;
use crate::movement::rank_movement;
use crate::normalize::NormalizedRow;

/// Canonical combined ("Final") order: total weight descending, ties broken
/// by best placement ascending with "no placement" after any present
/// placement, then competitor key ascending. The last key makes the order
/// total, so a ranking is reproducible run-to-run for the same input.
pub fn rank_combined(records: &mut [CombinedRecord]) {
    records.sort_by(|a, b| {
        b.total_weight
            .total_cmp(&a.total_weight)
            .then_with(|| placement_order(a.best_placement).cmp(&placement_order(b.best_placement)))
            .then_with(|| a.competitor_key.cmp(&b.competitor_key))
    });
}

fn placement_order(placement: Option<u32>) -> u32 {
    placement.unwrap_or(u32::MAX)
}

/// Day-local ranking: each day is ranked independently by that day's
/// weight, not the combined total. Same tie-break discipline as the
/// combined order.
pub fn day_local_ranks(rows: &[NormalizedRow]) -> HashMap<String, u32> {
    sorted_day_rows(rows)
        .into_iter()
        .enumerate()
        .map(|(idx, row)| (row.competitor_key.clone(), (idx + 1) as u32))
        .collect()
}

fn sorted_day_rows(rows: &[NormalizedRow]) -> Vec<&NormalizedRow> {
    let mut order: Vec<&NormalizedRow> = rows.iter().collect();
    order.sort_by(|a, b| day_order(a, b));
    order
}

fn day_order(a: &NormalizedRow, b: &NormalizedRow) -> Ordering {
    b.weight
        .total_cmp(&a.weight)
        .then_with(|| placement_order(a.placement).cmp(&placement_order(b.placement)))
        .then_with(|| a.competitor_key.cmp(&b.competitor_key))
}

/// One line of a day-local standings table.
#[derive(Debug, Clone, PartialEq)]
pub struct DayStandingRow {
    pub rank: u32,
    pub competitor_key: String,
    pub display_name: String,
    pub fish_count: u32,
    pub weight: f64,
    /// Signed day-over-day movement; `None` on the first day or for a
    /// competitor with no previous-day rank.
    pub movement: Option<i32>,
}

/// Rank one day's rows and attach movement against the previous day's
/// day-local ranks. Pass `None` for the first day of a competition (and
/// always for single-day competitions): movement starts at day two.
pub fn day_standings(
    rows: &[NormalizedRow],
    prev_ranks: Option<&HashMap<String, u32>>,
) -> Vec<DayStandingRow> {
    sorted_day_rows(rows)
        .into_iter()
        .enumerate()
        .map(|(idx, row)| {
            let rank = (idx + 1) as u32;
            let movement = prev_ranks
                .and_then(|ranks| rank_movement(ranks.get(&row.competitor_key).copied(), rank));
            DayStandingRow {
                rank,
                competitor_key: row.competitor_key.clone(),
                display_name: row.display_name.clone(),
                fish_count: row.fish_count,
                weight: row.weight,
                movement,
            }
        })
        .collect()
}
