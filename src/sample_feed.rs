use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::aoy;
use crate::rows::RawResultRow;
use crate::schedule::EventDay;

/// Demo roster. Ids are stable per index; a few rows intentionally omit
/// the id so the name-key fallback path gets exercised.
const ROSTER: &[&str] = &[
    "Avery Stone",
    "Rosa Vega",
    "Marcus Holt",
    "Jules Nox",
    "Tessa Vale",
    "Ken Rook",
    "Lena Park",
    "Dev Moss",
    "Ira Noor",
    "Cam Hale",
    "Vic Ash",
    "Ella Pike",
    "Nat Gray",
    "Omar Reed",
    "Pat Quinn",
    "Sal Brook",
    "Wren Cole",
    "Ty Marsh",
    "Ida Lake",
    "Gus Ford",
    "Mia Crane",
    "Rex Dunn",
    "Fay Shore",
    "Leo Bass",
];

pub fn max_field_size() -> usize {
    ROSTER.len()
}

pub fn sample_schedule(days: usize, start: NaiveDate) -> Vec<EventDay> {
    (0..days)
        .map(|idx| EventDay {
            day_code: format!("d{}", idx + 1),
            event_date: start + Duration::days(idx as i64),
        })
        .collect()
}

/// Seeded multi-day tournament: schedule plus one raw row per competitor
/// per day. Same seed, same tournament, so demos and benches reproduce.
pub fn sample_tournament(
    seed: u64,
    days: usize,
    field_size: usize,
    start: NaiveDate,
) -> (Vec<EventDay>, Vec<RawResultRow>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let schedule = sample_schedule(days, start);
    let mut rows = Vec::new();
    for day in &schedule {
        rows.extend(sample_day_rows(&mut rng, day, field_size));
    }
    (schedule, rows)
}

/// One day's weigh-in sheet. Roughly a quarter of the field blanks (no
/// qualifying catch); placements follow day weight; points follow
/// placement except for a small share of rows where upstream "forgot" to
/// populate them.
pub fn sample_day_rows(rng: &mut StdRng, day: &EventDay, field_size: usize) -> Vec<RawResultRow> {
    let field = field_size.min(ROSTER.len());
    let mut weights: Vec<(usize, f64)> = (0..field)
        .map(|idx| {
            let weight = if rng.gen_bool(0.25) {
                0.0
            } else {
                round_oz(rng.gen_range(3.0..22.0))
            };
            (idx, weight)
        })
        .collect();

    let mut placed = weights.clone();
    placed.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let mut placements: Vec<Option<u32>> = vec![None; field];
    for (place, (idx, weight)) in placed.iter().enumerate() {
        if *weight > 0.0 {
            placements[*idx] = Some((place + 1) as u32);
        }
    }

    weights
        .drain(..)
        .map(|(idx, weight)| {
            let placement = placements[idx];
            let season_points = placement
                .filter(|_| !rng.gen_bool(0.15))
                .map(aoy::points_for_placement);
            RawResultRow {
                row_id: Some(format!("{}-{}", day.day_code, idx)),
                // Every seventh member's id is missing from the export.
                competitor_id: (idx % 7 != 3).then(|| format!("m{idx:02}")),
                competitor_name: ROSTER[idx].to_string(),
                day_code: Some(day.day_code.clone()),
                weight: Some(weight),
                fish_count: (weight > 0.0).then(|| rng.gen_range(1..=5)),
                placement,
                season_points,
            }
        })
        .collect()
}

fn round_oz(weight: f64) -> f64 {
    (weight * 100.0).round() / 100.0
}
