use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use rayon::prelude::*;

use creelboard::aggregate::{ScoringPolicy, aggregate_multi_day};
use creelboard::aoy::{AoyConfig, points_for_placement, rank_aoy};
use creelboard::rank::day_local_ranks;
use creelboard::report::{build_report, render};
use creelboard::rows::{RawResultRow, parse_result_rows_json, parse_schedule_json};
use creelboard::schedule::{EventDay, order_event_days};
use creelboard::{export, sample_feed};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let winner_default = env::var("WINNER_DEFAULT_POINTS")
        .ok()
        .and_then(|val| val.parse::<f64>().ok())
        .unwrap_or(100.0);
    let policy = ScoringPolicy {
        winner_default_points: (winner_default > 0.0).then_some(winner_default),
    };
    let aoy_config = AoyConfig {
        counted_events: env::var("AOY_BEST_N")
            .ok()
            .and_then(|val| val.parse::<usize>().ok())
            .unwrap_or(4)
            .clamp(1, 12),
    };

    let (schedule, rows, provisional) = if args.is_empty() {
        sample_input()
    } else {
        load_from_files(&args)?
    };

    let aggregate = aggregate_multi_day(&rows, &schedule, policy);
    if aggregate.combined.is_empty() {
        println!("no results to show");
        return Ok(());
    }

    // Season preview: score each day as a standalone event from its
    // day-local placements.
    let ordered = order_event_days(&schedule);
    let mut per_event_points: HashMap<String, Vec<f64>> = HashMap::new();
    for day in &ordered {
        let Some(day_rows) = aggregate.per_day.get(&day.day_code) else {
            continue;
        };
        for (key, rank) in day_local_ranks(day_rows) {
            per_event_points
                .entry(key)
                .or_default()
                .push(points_for_placement(rank));
        }
    }
    let season_year = ordered
        .first()
        .map(|day| day.event_date.year())
        .unwrap_or_else(|| Utc::now().year());
    let aoy = rank_aoy(&per_event_points, season_year, aoy_config);

    let mut report = build_report(&aggregate, &schedule, aoy);
    report.provisional = provisional;
    print!("{}", render(&report));

    if let Ok(path) = env::var("EXPORT_XLSX") {
        let summary = export::export_workbook(Path::new(&path), &report)?;
        eprintln!(
            "exported {} row(s) across {} sheet(s) to {path}",
            summary.rows, summary.sheets
        );
    }

    Ok(())
}

fn sample_input() -> (Vec<EventDay>, Vec<RawResultRow>, bool) {
    let days = env::var("SAMPLE_DAYS")
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(3)
        .clamp(1, 7);
    let field = env::var("SAMPLE_FIELD")
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(18)
        .clamp(2, sample_feed::max_field_size());
    let seed = env::var("SAMPLE_SEED")
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(26);

    eprintln!("no input files given; showing a sample tournament (SAMPLE_SEED={seed})");
    let start = Utc::now().date_naive();
    let (schedule, rows) = sample_feed::sample_tournament(seed, days, field, start);
    (schedule, rows, false)
}

/// First argument is the schedule document; every following argument is
/// one day's results document. Day documents load in parallel. A document
/// that fails to load leaves its day explicitly empty and marks the
/// aggregate provisional rather than aborting the run.
fn load_from_files(args: &[String]) -> Result<(Vec<EventDay>, Vec<RawResultRow>, bool)> {
    let schedule_raw =
        fs::read_to_string(&args[0]).with_context(|| format!("reading schedule {}", args[0]))?;
    let schedule = parse_schedule_json(&schedule_raw)
        .with_context(|| format!("parsing schedule {}", args[0]))?;

    let loaded: Vec<(&String, Result<Vec<RawResultRow>>)> = args[1..]
        .par_iter()
        .map(|path| {
            let result = fs::read_to_string(path)
                .with_context(|| format!("reading results {path}"))
                .and_then(|raw| {
                    parse_result_rows_json(&raw).with_context(|| format!("parsing results {path}"))
                });
            (path, result)
        })
        .collect();

    let mut rows = Vec::new();
    let mut provisional = false;
    for (path, result) in loaded {
        match result {
            Ok(day_rows) => rows.extend(day_rows),
            Err(err) => {
                eprintln!("[WARN] {path}: {err:#}; treating that day as not yet reported");
                provisional = true;
            }
        }
    }

    Ok((schedule, rows, provisional))
}
