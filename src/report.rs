use std::collections::HashMap;

use chrono::Datelike;

use crate::aggregate::{AggregateStats, CombinedRecord, MultiDayAggregate};
use crate::aoy::AoyStanding;
use crate::rank::{DayStandingRow, day_local_ranks, day_standings, rank_combined};
use crate::schedule::{EventDay, day_label, order_event_days};

/// Everything the terminal and the workbook export need, ranked and in
/// day order.
#[derive(Debug, Clone, Default)]
pub struct TournamentReport {
    pub days: Vec<EventDay>,
    pub combined: Vec<CombinedRecord>,
    pub day_standings: Vec<(EventDay, Vec<DayStandingRow>)>,
    pub aoy: Vec<AoyStanding>,
    pub stats: AggregateStats,
    /// Set when at least one day's rows could not be loaded; the
    /// aggregate still computes, but over explicitly empty days.
    pub provisional: bool,
}

pub fn build_report(
    aggregate: &MultiDayAggregate,
    event_days: &[EventDay],
    aoy: Vec<AoyStanding>,
) -> TournamentReport {
    let days = order_event_days(event_days);

    let mut combined = aggregate.combined.clone();
    rank_combined(&mut combined);

    let mut standings: Vec<(EventDay, Vec<DayStandingRow>)> = Vec::with_capacity(days.len());
    let mut prev_ranks: Option<HashMap<String, u32>> = None;
    for day in &days {
        let rows = aggregate
            .per_day
            .get(&day.day_code)
            .map(|rows| rows.as_slice())
            .unwrap_or(&[]);
        standings.push((day.clone(), day_standings(rows, prev_ranks.as_ref())));
        prev_ranks = Some(day_local_ranks(rows));
    }

    TournamentReport {
        days,
        combined,
        day_standings: standings,
        aoy,
        stats: aggregate.stats,
        provisional: false,
    }
}

pub fn movement_indicator(movement: Option<i32>) -> String {
    match movement {
        Some(m) if m > 0 => format!("▲{m}"),
        Some(m) if m < 0 => format!("▼{}", -m),
        _ => "–".to_string(),
    }
}

pub fn format_weight(weight: f64) -> String {
    format!("{weight:.2}")
}

/// Render the whole report as plain text. Pure string building, so the
/// tables are testable without a terminal.
pub fn render(report: &TournamentReport) -> String {
    let mut out = String::new();

    if report.provisional {
        out.push_str("(provisional: at least one day has not reported)\n\n");
    }

    out.push_str("FINAL STANDINGS\n");
    out.push_str(&combined_table(&report.combined, &report.days));

    for (ordinal, (day, rows)) in report.day_standings.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!(
            "{} - {}\n",
            day_label(ordinal).to_uppercase(),
            day.event_date.format("%Y-%m-%d")
        ));
        out.push_str(&day_table(rows));
    }

    if !report.aoy.is_empty() {
        let season = report
            .aoy
            .first()
            .map(|s| s.season_year)
            .unwrap_or_else(|| report.days.first().map(|d| d.event_date.year()).unwrap_or(0));
        out.push('\n');
        out.push_str(&format!("ANGLER OF THE YEAR - {season}\n"));
        out.push_str(&aoy_table(&report.aoy));
    }

    if report.stats.dropped_unknown_day > 0 || report.stats.duplicates_collapsed > 0 {
        out.push('\n');
        out.push_str(&format!(
            "data quality: {} row(s) dropped (unknown day), {} duplicate(s) collapsed\n",
            report.stats.dropped_unknown_day, report.stats.duplicates_collapsed
        ));
    }
    if report.combined.iter().any(|r| r.key_from_name) {
        out.push_str("* identity matched by name only (no member id on file)\n");
    }

    out
}

pub fn combined_table(records: &[CombinedRecord], days: &[EventDay]) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(records.len() + 1);
    let mut header = vec![
        "#".to_string(),
        "Angler".to_string(),
        "Fish".to_string(),
        "Weight".to_string(),
    ];
    for (ordinal, _) in days.iter().enumerate() {
        header.push(day_label(ordinal));
    }
    header.push("Points".to_string());
    header.push("Best".to_string());
    rows.push(header);

    for (idx, record) in records.iter().enumerate() {
        let mut row = vec![
            (idx + 1).to_string(),
            flagged_name(&record.display_name, record.key_from_name),
            record.total_fish_count.to_string(),
            format_weight(record.total_weight),
        ];
        for day in days {
            let weight = record
                .per_day
                .get(&day.day_code)
                .map(|totals| format_weight(totals.weight))
                .unwrap_or_else(|| "-".to_string());
            row.push(weight);
        }
        row.push(format_weight(record.total_season_points));
        row.push(
            record
                .best_placement
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
        rows.push(row);
    }

    render_table(&rows)
}

pub fn day_table(standings: &[DayStandingRow]) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(standings.len() + 1);
    rows.push(vec![
        "#".to_string(),
        "Mv".to_string(),
        "Angler".to_string(),
        "Fish".to_string(),
        "Weight".to_string(),
    ]);
    for row in standings {
        rows.push(vec![
            row.rank.to_string(),
            movement_indicator(row.movement),
            row.display_name.clone(),
            row.fish_count.to_string(),
            format_weight(row.weight),
        ]);
    }
    render_table(&rows)
}

pub fn aoy_table(standings: &[AoyStanding]) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(standings.len() + 1);
    rows.push(vec![
        "#".to_string(),
        "Member".to_string(),
        "Points".to_string(),
    ]);
    for standing in standings {
        rows.push(vec![
            standing.rank.to_string(),
            standing.competitor_id.clone(),
            format_weight(standing.total_points),
        ]);
    }
    render_table(&rows)
}

fn flagged_name(name: &str, key_from_name: bool) -> String {
    if key_from_name {
        format!("{name}*")
    } else {
        name.to_string()
    }
}

fn render_table(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in rows {
        let mut line = String::new();
        for (col, cell) in row.iter().enumerate() {
            if col > 0 {
                line.push_str("  ");
            }
            line.push_str(cell);
            let pad = widths[col].saturating_sub(cell.chars().count());
            if col + 1 < row.len() {
                line.push_str(&" ".repeat(pad));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
