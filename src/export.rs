use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::report::{TournamentReport, format_weight, movement_indicator};
use crate::schedule::day_label;

pub struct ExportSummary {
    pub sheets: usize,
    /// Data rows written, headers excluded.
    pub rows: usize,
}

/// Write a standings workbook: a "Final" sheet, one sheet per event day,
/// and an "AOY" sheet when season standings are present.
pub fn export_workbook(path: &Path, report: &TournamentReport) -> Result<ExportSummary> {
    let mut workbook = Workbook::new();
    let mut sheets = 0usize;
    let mut data_rows = 0usize;

    {
        let rows = final_rows(report);
        data_rows += rows.len().saturating_sub(1);
        let sheet = workbook.add_worksheet();
        sheet.set_name("Final")?;
        write_rows(sheet, &rows)?;
        sheets += 1;
    }

    for (ordinal, (_, standings)) in report.day_standings.iter().enumerate() {
        let mut rows = vec![vec![
            "Rank".to_string(),
            "Movement".to_string(),
            "Angler".to_string(),
            "Fish".to_string(),
            "Weight".to_string(),
        ]];
        for row in standings {
            rows.push(vec![
                row.rank.to_string(),
                movement_indicator(row.movement),
                row.display_name.clone(),
                row.fish_count.to_string(),
                format_weight(row.weight),
            ]);
        }
        data_rows += rows.len().saturating_sub(1);
        let sheet = workbook.add_worksheet();
        sheet.set_name(day_label(ordinal))?;
        write_rows(sheet, &rows)?;
        sheets += 1;
    }

    if !report.aoy.is_empty() {
        let mut rows = vec![vec![
            "Rank".to_string(),
            "Member".to_string(),
            "Points".to_string(),
            "Season".to_string(),
        ]];
        for standing in &report.aoy {
            rows.push(vec![
                standing.rank.to_string(),
                standing.competitor_id.clone(),
                format_weight(standing.total_points),
                standing.season_year.to_string(),
            ]);
        }
        data_rows += rows.len().saturating_sub(1);
        let sheet = workbook.add_worksheet();
        sheet.set_name("AOY")?;
        write_rows(sheet, &rows)?;
        sheets += 1;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;

    Ok(ExportSummary {
        sheets,
        rows: data_rows,
    })
}

fn final_rows(report: &TournamentReport) -> Vec<Vec<String>> {
    let mut header = vec![
        "Rank".to_string(),
        "Angler".to_string(),
        "Fish".to_string(),
        "Weight".to_string(),
    ];
    for (ordinal, _) in report.days.iter().enumerate() {
        header.push(format!("{} Weight", day_label(ordinal)));
    }
    header.push("Points".to_string());
    header.push("Best Place".to_string());

    let mut rows = vec![header];
    for (idx, record) in report.combined.iter().enumerate() {
        let mut row = vec![
            (idx + 1).to_string(),
            record.display_name.clone(),
            record.total_fish_count.to_string(),
            format_weight(record.total_weight),
        ];
        for day in &report.days {
            row.push(
                record
                    .per_day
                    .get(&day.day_code)
                    .map(|totals| format_weight(totals.weight))
                    .unwrap_or_default(),
            );
        }
        row.push(format_weight(record.total_season_points));
        row.push(opt_to_string(record.best_placement));
        rows.push(row);
    }
    rows
}

fn opt_to_string<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
