use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schedule::EventDay;

/// One competitor's recorded result for one event day, as the club's
/// backing store delivers it. Fields arrive loosely typed: weights show up
/// as JSON numbers or strings ("12.40 lbs"), ids and counts go missing.
/// Decoding tolerates all of that; `normalize` turns survivors into fully
/// typed rows. An absent/zero weight means "no qualifying catch".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResultRow {
    pub row_id: Option<String>,
    pub competitor_id: Option<String>,
    pub competitor_name: String,
    pub day_code: Option<String>,
    pub weight: Option<f64>,
    pub fish_count: Option<u32>,
    pub placement: Option<u32>,
    pub season_points: Option<f64>,
}

/// Decode a results document. Accepts a bare list or an object wrapping the
/// list under `results`/`rows`. A `null` or empty document decodes to an
/// empty list; a document of the wrong shape is an error. Entries lacking
/// both a competitor name and id are unusable and skipped.
pub fn parse_result_rows_json(raw: &str) -> Result<Vec<RawResultRow>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }

    let root: Value = serde_json::from_str(trimmed).context("invalid results json")?;
    let items = match &root {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("results").or_else(|| map.get("rows")) {
            Some(Value::Array(items)) => items.as_slice(),
            Some(Value::Null) | None => bail!("results document has no result list"),
            Some(_) => bail!("results list is not an array"),
        },
        _ => bail!("results document is not a list"),
    };

    Ok(items.iter().filter_map(parse_result_row).collect())
}

fn parse_result_row(value: &Value) -> Option<RawResultRow> {
    if !value.is_object() {
        return None;
    }

    let competitor_id = pick_string(value, &["memberId", "anglerId", "competitorId"]);
    let competitor_name = pick_string(value, &["memberName", "anglerName", "competitorName", "name"]);
    if competitor_id.is_none() && competitor_name.is_none() {
        return None;
    }

    Some(RawResultRow {
        row_id: pick_string(value, &["resultId", "rowId", "id"]),
        competitor_id,
        competitor_name: competitor_name.unwrap_or_default(),
        day_code: pick_string(value, &["dayCode", "eventCode", "day"]),
        weight: pick_f64(value, &["weight", "totalWeight"]),
        fish_count: pick_u32(value, &["fishCount", "numberOfFish", "fish"]),
        placement: pick_u32(value, &["place", "placement"]),
        season_points: pick_f64(value, &["points", "seasonPoints"]),
    })
}

/// Decode a schedule document: a list of event-day descriptors, bare or
/// wrapped under `days`/`schedule`. Entries missing a code or a parseable
/// date are skipped.
pub fn parse_schedule_json(raw: &str) -> Result<Vec<EventDay>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }

    let root: Value = serde_json::from_str(trimmed).context("invalid schedule json")?;
    let items = match &root {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("days").or_else(|| map.get("schedule")) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => bail!("schedule document has no day list"),
        },
        _ => bail!("schedule document is not a list"),
    };

    Ok(items
        .iter()
        .filter_map(|item| {
            let day_code = pick_string(item, &["dayCode", "eventCode", "code"])?;
            let date_raw = pick_string(item, &["date", "eventDate"])?;
            let event_date = parse_event_date(&date_raw)?;
            Some(EventDay {
                day_code,
                event_date,
            })
        })
        .collect())
}

fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    // ISO first; fall back to the US form older exports used.
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .ok()
}

/// Best-effort numeric parse for loosely typed stat fields. Strips
/// decorations ("12.40 lbs", "1,204"), treats blanks and "-" as absent.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() || s == "-" {
        return None;
    }
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-' || *c == ',')
        .collect();
    let cleaned = cleaned.replace(',', "");
    if cleaned.is_empty() || cleaned == "-" {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

fn pick_string(value: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        match value.get(*key) {
            Some(Value::String(s)) => {
                let s = s.trim();
                if !s.is_empty() {
                    return Some(s.to_string());
                }
            }
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

fn pick_f64(value: &Value, keys: &[&str]) -> Option<f64> {
    for key in keys {
        match value.get(*key) {
            Some(Value::Number(n)) => return n.as_f64(),
            Some(Value::String(s)) => {
                if let Some(v) = parse_number(s) {
                    return Some(v);
                }
            }
            _ => {}
        }
    }
    None
}

fn pick_u32(value: &Value, keys: &[&str]) -> Option<u32> {
    for key in keys {
        match value.get(*key) {
            Some(Value::Number(n)) => {
                if let Some(v) = n.as_u64() {
                    return Some(v as u32);
                }
            }
            Some(Value::String(s)) => {
                if let Ok(v) = s.trim().parse::<u32>() {
                    return Some(v);
                }
            }
            _ => {}
        }
    }
    None
}
