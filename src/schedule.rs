use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rows::RawResultRow;

/// One calendar instance of a multi-day competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDay {
    pub day_code: String,
    pub event_date: NaiveDate,
}

/// Canonical day order for a competition: `event_date` ascending, with
/// `day_code` as the secondary key so the order is total. Duplicate codes
/// keep their first occurrence. Ordinal position ("Day 1", "Day 2", …) is
/// the index into this order, never the stored input order.
pub fn order_event_days(days: &[EventDay]) -> Vec<EventDay> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out: Vec<EventDay> = Vec::with_capacity(days.len());
    for day in days {
        if seen.insert(day.day_code.as_str()) {
            out.push(day.clone());
        }
    }
    out.sort_by(|a, b| {
        a.event_date
            .cmp(&b.event_date)
            .then_with(|| a.day_code.cmp(&b.day_code))
    });
    out
}

pub fn day_label(ordinal: usize) -> String {
    format!("Day {}", ordinal + 1)
}

#[derive(Debug, Clone, Default)]
pub struct GroupedRows {
    pub by_day: HashMap<String, Vec<RawResultRow>>,
    /// Rows whose day code matched no known event day. A broader fetch can
    /// leak stale or foreign rows in; they are dropped, not fatal.
    pub dropped_unknown_day: usize,
}

/// Partition a flat result set into per-event-day buckets. Every known day
/// gets a bucket, possibly empty, so a day that has not reported yet is an
/// explicit empty list rather than a missing key.
pub fn group_rows_by_day(rows: &[RawResultRow], days: &[EventDay]) -> GroupedRows {
    let mut by_day: HashMap<String, Vec<RawResultRow>> = days
        .iter()
        .map(|day| (day.day_code.clone(), Vec::new()))
        .collect();
    let mut dropped = 0usize;

    for row in rows {
        let bucket = row
            .day_code
            .as_deref()
            .and_then(|code| by_day.get_mut(code));
        match bucket {
            Some(bucket) => bucket.push(row.clone()),
            None => dropped += 1,
        }
    }

    GroupedRows {
        by_day,
        dropped_unknown_day: dropped,
    }
}
