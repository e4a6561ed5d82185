use crate::rows::RawResultRow;

/// Fully typed form of a result row. All coercion rules live here; the
/// rest of the pipeline never re-interprets raw fields.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub competitor_key: String,
    /// True when the key fell back to the normalized display name because
    /// no id arrived. Two same-named competitors will merge under such a
    /// key; callers can surface the ambiguity instead of hiding it.
    pub key_from_name: bool,
    pub display_name: String,
    pub weight: f64,
    pub fish_count: u32,
    pub placement: Option<u32>,
    pub season_points: Option<f64>,
    pub row_id: Option<String>,
}

/// Coercion rules:
/// - weight: absent or non-finite becomes 0.0, negatives clamp to 0.0
/// - fish_count: absent defaults to 1 when the weight is positive (a
///   recorded weight implies at least one caught fish), else 0
/// - placement: must be a positive integer, anything else is absent
pub fn normalize_row(row: &RawResultRow) -> NormalizedRow {
    let weight = row
        .weight
        .filter(|w| w.is_finite())
        .unwrap_or(0.0)
        .max(0.0);
    let fish_count = match row.fish_count {
        Some(count) => count,
        None if weight > 0.0 => 1,
        None => 0,
    };
    let (competitor_key, key_from_name) = competitor_key_for(row);

    NormalizedRow {
        competitor_key,
        key_from_name,
        display_name: row.competitor_name.trim().to_string(),
        weight,
        fish_count,
        placement: row.placement.filter(|p| *p > 0),
        season_points: row.season_points.filter(|p| p.is_finite()),
        row_id: row.row_id.clone(),
    }
}

fn competitor_key_for(row: &RawResultRow) -> (String, bool) {
    if let Some(id) = row.competitor_id.as_deref() {
        let id = id.trim();
        if !id.is_empty() {
            return (id.to_string(), false);
        }
    }
    (name_key(&row.competitor_name), true)
}

/// Case-folded, whitespace-collapsed form of a display name, used as the
/// fallback competitor key when no id is present. "  Dana  PIKE " and
/// "Dana Pike" produce the same key.
pub fn name_key(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
