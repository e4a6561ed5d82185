//! Club tournament results engine: turns raw per-day weigh-in rows into
//! combined multi-day standings, day-local ranks with movement, and
//! season-long Angler of the Year points.
//!
//! Everything under `aggregate`, `rank`, `movement`, and `aoy` is a pure
//! function of its input, recomputed in full per call. Fetching rows from
//! the club's backing store is a collaborator's job; this crate starts at
//! already-fetched JSON documents (`rows`) and ends at display-ready
//! tables (`report`) or a workbook (`export`).

pub mod aggregate;
pub mod aoy;
pub mod export;
pub mod movement;
pub mod normalize;
pub mod rank;
pub mod report;
pub mod rows;
pub mod sample_feed;
pub mod schedule;
