//! Daily snapshot reduction
//!
//! Many submissions can arrive on one calendar day; reports only care about
//! the last one, "what the floor looked like at day's end". The reducer
//! collapses an unordered batch into one winning submission per day.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{LatestMeta, ReservedColumns, StockRecord};
use crate::timestamp::{day_key, parse_timestamp};

/// Pick the latest submission of each calendar day. A strictly later
/// instant replaces the day's slot; an equal or earlier instant does not,
/// so exact ties keep the first record seen. Submissions with unparseable
/// timestamps are excluded.
pub fn latest_per_day<'a>(
    records: &'a [StockRecord],
    reserved: &ReservedColumns,
) -> BTreeMap<NaiveDate, &'a StockRecord> {
    let mut by_day = BTreeMap::new();
    for record in records {
        let Some(at) = parse_timestamp(record.timestamp_raw(reserved)) else {
            continue;
        };
        let slot = by_day.entry(day_key(at)).or_insert((at, record));
        if at > slot.0 {
            *slot = (at, record);
        }
    }
    by_day
        .into_iter()
        .map(|(day, (_, record))| (day, record))
        .collect()
}

/// Freshness metadata: timestamp and staff of the chronologically latest
/// submission across the full history (not range-filtered). Ties keep the
/// first record seen.
pub fn latest_submission_meta(
    records: &[StockRecord],
    reserved: &ReservedColumns,
) -> Option<LatestMeta> {
    let mut latest = None;
    for record in records {
        let Some(at) = parse_timestamp(record.timestamp_raw(reserved)) else {
            continue;
        };
        match latest {
            Some((best, _)) if at <= best => {}
            _ => latest = Some((at, record)),
        }
    }
    latest.map(|(_, record)| LatestMeta {
        timestamp: record.timestamp_raw(reserved).to_string(),
        staff: record.staff(reserved).to_string(),
    })
}
