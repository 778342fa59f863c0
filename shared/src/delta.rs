//! Date-range before/after deltas
//!
//! For each snapshot day inside a requested range, the builder diffs the
//! day's item observations against the nearest earlier snapshot day. The
//! "before" day is looked up in the full snapshot history, so it may fall
//! outside the requested range.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::models::{ItemRow, ReservedColumns, StockRecord, MISSING_VALUE};
use crate::types::DateRange;

/// Build per-day before/after rows for every snapshot day inside the range.
///
/// Item labels are the union of the before-day and current-day
/// observations, sorted alphabetically; an item missing from either side
/// renders as the `"-"` sentinel. A range with no snapshot days yields an
/// empty map, which the boundary layer reports as "no data", not an error.
pub fn item_rows_by_day(
    daily: &BTreeMap<NaiveDate, &StockRecord>,
    range: &DateRange,
    reserved: &ReservedColumns,
) -> BTreeMap<NaiveDate, Vec<ItemRow>> {
    let mut rows_by_day = BTreeMap::new();
    for (&day, record) in daily.iter().filter(|(day, _)| range.contains_day(**day)) {
        let current = record.items(reserved);
        let before = daily
            .range(..day)
            .next_back()
            .map(|(_, prev)| prev.items(reserved))
            .unwrap_or_default();

        let labels: BTreeSet<&String> = before.keys().chain(current.keys()).collect();
        let rows = labels
            .into_iter()
            .map(|label| ItemRow {
                item_name: label.clone(),
                before: before
                    .get(label)
                    .cloned()
                    .unwrap_or_else(|| MISSING_VALUE.to_string()),
                after: current
                    .get(label)
                    .cloned()
                    .unwrap_or_else(|| MISSING_VALUE.to_string()),
            })
            .collect();
        rows_by_day.insert(day, rows);
    }
    rows_by_day
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::latest_per_day;

    fn reserved() -> ReservedColumns {
        ReservedColumns::default()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn submission(ts: &str, items: &[(&str, &str)]) -> StockRecord {
        let mut pairs = vec![
            ("Timestamp".to_string(), ts.to_string()),
            ("Email address".to_string(), "a@b.c".to_string()),
        ];
        pairs.extend(
            items
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        StockRecord::from_pairs(pairs)
    }

    #[test]
    fn test_two_day_scenario() {
        let records = vec![
            submission("01/06/2024 08:00:00", &[("Rice [kg]", "10")]),
            submission("01/06/2024 18:00:00", &[("Rice [kg]", "8")]),
            submission("02/06/2024 09:00:00", &[("Rice [kg]", "5")]),
        ];
        let daily = latest_per_day(&records, &reserved());
        let range = DateRange::new(day(2024, 6, 1), day(2024, 6, 2));
        let rows = item_rows_by_day(&daily, &range, &reserved());

        // day one uses the 18:00 submission and has no prior day
        let first = &rows[&day(2024, 6, 1)];
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].item_name, "Rice");
        assert_eq!(first[0].before, "-");
        assert_eq!(first[0].after, "8");

        let second = &rows[&day(2024, 6, 2)];
        assert_eq!(second[0].before, "8");
        assert_eq!(second[0].after, "5");
    }

    #[test]
    fn test_before_day_may_fall_outside_range() {
        let records = vec![
            submission("28/05/2024 10:00:00", &[("Rice [kg]", "12")]),
            submission("02/06/2024 09:00:00", &[("Rice [kg]", "5")]),
        ];
        let daily = latest_per_day(&records, &reserved());
        let range = DateRange::new(day(2024, 6, 1), day(2024, 6, 2));
        let rows = item_rows_by_day(&daily, &range, &reserved());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[&day(2024, 6, 2)][0].before, "12");
    }

    #[test]
    fn test_empty_range_yields_empty_map() {
        let records = vec![submission("01/06/2024 08:00:00", &[("Rice [kg]", "10")])];
        let daily = latest_per_day(&records, &reserved());
        let range = DateRange::new(day(2024, 7, 1), day(2024, 7, 31));
        assert!(item_rows_by_day(&daily, &range, &reserved()).is_empty());
    }

    #[test]
    fn test_single_day_history_all_before_missing() {
        let records = vec![submission(
            "01/06/2024 08:00:00",
            &[("Rice [kg]", "10"), ("Sugar [kg]", "2")],
        )];
        let daily = latest_per_day(&records, &reserved());
        let range = DateRange::new(day(2024, 6, 1), day(2024, 6, 1));
        let rows = item_rows_by_day(&daily, &range, &reserved());

        let only = &rows[&day(2024, 6, 1)];
        assert_eq!(only.len(), 2);
        assert!(only.iter().all(|r| r.before == "-"));
        assert!(only.iter().all(|r| r.after != "-"));
    }

    #[test]
    fn test_union_includes_items_dropped_today() {
        let records = vec![
            submission("01/06/2024 08:00:00", &[("Rice [kg]", "10"), ("Oil [l]", "3")]),
            submission("02/06/2024 09:00:00", &[("Rice [kg]", "5")]),
        ];
        let daily = latest_per_day(&records, &reserved());
        let range = DateRange::new(day(2024, 6, 2), day(2024, 6, 2));
        let rows = item_rows_by_day(&daily, &range, &reserved());

        let second = &rows[&day(2024, 6, 2)];
        // sorted alphabetically: Oil before Rice
        assert_eq!(second[0].item_name, "Oil");
        assert_eq!(second[0].before, "3");
        assert_eq!(second[0].after, "-");
        assert_eq!(second[1].item_name, "Rice");
    }
}
