//! Date-range report tests
//!
//! Tests for the normalizer and delta builder including:
//! - Latest-per-day selection feeding the before/after tables
//! - Previous-day lookup outside the requested range
//! - Empty ranges as empty results, not errors

use chrono::NaiveDate;

use shared::{
    item_rows_by_day, latest_per_day, DateRange, ReservedColumns, StockRecord, Table,
};

fn reserved() -> ReservedColumns {
    ReservedColumns::default()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn submission(ts: &str, items: &[(&str, &str)]) -> StockRecord {
    let mut pairs = vec![
        ("Timestamp".to_string(), ts.to_string()),
        ("Email address".to_string(), "staff@sarkop.id".to_string()),
    ];
    pairs.extend(items.iter().map(|(k, v)| (k.to_string(), v.to_string())));
    StockRecord::from_pairs(pairs)
}

// ============================================================================
// Normalizer Tests
// ============================================================================

#[cfg(test)]
mod normalizer_tests {
    use super::*;

    /// Two headers with the same bracket-stripped label collapse into one
    /// key; the later column wins
    #[test]
    fn test_duplicate_labels_later_column_wins() {
        let table = Table::new(
            vec![
                "Timestamp".to_string(),
                "Email address".to_string(),
                "Item A [kg]".to_string(),
                "Item A [unit]".to_string(),
            ],
            vec![vec![
                "01/06/2024 08:00:00".to_string(),
                "staff@sarkop.id".to_string(),
                "7".to_string(),
                "9".to_string(),
            ]],
        );
        let records = StockRecord::from_table(&table);
        let items = records[0].items(&reserved());
        assert_eq!(items.len(), 1);
        assert_eq!(items.get("Item A").map(String::as_str), Some("9"));
    }

    /// Distinct labels never collapse
    #[test]
    fn test_distinct_labels_are_kept_apart() {
        let table = Table::new(
            vec![
                "Timestamp".to_string(),
                "Email address".to_string(),
                "Item A [kg]".to_string(),
                "Item B [kg]".to_string(),
            ],
            vec![vec![
                "01/06/2024 08:00:00".to_string(),
                "staff@sarkop.id".to_string(),
                "7".to_string(),
                "9".to_string(),
            ]],
        );
        let records = StockRecord::from_table(&table);
        assert_eq!(records[0].items(&reserved()).len(), 2);
    }

    /// A header-only table yields no records
    #[test]
    fn test_sub_two_row_table_is_empty() {
        let table = Table::new(vec!["Timestamp".to_string()], vec![]);
        assert!(StockRecord::from_table(&table).is_empty());
    }

    /// Trailing blank rows are not submissions
    #[test]
    fn test_blank_tail_rows_are_dropped() {
        let table = Table::new(
            vec!["Timestamp".to_string(), "Email address".to_string()],
            vec![
                vec![
                    "01/06/2024 08:00:00".to_string(),
                    "staff@sarkop.id".to_string(),
                ],
                vec!["".to_string(), "".to_string()],
                vec![],
            ],
        );
        let submissions: Vec<StockRecord> = StockRecord::from_table(&table)
            .into_iter()
            .filter(|record| record.is_submission(&reserved()))
            .collect();
        assert_eq!(submissions.len(), 1);
    }
}

// ============================================================================
// Delta Builder Tests
// ============================================================================

#[cfg(test)]
mod delta_tests {
    use super::*;

    /// The two-day scenario: day one uses the 18:00 submission with no
    /// prior day; day two diffs against it
    #[test]
    fn test_two_day_before_after() {
        let records = vec![
            submission("01/06/2024 08:00:00", &[("Rice [kg]", "10")]),
            submission("01/06/2024 18:00:00", &[("Rice [kg]", "8")]),
            submission("02/06/2024 09:00:00", &[("Rice [kg]", "5")]),
        ];
        let daily = latest_per_day(&records, &reserved());
        let range = DateRange::new(day(2024, 6, 1), day(2024, 6, 2));
        let rows = item_rows_by_day(&daily, &range, &reserved());

        assert_eq!(rows.len(), 2);

        let first = &rows[&day(2024, 6, 1)];
        assert_eq!(first[0].item_name, "Rice");
        assert_eq!(first[0].before, "-");
        assert_eq!(first[0].after, "8");

        let second = &rows[&day(2024, 6, 2)];
        assert_eq!(second[0].before, "8");
        assert_eq!(second[0].after, "5");
    }

    /// A [D, D] range where D is the only day with data: full after column,
    /// all before values "-"
    #[test]
    fn test_single_day_range_no_history() {
        let records = vec![submission(
            "01/06/2024 08:00:00",
            &[("Rice [kg]", "10"), ("Sugar [kg]", "4")],
        )];
        let daily = latest_per_day(&records, &reserved());
        let range = DateRange::new(day(2024, 6, 1), day(2024, 6, 1));
        let rows = item_rows_by_day(&daily, &range, &reserved());

        let only = &rows[&day(2024, 6, 1)];
        assert_eq!(only.len(), 2);
        for row in only {
            assert_eq!(row.before, "-");
            assert_ne!(row.after, "-");
        }
    }

    /// A range with no available days is an empty map, not an error
    #[test]
    fn test_empty_range_is_empty_map() {
        let records = vec![submission("01/06/2024 08:00:00", &[("Rice [kg]", "10")])];
        let daily = latest_per_day(&records, &reserved());
        let range = DateRange::new(day(2025, 1, 1), day(2025, 1, 31));
        assert!(item_rows_by_day(&daily, &range, &reserved()).is_empty());
    }

    /// The before day is looked up in the full history, even when it falls
    /// outside the requested range
    #[test]
    fn test_before_day_outside_range() {
        let records = vec![
            submission("25/05/2024 10:00:00", &[("Rice [kg]", "12")]),
            submission("02/06/2024 09:00:00", &[("Rice [kg]", "5")]),
        ];
        let daily = latest_per_day(&records, &reserved());
        let range = DateRange::new(day(2024, 6, 1), day(2024, 6, 30));
        let rows = item_rows_by_day(&daily, &range, &reserved());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[&day(2024, 6, 2)][0].before, "12");
    }

    /// Item labels are the sorted union of both days' observations
    #[test]
    fn test_union_is_sorted_and_complete() {
        let records = vec![
            submission("01/06/2024 08:00:00", &[("Telur [butir]", "30")]),
            submission("02/06/2024 09:00:00", &[("Beras [kg]", "5")]),
        ];
        let daily = latest_per_day(&records, &reserved());
        let range = DateRange::new(day(2024, 6, 2), day(2024, 6, 2));
        let rows = item_rows_by_day(&daily, &range, &reserved());

        let names: Vec<&str> = rows[&day(2024, 6, 2)]
            .iter()
            .map(|row| row.item_name.as_str())
            .collect();
        assert_eq!(names, vec!["Beras", "Telur"]);
    }
}
