//! Raw spreadsheet records and stock-opname submissions
//!
//! A submission row is a loosely-structured header→value mapping: a few
//! reserved metadata columns plus one column per observed item. Headers may
//! carry a bracketed unit suffix (`"Rice [kg]"`) that is stripped before
//! item labels are compared.

use std::collections::BTreeMap;

use crate::types::Table;

/// Reserved metadata column names of the submission sheet, injected from
/// configuration rather than read from globals.
#[derive(Debug, Clone)]
pub struct ReservedColumns {
    pub timestamp: String,
    pub email: String,
    pub staff: String,
}

impl Default for ReservedColumns {
    fn default() -> Self {
        Self {
            timestamp: "Timestamp".to_string(),
            email: "Email address".to_string(),
            staff: "PNS yang mengisi:".to_string(),
        }
    }
}

/// One row of a spreadsheet-backed table as a header→value mapping.
///
/// Source column order is preserved: when two raw headers normalize to the
/// same item label, the later column wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockRecord {
    fields: Vec<(String, String)>,
}

impl StockRecord {
    /// Build records from a provider table: `record[header[i]] = row[i]`,
    /// with missing trailing cells mapped to the empty string. A table with
    /// fewer than two total rows (header plus at least one data row) yields
    /// no records.
    pub fn from_table(table: &Table) -> Vec<StockRecord> {
        if table.header.is_empty() || table.rows.is_empty() {
            return Vec::new();
        }
        table
            .rows
            .iter()
            .map(|row| {
                let fields = table
                    .header
                    .iter()
                    .enumerate()
                    .map(|(i, header)| {
                        let value = row.get(i).cloned().unwrap_or_default();
                        (header.clone(), value)
                    })
                    .collect();
                StockRecord { fields }
            })
            .collect()
    }

    /// Build a record from explicit header/value pairs
    pub fn from_pairs<K, V>(pairs: Vec<(K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Cell value for a raw header, if the column exists
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Cell value for a raw header, empty string when absent
    pub fn field(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Whether this row is a real submission. Trailing blank rows of a
    /// spreadsheet come back as records with empty metadata cells; a
    /// submission must carry both a timestamp and an email value.
    pub fn is_submission(&self, reserved: &ReservedColumns) -> bool {
        !self.field(&reserved.timestamp).trim().is_empty()
            && !self.field(&reserved.email).trim().is_empty()
    }

    /// Raw timestamp cell
    pub fn timestamp_raw(&self, reserved: &ReservedColumns) -> &str {
        self.field(&reserved.timestamp)
    }

    /// Staff identifier cell
    pub fn staff(&self, reserved: &ReservedColumns) -> &str {
        self.field(&reserved.staff)
    }

    /// Item observations of this record: every non-reserved, non-`Column*`
    /// header with a non-empty value, keyed by the normalized item label.
    /// Later columns overwrite earlier ones when labels collide after
    /// normalization.
    pub fn items(&self, reserved: &ReservedColumns) -> BTreeMap<String, String> {
        let mut items = BTreeMap::new();
        for (key, value) in &self.fields {
            if is_meta_key(key, reserved) {
                continue;
            }
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            items.insert(normalize_item_label(key).to_string(), value.to_string());
        }
        items
    }
}

/// Strip the bracketed suffix from an item header: `"Rice [kg]"` → `"Rice"`
pub fn normalize_item_label(raw: &str) -> &str {
    match raw.split_once(" [") {
        Some((label, _)) => label.trim(),
        None => raw.trim(),
    }
}

/// Reserved metadata columns and the sheet's unnamed `Column*` placeholders
fn is_meta_key(key: &str, reserved: &ReservedColumns) -> bool {
    key == reserved.timestamp
        || key == reserved.email
        || key == reserved.staff
        || key.starts_with("Column")
}
