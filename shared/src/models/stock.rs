//! Current stock items and restock condition evaluation

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::record::StockRecord;

/// Processing-table column headers
pub const ITEM_COLUMN: &str = "Item";
pub const UNIT_COLUMN: &str = "Unit";
pub const VENDOR_COLUMN: &str = "Vendor";
pub const CATEGORY_COLUMN: &str = "Category";
pub const PAR_QTY_COLUMN: &str = "Par Qty";
pub const MIN_RESTOCK_COLUMN: &str = "Minimum Restock";
pub const CURRENT_QTY_COLUMN: &str = "Current Qty";

/// Tri-state restock condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionLevel {
    /// Stock at or below half of the par quantity
    #[serde(rename = "bahaya")]
    Danger,
    /// Stock at or below the minimum restock threshold
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "-")]
    Normal,
}

impl ConditionLevel {
    /// Sort rank for urgency ordering: bahaya before low before normal
    pub fn urgency(self) -> u8 {
        match self {
            ConditionLevel::Danger => 0,
            ConditionLevel::Low => 1,
            ConditionLevel::Normal => 2,
        }
    }

    /// Human-readable label; the normal sentinel reads as "normal"
    pub fn display_label(self) -> &'static str {
        match self {
            ConditionLevel::Danger => "bahaya",
            ConditionLevel::Low => "low",
            ConditionLevel::Normal => "normal",
        }
    }
}

impl std::fmt::Display for ConditionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConditionLevel::Danger => write!(f, "bahaya"),
            ConditionLevel::Low => write!(f, "low"),
            ConditionLevel::Normal => write!(f, "-"),
        }
    }
}

/// Evaluate the restock condition for an item.
///
/// Danger takes precedence over low even when both thresholds hold, and a
/// zero par quantity disables the danger branch entirely. Both comparisons
/// are inclusive. This is the single source of truth for conditions; any
/// condition column in source data is ignored.
pub fn evaluate_condition(
    par_qty: Decimal,
    current_qty: Decimal,
    min_restock: Decimal,
) -> ConditionLevel {
    if par_qty > Decimal::ZERO && current_qty * Decimal::TWO <= par_qty {
        ConditionLevel::Danger
    } else if current_qty <= min_restock {
        ConditionLevel::Low
    } else {
        ConditionLevel::Normal
    }
}

/// Parse a free-text quantity cell. Unparseable input counts as zero and
/// negative values clamp to zero, so one bad cell never aborts a batch.
pub fn parse_quantity(raw: &str) -> Decimal {
    Decimal::from_str(raw.trim())
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO)
}

/// One row of the current-stock view, derived fresh from the processing
/// table on every read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentStockItem {
    pub item: String,
    pub unit: String,
    pub vendor: String,
    pub category: String,
    pub par_qty: Decimal,
    pub min_restock: Decimal,
    pub current_qty: Decimal,
    pub condition: ConditionLevel,
}

impl CurrentStockItem {
    /// Build an item from a processing-table record. Rows without an item
    /// name are skipped. The condition is always recomputed from the
    /// quantities.
    pub fn from_record(record: &StockRecord) -> Option<Self> {
        let item = record.field(ITEM_COLUMN).trim();
        if item.is_empty() {
            return None;
        }
        let par_qty = parse_quantity(record.field(PAR_QTY_COLUMN));
        let min_restock = parse_quantity(record.field(MIN_RESTOCK_COLUMN));
        let current_qty = parse_quantity(record.field(CURRENT_QTY_COLUMN));
        Some(Self {
            item: item.to_string(),
            unit: record.field(UNIT_COLUMN).trim().to_string(),
            vendor: record.field(VENDOR_COLUMN).trim().to_string(),
            category: record.field(CATEGORY_COLUMN).trim().to_string(),
            par_qty,
            min_restock,
            current_qty,
            condition: evaluate_condition(par_qty, current_qty, min_restock),
        })
    }
}
