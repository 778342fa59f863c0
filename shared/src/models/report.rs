//! Derived report rows handed to the renderers

use serde::{Deserialize, Serialize};

use super::stock::CurrentStockItem;

/// Sentinel for an item not observed in a snapshot
pub const MISSING_VALUE: &str = "-";

/// Before/after values of one item for one report day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRow {
    pub item_name: String,
    pub before: String,
    pub after: String,
}

/// Timestamp and staff of the chronologically latest submission, used for
/// the "last updated" freshness line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestMeta {
    pub timestamp: String,
    pub staff: String,
}

/// Items needing restock for one vendor, with the composed request text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorMessage {
    pub vendor: String,
    pub items: Vec<CurrentStockItem>,
    pub message: String,
}
