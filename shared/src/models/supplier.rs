//! Supplier contact directory

use serde::{Deserialize, Serialize};

use super::record::StockRecord;

/// Supplier-contact table column headers
pub const NAME_COLUMN: &str = "Name";
pub const MEDIA_COLUMN: &str = "Media";
pub const PHONE_COLUMN: &str = "Phone";
pub const ALIAS_COLUMN: &str = "Alias";

/// A supplier contact, matched to stock vendors by exact name equality
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierContact {
    pub name: String,
    pub media: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl SupplierContact {
    /// Build a contact from a supplier-table record; rows without a name
    /// are skipped
    pub fn from_record(record: &StockRecord) -> Option<Self> {
        let name = record.field(NAME_COLUMN).trim();
        if name.is_empty() {
            return None;
        }
        let phone = normalize_phone(record.field(PHONE_COLUMN));
        let alias = record.field(ALIAS_COLUMN).trim();
        Some(Self {
            name: name.to_string(),
            media: record.field(MEDIA_COLUMN).trim().to_string(),
            phone: (!phone.is_empty()).then_some(phone),
            alias: (!alias.is_empty()).then(|| alias.to_string()),
        })
    }

    /// Whether this contact is reachable over WhatsApp
    pub fn is_whatsapp(&self) -> bool {
        self.media.eq_ignore_ascii_case("whatsapp")
    }

    /// Name used to greet the supplier in composed messages
    pub fn greeting_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// Normalize a phone cell to digits only: separators, spaces and a leading
/// `+` are stripped
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}
