//! Supplier contact and restock request service
//!
//! Reads the supplier-contact table and composes the per-vendor restock
//! requests. The broadcast view uses the at-or-below-minimum-restock
//! selection; the per-supplier detail view uses the broader
//! needs-attention selection. The two stay distinct on purpose.

use std::sync::Arc;

use reqwest::Url;
use serde::Serialize;

use shared::{
    broadcast_messages, compose_supplier_message, needs_attention, vendor_items,
    CurrentStockItem, StockRecord, SupplierContact, VendorMessage,
};

use crate::error::{AppError, AppResult};
use crate::external::SheetsClient;
use crate::services::StockService;
use crate::Config;

/// Supplier service
#[derive(Clone)]
pub struct SupplierService {
    sheets: SheetsClient,
    stock: StockService,
    config: Arc<Config>,
}

/// One vendor's broadcast entry, with the outbound link
#[derive(Debug, Serialize)]
pub struct VendorBroadcast {
    pub vendor: String,
    pub items: Vec<CurrentStockItem>,
    pub message: String,
    pub whatsapp_url: String,
}

/// Per-supplier request preview for the detail view
#[derive(Debug, Serialize)]
pub struct SupplierRequest {
    pub supplier: SupplierContact,
    pub items: Vec<CurrentStockItem>,
    pub message: String,
    pub whatsapp_url: String,
}

impl SupplierService {
    /// Create a new SupplierService instance
    pub fn new(sheets: SheetsClient, config: Arc<Config>) -> Self {
        Self {
            stock: StockService::new(sheets.clone(), config.clone()),
            sheets,
            config,
        }
    }

    /// All supplier contacts from the contact table
    pub async fn suppliers(&self) -> AppResult<Vec<SupplierContact>> {
        let table = self
            .sheets
            .fetch_table(&self.config.sheets.suppliers_range)
            .await?;
        Ok(StockRecord::from_table(&table)
            .iter()
            .filter_map(SupplierContact::from_record)
            .collect())
    }

    /// Contacts reachable over WhatsApp
    pub async fn whatsapp_suppliers(&self) -> AppResult<Vec<SupplierContact>> {
        let suppliers = self.suppliers().await?;
        Ok(suppliers
            .into_iter()
            .filter(SupplierContact::is_whatsapp)
            .collect())
    }

    /// Per-vendor restock broadcast: items at or below minimum restock,
    /// grouped by vendor, most loaded vendor first
    pub async fn restock_broadcast(&self) -> AppResult<Vec<VendorBroadcast>> {
        let items = self.stock.current_stock().await?;
        let contacts = self.whatsapp_suppliers().await?;
        broadcast_messages(&items, &contacts)
            .into_iter()
            .map(|message| {
                let url = whatsapp_url(phone_for(&message.vendor, &contacts), &message.message)?;
                let VendorMessage {
                    vendor,
                    items,
                    message,
                } = message;
                Ok(VendorBroadcast {
                    vendor,
                    items,
                    message,
                    whatsapp_url: url,
                })
            })
            .collect()
    }

    /// Request preview for one supplier: its needs-attention items and the
    /// composed message
    pub async fn supplier_request(&self, name: &str) -> AppResult<SupplierRequest> {
        let contacts = self.whatsapp_suppliers().await?;
        let supplier = contacts
            .iter()
            .find(|contact| contact.name == name)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Supplier '{}'", name)))?;

        let stock = self.stock.current_stock().await?;
        let attention: Vec<CurrentStockItem> =
            stock.into_iter().filter(|item| needs_attention(item)).collect();
        let items = vendor_items(&supplier.name, &attention);
        let message = compose_supplier_message(&supplier.name, &items, &contacts);
        let whatsapp_url = whatsapp_url(supplier.phone.as_deref(), &message)?;

        Ok(SupplierRequest {
            supplier,
            items,
            message,
            whatsapp_url,
        })
    }
}

/// Phone number for a vendor, when a contact with the exact name has one
fn phone_for<'a>(vendor: &str, contacts: &'a [SupplierContact]) -> Option<&'a str> {
    contacts
        .iter()
        .find(|contact| contact.name == vendor)
        .and_then(|contact| contact.phone.as_deref())
}

/// Chat link carrying the composed message; falls back to the web sender
/// when no direct phone number is known
fn whatsapp_url(phone: Option<&str>, text: &str) -> AppResult<String> {
    let base = match phone {
        Some(phone) if !phone.is_empty() => format!("https://wa.me/{}", phone),
        _ => "https://web.whatsapp.com/send".to_string(),
    };
    let url = Url::parse_with_params(&base, &[("text", text)])
        .map_err(|e| AppError::Internal(format!("failed to build WhatsApp URL: {}", e)))?;
    Ok(url.to_string())
}
