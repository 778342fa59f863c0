//! HTTP handlers for supplier contact endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use shared::SupplierContact;

use crate::error::AppResult;
use crate::services::supplier::{SupplierRequest, VendorBroadcast};
use crate::services::SupplierService;
use crate::AppState;

/// List WhatsApp-reachable supplier contacts
pub async fn list_suppliers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SupplierContact>>> {
    let service = SupplierService::new(state.sheets.clone(), state.config.clone());
    let suppliers = service.whatsapp_suppliers().await?;
    Ok(Json(suppliers))
}

/// Get the per-vendor restock broadcast, most loaded vendor first
pub async fn get_restock_broadcast(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<VendorBroadcast>>> {
    let service = SupplierService::new(state.sheets.clone(), state.config.clone());
    let broadcast = service.restock_broadcast().await?;
    Ok(Json(broadcast))
}

/// Get the request preview for one supplier
pub async fn get_supplier_request(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<SupplierRequest>> {
    let service = SupplierService::new(state.sheets.clone(), state.config.clone());
    let request = service.supplier_request(&name).await?;
    Ok(Json(request))
}
