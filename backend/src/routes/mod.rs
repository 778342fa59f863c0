//! Route definitions for the Sarkop Stock Opname Platform

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Current stock views
        .nest("/stock", stock_routes())
        // Stock opname reports
        .nest("/reports", report_routes())
        // Supplier contacts and restock requests
        .nest("/suppliers", supplier_routes())
}

/// Current stock routes
fn stock_routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(handlers::get_current_stock))
        .route("/current/pdf", get(handlers::get_current_stock_pdf))
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/summary", get(handlers::generate_summary))
        .route("/rows", get(handlers::get_report_rows))
        .route("/pdf", get(handlers::get_report_pdf))
}

/// Supplier routes
fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_suppliers))
        .route("/broadcast", get(handlers::get_restock_broadcast))
        .route("/:name/request", get(handlers::get_supplier_request))
}
