//! HTTP handlers for current-stock endpoints

use axum::{extract::State, response::Response, Json};

use crate::error::AppResult;
use crate::services::stock::CurrentStockOverview;
use crate::services::{PdfService, StockService};
use crate::AppState;

/// Get the current stock table with freshness metadata
pub async fn get_current_stock(
    State(state): State<AppState>,
) -> AppResult<Json<CurrentStockOverview>> {
    let service = StockService::new(state.sheets.clone(), state.config.clone());
    let overview = service.overview().await?;
    Ok(Json(overview))
}

/// Render the current stock table as a PDF report
pub async fn get_current_stock_pdf(State(state): State<AppState>) -> AppResult<Response> {
    let service = StockService::new(state.sheets.clone(), state.config.clone());
    let overview = service.overview().await?;

    let pdf = PdfService::new(&state.config.pdf)
        .current_stock_pdf(&overview.items, overview.latest.as_ref())?;
    Ok(super::pdf_response(pdf, "current-stock.pdf"))
}
