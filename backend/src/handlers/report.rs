//! HTTP handlers for stock opname report endpoints

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    response::Response,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use shared::{DateRange, ItemRow};

use crate::error::AppResult;
use crate::services::report::ReportSummary;
use crate::services::{PdfService, ReportService};
use crate::AppState;

/// Query parameters for report date ranges
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRangeQuery {
    fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Generate the WhatsApp-ready AI summary for a date range
pub async fn generate_summary(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Json<ReportSummary>> {
    let service = ReportService::new(
        state.sheets.clone(),
        state.summary.clone(),
        state.config.clone(),
    );
    let summary = service.generate_summary(query.range()).await?;
    Ok(Json(summary))
}

/// Get the per-day before/after rows for a date range
pub async fn get_report_rows(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Json<BTreeMap<NaiveDate, Vec<ItemRow>>>> {
    let service = ReportService::new(
        state.sheets.clone(),
        state.summary.clone(),
        state.config.clone(),
    );
    let rows = service.item_rows(query.range()).await?;
    Ok(Json(rows))
}

/// Render the date-range report as a PDF, one page per snapshot day
pub async fn get_report_pdf(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Response> {
    let service = ReportService::new(
        state.sheets.clone(),
        state.summary.clone(),
        state.config.clone(),
    );
    let range = query.range();
    let rows = service.item_rows(range).await?;

    let pdf = PdfService::new(&state.config.pdf).range_report_pdf(&rows, &range)?;
    let file_name = ReportService::report_file_name(&range);
    Ok(super::pdf_response(pdf, &file_name))
}
