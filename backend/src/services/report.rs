//! Stock opname reporting service
//!
//! Range-filters the submission history for the AI summary and builds the
//! per-day before/after rows the PDF report renders. Everything is
//! recomputed from source on each request.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use reqwest::Url;
use serde::Serialize;
use serde_json::json;

use shared::{
    item_rows_by_day, latest_per_day, parse_timestamp, DateRange, ItemRow, StockRecord,
};

use crate::error::{AppError, AppResult};
use crate::external::{SheetsClient, SummaryClient};
use crate::services::StockService;
use crate::Config;

/// Wording shown when the requested period has no submissions; an empty
/// range is a normal outcome, not an error
pub const NO_DATA_MESSAGE: &str =
    "No stock data found for the selected date range. Please try a different period.";

/// Reporting service
#[derive(Clone)]
pub struct ReportService {
    stock: StockService,
    summary: SummaryClient,
    config: Arc<Config>,
}

/// Generated report summary, with the optional outbound WhatsApp link
#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_url: Option<String>,
}

impl ReportService {
    /// Create a new ReportService instance
    pub fn new(sheets: SheetsClient, summary: SummaryClient, config: Arc<Config>) -> Self {
        Self {
            stock: StockService::new(sheets, config.clone()),
            summary,
            config,
        }
    }

    /// Generate the WhatsApp-ready report summary for a date range
    pub async fn generate_summary(&self, range: DateRange) -> AppResult<ReportSummary> {
        validate_range(&range)?;
        let reserved = self.config.columns.reserved();
        let submissions = self.stock.submissions().await?;
        let in_range: Vec<&StockRecord> = submissions
            .iter()
            .filter(|record| {
                parse_timestamp(record.timestamp_raw(&reserved))
                    .is_some_and(|at| range.contains_instant(at))
            })
            .collect();

        if in_range.is_empty() {
            return Ok(ReportSummary {
                summary: NO_DATA_MESSAGE.to_string(),
                whatsapp_url: None,
            });
        }

        let prompt = build_summary_prompt(&in_range, &range, &reserved);
        let summary = self.summary.generate(&prompt).await?;
        let whatsapp_url = report_whatsapp_url(&self.config.whatsapp.report_number, &summary)?;
        Ok(ReportSummary {
            summary,
            whatsapp_url,
        })
    }

    /// Per-day before/after rows for every snapshot day inside the range
    pub async fn item_rows(&self, range: DateRange) -> AppResult<BTreeMap<NaiveDate, Vec<ItemRow>>> {
        validate_range(&range)?;
        let reserved = self.config.columns.reserved();
        let submissions = self.stock.submissions().await?;
        let daily = latest_per_day(&submissions, &reserved);
        Ok(item_rows_by_day(&daily, &range, &reserved))
    }

    /// Deterministic report file name for a range
    pub fn report_file_name(range: &DateRange) -> String {
        format!(
            "stock-opname-{}-{}.pdf",
            range.start.format("%Y%m%d"),
            range.end.format("%Y%m%d")
        )
    }
}

fn validate_range(range: &DateRange) -> AppResult<()> {
    if range.start > range.end {
        return Err(AppError::ValidationError(
            "start date must not be after end date".to_string(),
        ));
    }
    Ok(())
}

/// Outbound link for sending the summary to the configured report number
fn report_whatsapp_url(number: &str, text: &str) -> AppResult<Option<String>> {
    if number.is_empty() {
        return Ok(None);
    }
    let url = Url::parse_with_params(&format!("https://wa.me/{}", number), &[("text", text)])
        .map_err(|e| AppError::Internal(format!("failed to build WhatsApp URL: {}", e)))?;
    Ok(Some(url.to_string()))
}

/// Build the summary prompt, embedding the simplified range-filtered
/// submissions as JSON
fn build_summary_prompt(
    submissions: &[&StockRecord],
    range: &DateRange,
    reserved: &shared::ReservedColumns,
) -> String {
    let entries: Vec<serde_json::Value> = submissions
        .iter()
        .map(|record| {
            json!({
                "Timestamp": record.timestamp_raw(reserved),
                "staff": record.staff(reserved),
                "items": record.items(reserved),
            })
        })
        .collect();
    let data = serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"You are an inventory manager for a restaurant called Sarkop. Your task is to analyze the following stock opname data and write a concise summary for a report to be sent via WhatsApp to the owner.

The data below shows stock levels submitted by staff between {start} and {end}.

Data:
{data}

Your summary MUST follow these instructions:
1. Start with a clear and friendly header, like "Stock Opname Report for [Date Range]".
2. Provide a very brief overview, mentioning how many staff members submitted reports.
3. Analyze the latest stock entries to identify critical items. Highlight 3 to 5 items that have the lowest numerical stock levels or are marked as "Tidak cukup" (Not enough). These are priorities for reordering. List them clearly.
4. Mention 1 or 2 items that seem to have very high stock ("Cukup untuk hari ini" or high numbers), suggesting good inventory levels for those.
5. Conclude with a brief, positive closing remark, for example, "Overall, stock levels are being monitored well. Let's restock the priority items."
6. The entire message should be professional, brief, and formatted with clear sections for easy reading on a mobile phone. Use line breaks to separate points. Do not use markdown like '*' or '#'."#,
        start = range.start,
        end = range.end,
        data = data,
    )
}
