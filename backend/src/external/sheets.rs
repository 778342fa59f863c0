//! Spreadsheet values API client
//!
//! The platform's only data store is a spreadsheet-backed tabular source
//! read over HTTP. Each named range comes back as a header row plus data
//! rows; all further interpretation happens in the shared crate.

use reqwest::{Client, Url};
use serde::Deserialize;

use shared::Table;

use crate::config::SheetsConfig;
use crate::error::{AppError, AppResult};

/// Spreadsheet API client
#[derive(Clone)]
pub struct SheetsClient {
    client: Client,
    api_key: String,
    spreadsheet_id: String,
    base_url: String,
}

/// Values API response for one range
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetsClient {
    /// Create a new SheetsClient
    pub fn new(config: &SheetsConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            base_url: config.api_endpoint.clone(),
        }
    }

    /// Create a new SheetsClient with custom base URL (for testing)
    pub fn with_base_url(config: &SheetsConfig, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            base_url,
        }
    }

    /// Fetch one named range as a header/rows table.
    ///
    /// A response with fewer than two rows (no data beyond the header, or
    /// nothing at all) yields an empty table rather than an error.
    pub async fn fetch_table(&self, range: &str) -> AppResult<Table> {
        if self.spreadsheet_id.is_empty() {
            return Err(AppError::Configuration(
                "spreadsheet id is not set (SARKOP__SHEETS__SPREADSHEET_ID)".to_string(),
            ));
        }
        if self.api_key.is_empty() {
            return Err(AppError::Configuration(
                "spreadsheet API key is not set (SARKOP__SHEETS__API_KEY)".to_string(),
            ));
        }

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AppError::Configuration(format!("invalid sheets endpoint: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Configuration("invalid sheets endpoint".to_string()))?
            .push(&self.spreadsheet_id)
            .push("values")
            .push(range);
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Sheets API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::SheetsApi {
                status,
                message: body,
            });
        }

        let data: ValueRange = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse sheets response: {}", e)))?;

        let mut values = data.values;
        if values.len() < 2 {
            return Ok(Table::default());
        }
        let header = values.remove(0);
        Ok(Table::new(header, values))
    }
}
