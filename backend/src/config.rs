//! Configuration management for the Sarkop Stock Opname Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with SARKOP_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::ReservedColumns;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Spreadsheet data source configuration
    pub sheets: SheetsConfig,

    /// Reserved metadata column names of the submission sheet
    pub columns: ColumnsConfig,

    /// AI summary service configuration
    pub summary: SummaryConfig,

    /// WhatsApp report target
    pub whatsapp: WhatsappConfig,

    /// PDF rendering configuration
    pub pdf: PdfConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SheetsConfig {
    /// Spreadsheet values API endpoint
    pub api_endpoint: String,

    /// API key authorized to read the sheet
    pub api_key: String,

    /// Spreadsheet document id
    pub spreadsheet_id: String,

    /// Named range holding the form-submission history
    pub submissions_range: String,

    /// Named range holding the processing/inventory table
    pub processing_range: String,

    /// Named range holding the supplier-contact table
    pub suppliers_range: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ColumnsConfig {
    /// Submission timestamp column
    pub timestamp: String,

    /// Submitter email column
    pub email: String,

    /// Staff identifier column
    pub staff: String,
}

impl ColumnsConfig {
    /// Reserved columns as the shared crate consumes them
    pub fn reserved(&self) -> ReservedColumns {
        ReservedColumns {
            timestamp: self.timestamp.clone(),
            email: self.email.clone(),
            staff: self.staff.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SummaryConfig {
    /// Text-generation API endpoint
    pub api_endpoint: String,

    /// Text-generation API key
    pub api_key: String,

    /// Model used for report summaries
    pub model: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WhatsappConfig {
    /// Number the report summary is sent to, digits with country code
    pub report_number: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PdfConfig {
    /// Directory holding the report font files
    pub font_dir: String,

    /// Font family name inside the font directory
    pub font_family: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("SARKOP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default(
                "sheets.api_endpoint",
                "https://sheets.googleapis.com/v4/spreadsheets",
            )?
            .set_default("sheets.api_key", "")?
            .set_default("sheets.spreadsheet_id", "")?
            .set_default("sheets.submissions_range", "Form responses 1!A:ZZ")?
            .set_default("sheets.processing_range", "Processing!A:Z")?
            .set_default("sheets.suppliers_range", "Suppliers!A:Z")?
            .set_default("columns.timestamp", "Timestamp")?
            .set_default("columns.email", "Email address")?
            .set_default("columns.staff", "PNS yang mengisi:")?
            .set_default(
                "summary.api_endpoint",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("summary.api_key", "")?
            .set_default("summary.model", "gemini-2.5-flash")?
            .set_default("whatsapp.report_number", "")?
            .set_default("pdf.font_dir", "./fonts")?
            .set_default("pdf.font_family", "Roboto")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (SARKOP_ prefix)
            .add_source(
                Environment::with_prefix("SARKOP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
