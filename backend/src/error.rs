//! Error handling for the Sarkop Stock Opname Platform
//!
//! Provides consistent error responses in English and Indonesian

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Configuration errors: fatal to the calling operation, no retry
    #[error("Configuration error: {0}")]
    Configuration(String),

    // Validation errors
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // External service errors
    #[error("Spreadsheet API error (status {status}): {message}")]
    SheetsApi { status: u16, message: String },

    #[error("Summary service error: {0}")]
    SummaryService(String),

    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_id: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message_en: format!("Configuration error: {}", msg),
                    message_id: format!("Kesalahan konfigurasi: {}", msg),
                },
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_id: format!("Data tidak valid: {}", msg),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message_en: format!("{} not found", resource),
                    message_id: format!("{} tidak ditemukan", resource),
                },
            ),
            AppError::SheetsApi { status, message } => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "SHEETS_API_ERROR".to_string(),
                    message_en: format!(
                        "Failed to fetch data from the spreadsheet. Status: {}. {}",
                        status, message
                    ),
                    message_id: format!(
                        "Gagal mengambil data dari spreadsheet. Status: {}. {}",
                        status, message
                    ),
                },
            ),
            AppError::SummaryService(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "SUMMARY_SERVICE_ERROR".to_string(),
                    message_en: format!("Failed to communicate with the AI service: {}", msg),
                    message_id: format!("Gagal terhubung ke layanan AI: {}", msg),
                },
            ),
            AppError::PdfGeneration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "PDF_GENERATION_ERROR".to_string(),
                    message_en: format!("Failed to generate PDF: {}", msg),
                    message_id: format!("Gagal membuat PDF: {}", msg),
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_id: "Terjadi kesalahan internal pada server".to_string(),
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: "An internal server error occurred".to_string(),
                    message_id: "Terjadi kesalahan internal pada server".to_string(),
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
