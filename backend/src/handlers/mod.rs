//! HTTP handlers for the Sarkop Stock Opname Platform

pub mod health;
pub mod report;
pub mod stock;
pub mod supplier;

pub use health::*;
pub use report::*;
pub use stock::*;
pub use supplier::*;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Wrap rendered PDF bytes as a downloadable response
pub(crate) fn pdf_response(bytes: Vec<u8>, file_name: &str) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    )
        .into_response()
}
