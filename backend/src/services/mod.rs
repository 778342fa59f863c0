//! Business logic services for the Sarkop Stock Opname Platform

pub mod pdf;
pub mod report;
pub mod stock;
pub mod supplier;

pub use pdf::PdfService;
pub use report::ReportService;
pub use stock::StockService;
pub use supplier::SupplierService;
