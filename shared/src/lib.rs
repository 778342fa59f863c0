//! Shared types and derivation logic for the Sarkop Stock Opname Platform
//!
//! This crate contains the pure, I/O-free core: record normalization,
//! timestamp parsing, restock condition evaluation, daily snapshots,
//! date-range deltas, and vendor grouping. The backend crate layers the
//! HTTP surface and external collaborators on top of it.

pub mod delta;
pub mod models;
pub mod restock;
pub mod snapshot;
pub mod timestamp;
pub mod types;

pub use delta::*;
pub use models::*;
pub use restock::*;
pub use snapshot::*;
pub use timestamp::*;
pub use types::*;
