//! Common types used across the platform

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A tabular query result as returned by the spreadsheet-backed data
/// provider: one header row plus zero or more data rows. Rows may be
/// shorter than the header when trailing cells are empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }
}

/// Inclusive date range for report queries
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether a calendar day falls inside the range (both ends inclusive)
    pub fn contains_day(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    /// Whether an instant falls inside the range, with the end extended to
    /// end-of-day (23:59:59.999)
    pub fn contains_instant(&self, at: NaiveDateTime) -> bool {
        let start = self.start.and_hms_opt(0, 0, 0).expect("midnight is valid");
        let end = self
            .end
            .and_hms_milli_opt(23, 59, 59, 999)
            .expect("end of day is valid");
        at >= start && at <= end
    }
}
