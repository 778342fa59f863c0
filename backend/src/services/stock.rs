//! Current stock service
//!
//! Derives the current-stock view from the processing table. Conditions
//! are always recomputed from the quantities; whatever the sheet's own
//! condition column says is ignored.

use std::sync::Arc;

use serde::Serialize;

use shared::{
    latest_submission_meta, sort_by_urgency, ConditionLevel, CurrentStockItem, LatestMeta,
    StockRecord,
};

use crate::error::AppResult;
use crate::external::SheetsClient;
use crate::Config;

/// Stock service for the current-state views
#[derive(Clone)]
pub struct StockService {
    sheets: SheetsClient,
    config: Arc<Config>,
}

/// Current stock plus the freshness metadata shown above it
#[derive(Debug, Serialize)]
pub struct CurrentStockOverview {
    pub latest: Option<LatestMeta>,
    pub danger_count: usize,
    pub low_count: usize,
    pub items: Vec<CurrentStockItem>,
}

impl StockService {
    /// Create a new StockService instance
    pub fn new(sheets: SheetsClient, config: Arc<Config>) -> Self {
        Self { sheets, config }
    }

    /// Current stock items from the processing table, urgency-sorted
    pub async fn current_stock(&self) -> AppResult<Vec<CurrentStockItem>> {
        let table = self
            .sheets
            .fetch_table(&self.config.sheets.processing_range)
            .await?;
        let records = StockRecord::from_table(&table);
        let mut items: Vec<CurrentStockItem> = records
            .iter()
            .filter_map(CurrentStockItem::from_record)
            .collect();
        sort_by_urgency(&mut items);
        Ok(items)
    }

    /// Form-submission history, with trailing blank rows dropped
    pub async fn submissions(&self) -> AppResult<Vec<StockRecord>> {
        let table = self
            .sheets
            .fetch_table(&self.config.sheets.submissions_range)
            .await?;
        let reserved = self.config.columns.reserved();
        Ok(StockRecord::from_table(&table)
            .into_iter()
            .filter(|record| record.is_submission(&reserved))
            .collect())
    }

    /// Freshness metadata of the latest submission across the full history
    pub async fn latest_meta(&self) -> AppResult<Option<LatestMeta>> {
        let submissions = self.submissions().await?;
        Ok(latest_submission_meta(
            &submissions,
            &self.config.columns.reserved(),
        ))
    }

    /// Current stock together with freshness metadata and condition tallies
    pub async fn overview(&self) -> AppResult<CurrentStockOverview> {
        let items = self.current_stock().await?;
        let latest = self.latest_meta().await?;
        let danger_count = items
            .iter()
            .filter(|item| item.condition == ConditionLevel::Danger)
            .count();
        let low_count = items
            .iter()
            .filter(|item| item.condition == ConditionLevel::Low)
            .count();
        Ok(CurrentStockOverview {
            latest,
            danger_count,
            low_count,
            items,
        })
    }
}
