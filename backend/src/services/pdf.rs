//! PDF report rendering
//!
//! Renders the current-stock table and the per-day before/after range
//! report. Fonts are loaded from a configured directory at render time.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use genpdf::{elements, style, Element};

use shared::{CurrentStockItem, DateRange, ItemRow, LatestMeta};

use crate::config::PdfConfig;
use crate::error::{AppError, AppResult};

/// PDF rendering service
#[derive(Clone)]
pub struct PdfService {
    font_dir: String,
    font_family: String,
}

impl PdfService {
    /// Create a new PdfService instance
    pub fn new(config: &PdfConfig) -> Self {
        Self {
            font_dir: config.font_dir.clone(),
            font_family: config.font_family.clone(),
        }
    }

    fn document(&self, title: &str) -> AppResult<genpdf::Document> {
        let font_family = genpdf::fonts::from_files(&self.font_dir, &self.font_family, None)
            .map_err(|e| {
                AppError::PdfGeneration(format!(
                    "failed to load font '{}' from {}: {}",
                    self.font_family, self.font_dir, e
                ))
            })?;
        let mut doc = genpdf::Document::new(font_family);
        doc.set_title(title);
        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);
        Ok(doc)
    }

    /// Render the current-stock report: freshness line, condition tallies
    /// and the urgency-sorted stock table
    pub fn current_stock_pdf(
        &self,
        items: &[CurrentStockItem],
        latest: Option<&LatestMeta>,
    ) -> AppResult<Vec<u8>> {
        let mut doc = self.document("Current Stock Report")?;

        doc.push(
            elements::Paragraph::new("Current Stock Report")
                .styled(style::Style::new().bold().with_font_size(18)),
        );
        if let Some(meta) = latest {
            let staff = if meta.staff.is_empty() {
                String::new()
            } else {
                format!(" - Oleh: {}", meta.staff)
            };
            doc.push(
                elements::Paragraph::new(format!(
                    "Terakhir diperbarui: {}{}",
                    meta.timestamp, staff
                ))
                .styled(style::Style::new().with_font_size(10)),
            );
        }
        let danger = items
            .iter()
            .filter(|item| item.condition == shared::ConditionLevel::Danger)
            .count();
        let low = items
            .iter()
            .filter(|item| item.condition == shared::ConditionLevel::Low)
            .count();
        doc.push(
            elements::Paragraph::new(format!("Bahaya: {}   Low: {}", danger, low))
                .styled(style::Style::new().with_font_size(10)),
        );
        doc.push(elements::Break::new(1.5));

        let mut table = elements::TableLayout::new(vec![4, 2, 2, 2, 2]);
        table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

        let bold = style::Style::new().bold();
        table
            .row()
            .element(elements::Paragraph::new("Item").styled(bold))
            .element(elements::Paragraph::new("Condition").styled(bold))
            .element(elements::Paragraph::new("Current Qty").styled(bold))
            .element(elements::Paragraph::new("Unit").styled(bold))
            .element(elements::Paragraph::new("Minimum Restock").styled(bold))
            .push()
            .map_err(pdf_error)?;

        for item in items {
            table
                .row()
                .element(elements::Paragraph::new(item.item.clone()))
                .element(elements::Paragraph::new(item.condition.display_label()))
                .element(elements::Paragraph::new(item.current_qty.to_string()))
                .element(elements::Paragraph::new(item.unit.clone()))
                .element(elements::Paragraph::new(item.min_restock.to_string()))
                .push()
                .map_err(pdf_error)?;
        }
        doc.push(table);

        render(doc)
    }

    /// Render the date-range report: one page per snapshot day, each with
    /// its before/after item table
    pub fn range_report_pdf(
        &self,
        rows_by_day: &BTreeMap<NaiveDate, Vec<ItemRow>>,
        range: &DateRange,
    ) -> AppResult<Vec<u8>> {
        let mut doc = self.document("Stock Opname Report")?;

        let subtitle = if range.start == range.end {
            format!("Report for the period of {}", range.start)
        } else {
            format!("Report for the period of {} to {}", range.start, range.end)
        };

        for (page, (day, rows)) in rows_by_day.iter().enumerate() {
            if page > 0 {
                doc.push(elements::PageBreak::new());
            }

            doc.push(
                elements::Paragraph::new("Stock Opname Report")
                    .styled(style::Style::new().bold().with_font_size(18)),
            );
            doc.push(
                elements::Paragraph::new(subtitle.clone())
                    .styled(style::Style::new().with_font_size(12)),
            );
            doc.push(elements::Break::new(1.0));
            doc.push(
                elements::Paragraph::new(day.to_string())
                    .styled(style::Style::new().bold().with_font_size(14)),
            );
            doc.push(elements::Break::new(0.5));

            let mut table = elements::TableLayout::new(vec![4, 2, 2]);
            table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

            let bold = style::Style::new().bold();
            table
                .row()
                .element(elements::Paragraph::new("Item Name").styled(bold))
                .element(elements::Paragraph::new("Stock Before").styled(bold))
                .element(elements::Paragraph::new("Stock After").styled(bold))
                .push()
                .map_err(pdf_error)?;

            for row in rows {
                table
                    .row()
                    .element(elements::Paragraph::new(row.item_name.clone()))
                    .element(elements::Paragraph::new(row.before.clone()))
                    .element(elements::Paragraph::new(row.after.clone()))
                    .push()
                    .map_err(pdf_error)?;
            }
            doc.push(table);
        }

        render(doc)
    }
}

fn render(doc: genpdf::Document) -> AppResult<Vec<u8>> {
    let mut buffer = Vec::new();
    doc.render(&mut buffer).map_err(pdf_error)?;
    Ok(buffer)
}

fn pdf_error(e: genpdf::error::Error) -> AppError {
    AppError::PdfGeneration(e.to_string())
}
