//! Vendor grouping and restock request composition
//!
//! Two views consume these helpers and they deliberately use different
//! selection predicates: the broadcast view picks items at or below the
//! minimum restock threshold, while the supplier-detail view shows every
//! item needing attention (below par or flagged by condition). Both views
//! order items by urgency before display or message composition.

use crate::models::{
    ConditionLevel, CurrentStockItem, SupplierContact, VendorMessage,
};

/// Bucket label for items without an assigned vendor
pub const NO_VENDOR_LABEL: &str = "Tanpa Vendor";

/// Broadcast predicate: the item is due for reordering
pub fn needs_restock(item: &CurrentStockItem) -> bool {
    item.current_qty <= item.min_restock
}

/// Supplier-detail predicate: the item is below par or its condition is
/// not normal. Distinct from [`needs_restock`]; the two are never unified.
pub fn needs_attention(item: &CurrentStockItem) -> bool {
    item.current_qty < item.par_qty || item.condition != ConditionLevel::Normal
}

/// Stable sort by urgency: bahaya first, then low, then normal
pub fn sort_by_urgency(items: &mut [CurrentStockItem]) {
    items.sort_by_key(|item| item.condition.urgency());
}

/// Vendor grouping key, with blank vendors bucketed under the fallback
pub fn vendor_label(vendor: &str) -> &str {
    let vendor = vendor.trim();
    if vendor.is_empty() {
        NO_VENDOR_LABEL
    } else {
        vendor
    }
}

/// Group items by vendor label, preserving first-seen vendor order
pub fn group_by_vendor(items: &[CurrentStockItem]) -> Vec<(String, Vec<CurrentStockItem>)> {
    let mut groups: Vec<(String, Vec<CurrentStockItem>)> = Vec::new();
    for item in items {
        let label = vendor_label(&item.vendor);
        match groups.iter_mut().find(|(vendor, _)| vendor == label) {
            Some((_, list)) => list.push(item.clone()),
            None => groups.push((label.to_string(), vec![item.clone()])),
        }
    }
    groups
}

/// Greeting name for a vendor: the contact's alias when a supplier with the
/// exact same name provides one, otherwise the vendor name itself
pub fn greeting_for<'a>(vendor: &'a str, suppliers: &'a [SupplierContact]) -> &'a str {
    suppliers
        .iter()
        .find(|contact| contact.name == vendor)
        .map(|contact| contact.greeting_name())
        .unwrap_or(vendor)
}

/// Broadcast per-item line: current quantity first
pub fn broadcast_line(item: &CurrentStockItem) -> String {
    format!("- {}: {} {}", item.item, item.current_qty, item.unit)
        .trim_end()
        .to_string()
}

/// Supplier-detail per-item line: restock quantity first
pub fn supplier_line(item: &CurrentStockItem) -> String {
    format!("- {}: {} ({})", item.item, item.min_restock, item.unit)
}

/// Restock request template shared by both views
pub fn compose_restock_message(greeting: &str, lines: &[String]) -> String {
    format!(
        "Halo {},\n\nKami dari Sarkop membutuhkan barang yang perlu direstock:\n\n{}\n\n\
         Mohon segera informasikan apabila ada barang yang tidak tersedia. Terima kasih.",
        greeting,
        lines.join("\n")
    )
}

/// Compose the per-vendor broadcast: items at or below minimum restock,
/// urgency-sorted, grouped by vendor, vendors ordered by descending item
/// count (most restock volume first)
pub fn broadcast_messages(
    items: &[CurrentStockItem],
    suppliers: &[SupplierContact],
) -> Vec<VendorMessage> {
    let mut needed: Vec<CurrentStockItem> =
        items.iter().filter(|item| needs_restock(item)).cloned().collect();
    sort_by_urgency(&mut needed);

    let mut messages: Vec<VendorMessage> = group_by_vendor(&needed)
        .into_iter()
        .map(|(vendor, list)| {
            let lines: Vec<String> = list.iter().map(broadcast_line).collect();
            let message = compose_restock_message(greeting_for(&vendor, suppliers), &lines);
            VendorMessage {
                vendor,
                items: list,
                message,
            }
        })
        .collect();
    messages.sort_by(|a, b| b.items.len().cmp(&a.items.len()));
    messages
}

/// Items of one vendor for the supplier-detail view, urgency-sorted. The
/// caller applies [`needs_attention`] to the full stock first; this only
/// narrows to the vendor's bucket.
pub fn vendor_items(vendor: &str, items: &[CurrentStockItem]) -> Vec<CurrentStockItem> {
    let mut list: Vec<CurrentStockItem> = items
        .iter()
        .filter(|item| vendor_label(&item.vendor) == vendor)
        .cloned()
        .collect();
    sort_by_urgency(&mut list);
    list
}

/// Compose the supplier-detail request for one vendor
pub fn compose_supplier_message(
    vendor: &str,
    items: &[CurrentStockItem],
    suppliers: &[SupplierContact],
) -> String {
    let lines: Vec<String> = items.iter().map(supplier_line).collect();
    compose_restock_message(greeting_for(vendor, suppliers), &lines)
}
