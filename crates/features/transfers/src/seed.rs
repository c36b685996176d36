//! Initial transfer suggestion data.

use crate::error::{Result, TransferErrorExt};
use crate::model::{CostSaving, Priority, TransferStatus, TransferSuggestion};
use std::path::Path;
use tracing::debug;

/// The five suggestions shipped with the dashboard.
#[must_use]
pub fn builtin() -> Vec<TransferSuggestion> {
    vec![
        record(
            ["T001", "Seattle-Pike", "#089", "Portland-SW", "#156", "E345", "Rain Jacket"],
            25,
            ["280 km", "4 hours", "Forecasted demand surge in Portland"],
            (Priority::High, TransferStatus::Pending, 1250),
        ),
        record(
            ["T002", "Denver-Mall", "#278", "Austin-Central", "#156", "H234", "Winter Coat"],
            15,
            ["1,200 km", "18 hours", "Seasonal demand shift"],
            (Priority::Medium, TransferStatus::Approved, 890),
        ),
        record(
            ["T003", "LA-West", "#107", "Miami-Beach", "#143", "D012", "Summer Dress"],
            30,
            ["3,500 km", "2 days", "Inventory shortage detected"],
            (Priority::High, TransferStatus::Pending, 2100),
        ),
        record(
            ["T004", "Boston-North", "#234", "NYC-05", "#301", "F678", "Leather Boots"],
            20,
            ["350 km", "5 hours", "Regional preference alignment"],
            (Priority::Low, TransferStatus::Rejected, 450),
        ),
        record(
            ["T005", "Chicago-Loop", "#205", "Detroit-Central", "#198", "C789", "White Sneakers"],
            18,
            ["450 km", "6 hours", "Balance inventory levels"],
            (Priority::Medium, TransferStatus::Approved, 720),
        ),
    ]
}

fn record(
    [id, from_store, from_store_id, to_store, to_store_id, sku, product_name]: [&str; 7],
    quantity: u32,
    [distance, estimated_time, reason]: [&str; 3],
    (priority, status, saving): (Priority, TransferStatus, u64),
) -> TransferSuggestion {
    TransferSuggestion {
        id: id.to_owned(),
        from_store: from_store.to_owned(),
        from_store_id: from_store_id.to_owned(),
        to_store: to_store.to_owned(),
        to_store_id: to_store_id.to_owned(),
        sku: sku.to_owned(),
        product_name: product_name.to_owned(),
        quantity,
        distance: distance.to_owned(),
        estimated_time: estimated_time.to_owned(),
        priority,
        status,
        reason: reason.to_owned(),
        cost_saving: CostSaving(saving),
    }
}

/// Parses a JSON array of transfer suggestions.
///
/// # Errors
/// Returns [`crate::TransferError::Parse`] when the document is not a valid array of records.
pub fn from_json(json: &str) -> Result<Vec<TransferSuggestion>> {
    serde_json::from_str(json).context("Parsing transfer seed")
}

/// Reads a seed file.
///
/// # Errors
/// Returns [`crate::TransferError::Seed`] if the file cannot be read and
/// [`crate::TransferError::Parse`] if it is not a valid array of records.
pub fn load(path: &Path) -> Result<Vec<TransferSuggestion>> {
    debug!(path = %path.display(), "Reading transfer seed");
    let raw = std::fs::read_to_string(path)
        .context(format!("Failed to read transfer seed: {}", path.display()))?;
    from_json(&raw)
}
