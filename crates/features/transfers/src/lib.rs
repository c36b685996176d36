//! Transfer suggestions feature slice.
//!
//! Holds the list of proposed store-to-store transfers and the view-model
//! driving the transfers page: status/priority/search filtering, a selection of
//! pending rows, aggregate savings and the approve/reject/bulk-approve workflow.

mod error;
mod filter;
mod list;
mod model;
pub mod seed;
mod selection;
mod summary;

pub use error::{TransferError, TransferErrorExt};
pub use filter::{PriorityFilter, StatusFilter, TransferFilter};
pub use list::TransferList;
pub use model::{
    Badge, BadgeTone, CostSaving, Priority, TransferStatus, TransferSuggestion, group_thousands,
};
pub use selection::Selection;
pub use summary::TransferSummary;

use inv_domain::config::TransfersConfig;
use inv_domain::registry::InitializedSlice;
use inv_notify::Notifications;
use parking_lot::{RwLockReadGuard, RwLockWriteGuard};

/// Transfers feature state, shared between front ends.
#[inv_derive::inv_slice]
pub struct Transfers {
    list: parking_lot::RwLock<TransferList>,
}

impl Transfers {
    /// Wraps an already built list.
    #[must_use]
    pub fn from_list(list: TransferList) -> Self {
        Self::new(TransfersInner { list: parking_lot::RwLock::new(list) })
    }

    pub fn read(&self) -> RwLockReadGuard<'_, TransferList> {
        self.list.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, TransferList> {
        self.list.write()
    }
}

/// Initialize the transfers feature.
///
/// Records come from `config.seed` when set, otherwise the built-in set is used.
///
/// # Errors
/// Returns an error if the seed file cannot be read or holds invalid records.
pub fn init(
    config: &TransfersConfig,
    notifications: &Notifications,
) -> Result<InitializedSlice, TransferError> {
    let records = match &config.seed {
        Some(path) => seed::load(path)?,
        None => seed::builtin(),
    };
    let list = TransferList::new(records, notifications.clone())?;

    tracing::info!(records = list.len(), seed = ?config.seed, "Transfers slice initialized");

    Ok(InitializedSlice::new(Transfers::from_list(list)))
}
