use crate::error::{Result, TransferError, TransferErrorExt};
use crate::filter::{PriorityFilter, StatusFilter, TransferFilter};
use crate::model::{TransferStatus, TransferSuggestion};
use crate::seed;
use crate::selection::Selection;
use crate::summary::TransferSummary;
use fxhash::FxHashMap;
use inv_notify::{Notifications, Toast};
use tracing::{debug, info};

/// View-model behind the transfer suggestions table.
///
/// Owns the seeded records, the three filter criteria and the selection.
/// Every user action is a synchronous call; notifications go out through the
/// shared [`Notifications`] center.
///
/// Invariant: the selection only ever holds ids of `pending` records.
#[derive(Debug)]
pub struct TransferList {
    records: Vec<TransferSuggestion>,
    index: FxHashMap<String, usize>,
    filter: TransferFilter,
    selection: Selection,
    notifications: Notifications,
}

impl TransferList {
    /// Builds the list from seed records, keeping their order.
    ///
    /// # Errors
    /// Returns [`TransferError::DuplicateId`] if two records share an id and
    /// [`TransferError::InvalidRecord`] if a record fails validation.
    pub fn new(records: Vec<TransferSuggestion>, notifications: Notifications) -> Result<Self> {
        let mut index = FxHashMap::default();
        for (pos, record) in records.iter().enumerate() {
            record.validate().context("Loading transfer suggestions")?;
            if index.insert(record.id.clone(), pos).is_some() {
                return Err(TransferError::DuplicateId {
                    message: record.id.clone().into(),
                    context: Some("Loading transfer suggestions".into()),
                });
            }
        }

        debug!(records = records.len(), "Transfer list seeded");
        Ok(Self {
            records,
            index,
            filter: TransferFilter::default(),
            selection: Selection::default(),
            notifications,
        })
    }

    /// The list over the built-in dashboard data.
    ///
    /// # Errors
    /// Only fails if the built-in data breaks a record invariant.
    pub fn seeded(notifications: Notifications) -> Result<Self> {
        Self::new(seed::builtin(), notifications)
    }

    #[must_use]
    pub fn records(&self) -> &[TransferSuggestion] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TransferSuggestion> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    #[must_use]
    pub const fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    // --- Filtering ---

    #[must_use]
    pub const fn filter(&self) -> &TransferFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: TransferFilter) {
        debug!(?filter, "Transfer filter replaced");
        self.filter = filter;
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        debug!(%status, "Status filter changed");
        self.filter.status = status;
    }

    pub fn set_priority_filter(&mut self, priority: PriorityFilter) {
        debug!(%priority, "Priority filter changed");
        self.filter.priority = priority;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.set_search(search);
        debug!(search = self.filter.search(), "Search term changed");
    }

    /// Records accepted by the current filter, in seed order.
    pub fn visible(&self) -> impl Iterator<Item = &TransferSuggestion> {
        self.records.iter().filter(|t| self.filter.matches(t))
    }

    /// Visible records that can still be approved or rejected.
    pub fn visible_pending(&self) -> impl Iterator<Item = &TransferSuggestion> {
        self.visible().filter(|t| t.status.is_pending())
    }

    // --- Selection ---

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Adds or removes a pending record from the selection.
    ///
    /// Unknown ids and records that are no longer pending are ignored.
    /// Returns whether the id is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        let selectable = self.get(id).is_some_and(|t| t.status.is_pending());
        if !selectable {
            debug!(id, "Ignoring selection of non-pending transfer");
            return self.selection.contains(id);
        }
        let selected = self.selection.toggle(id);
        debug!(id, selected, "Selection toggled");
        selected
    }

    /// The header checkbox: select exactly the visible pending records, or clear.
    pub fn select_all_pending(&mut self, checked: bool) {
        if checked {
            let ids: Vec<String> = self.visible_pending().map(|t| t.id.clone()).collect();
            self.selection.replace(ids);
        } else {
            self.selection.clear();
        }
        debug!(checked, selected = self.selection.len(), "Select all pending");
    }

    /// Header checkbox state: every visible pending record is selected.
    ///
    /// False when there is nothing pending in view.
    #[must_use]
    pub fn all_pending_selected(&self) -> bool {
        let mut pending = self.visible_pending().peekable();
        pending.peek().is_some() && pending.all(|t| self.selection.contains(&t.id))
    }

    /// Total saving of the selected records that are currently visible.
    ///
    /// Saturates at `u64::MAX`.
    #[must_use]
    pub fn selected_savings(&self) -> u64 {
        self.visible()
            .filter(|t| self.selection.contains(&t.id))
            .map(|t| t.cost_saving.amount())
            .fold(0, u64::saturating_add)
    }

    // --- Workflow ---

    /// Approves a pending transfer and emits a success toast.
    ///
    /// Returns `false` without side effects if the record is unknown or not pending.
    pub fn approve(&mut self, id: &str) -> bool {
        if !self.transition(id, TransferStatus::Approved) {
            return false;
        }
        self.notifications.notify(Toast::success(
            "Transfer Approved",
            format!("Transfer {id} has been approved successfully"),
        ));
        true
    }

    /// Rejects a pending transfer and emits a destructive toast.
    ///
    /// Returns `false` without side effects if the record is unknown or not pending.
    pub fn reject(&mut self, id: &str) -> bool {
        if !self.transition(id, TransferStatus::Rejected) {
            return false;
        }
        self.notifications.notify(Toast::destructive(
            "Transfer Rejected",
            format!("Transfer {id} has been rejected"),
        ));
        true
    }

    /// Approves every selected pending record, clears the selection and
    /// emits one summary toast.
    ///
    /// Returns the number of records that changed state.
    pub fn bulk_approve(&mut self) -> usize {
        let ids = self.selection.take();
        let approved = ids.iter().filter(|id| self.transition(id, TransferStatus::Approved)).count();

        info!(requested = ids.len(), approved, "Bulk approval complete");
        self.notifications.notify(Toast::success(
            "Bulk Approval Complete",
            format!("{approved} transfers have been approved"),
        ));
        approved
    }

    fn transition(&mut self, id: &str, next: TransferStatus) -> bool {
        let Some(&pos) = self.index.get(id) else {
            debug!(id, %next, "Ignoring action on unknown transfer");
            return false;
        };
        let record = &mut self.records[pos];
        if !record.status.can_become(next) {
            debug!(id, current = %record.status, %next, "Ignoring action on settled transfer");
            return false;
        }

        record.status = next;
        self.selection.remove(id);
        info!(id, status = %next, "Transfer status changed");
        true
    }

    // --- Read models ---

    #[must_use]
    pub fn summary(&self) -> TransferSummary {
        self.records.iter().collect()
    }

    /// Selected records in seed order, regardless of the filter.
    #[must_use]
    pub fn export_selected(&self) -> Vec<&TransferSuggestion> {
        self.records.iter().filter(|t| self.selection.contains(&t.id)).collect()
    }

    /// The selected records as a pretty-printed JSON array.
    ///
    /// # Errors
    /// Returns [`TransferError::Parse`] if serialization fails.
    pub fn export_selected_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.export_selected()).context("Exporting selected transfers")
    }
}
