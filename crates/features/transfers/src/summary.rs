use crate::model::{TransferStatus, TransferSuggestion};
use serde::Serialize;
use std::fmt;

/// Counters shown in the cards above the transfer table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransferSummary {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
}

impl<'a> FromIterator<&'a TransferSuggestion> for TransferSummary {
    fn from_iter<I: IntoIterator<Item = &'a TransferSuggestion>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut summary, transfer| {
            summary.total += 1;
            match transfer.status {
                TransferStatus::Approved => summary.approved += 1,
                TransferStatus::Pending => summary.pending += 1,
                TransferStatus::Rejected => summary.rejected += 1,
            }
            summary
        })
    }
}

impl fmt::Display for TransferSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Suggestions: {}  Approved: {}  Pending: {}  Rejected: {}",
            self.total, self.approved, self.pending, self.rejected
        )
    }
}
