use crate::error::TransferError;
use crate::model::{Priority, TransferStatus, TransferSuggestion};
use std::fmt;
use std::str::FromStr;

const ALL: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TransferStatus),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl StatusFilter {
    #[must_use]
    pub fn accepts(self, status: TransferStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl PriorityFilter {
    #[must_use]
    pub fn accepts(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == priority,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) { Ok(Self::All) } else { s.parse().map(Self::Only) }
    }
}

impl FromStr for PriorityFilter {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) { Ok(Self::All) } else { s.parse().map(Self::Only) }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(status) => f.write_str(status.as_str()),
        }
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(priority) => f.write_str(&priority.as_str().to_ascii_lowercase()),
        }
    }
}

/// The three independent criteria of the transfer table; a record is visible
/// when all of them accept it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferFilter {
    pub status: StatusFilter,
    pub priority: PriorityFilter,
    search: String,
    needle: String,
}

impl TransferFilter {
    #[must_use]
    pub fn new(status: StatusFilter, priority: PriorityFilter, search: impl Into<String>) -> Self {
        let mut filter = Self { status, priority, ..Self::default() };
        filter.set_search(search);
        filter
    }

    /// The search term as typed.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.needle = self.search.to_lowercase();
    }

    #[must_use]
    pub fn matches(&self, transfer: &TransferSuggestion) -> bool {
        self.status.accepts(transfer.status)
            && self.priority.accepts(transfer.priority)
            && transfer.matches_search(&self.needle)
    }

    /// True when nothing is filtered out.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.status == StatusFilter::All
            && self.priority == PriorityFilter::All
            && self.search.is_empty()
    }
}
