use crate::error::TransferError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How a badge should be styled by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    Success,
    Danger,
    Warning,
    Destructive,
    Secondary,
    Outline,
}

/// A label plus its tone, as shown in the status and priority columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Badge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    #[must_use]
    pub const fn badge(self) -> Badge {
        let tone = match self {
            Self::High => BadgeTone::Destructive,
            Self::Medium => BadgeTone::Secondary,
            Self::Low => BadgeTone::Outline,
        };
        Badge { label: self.as_str(), tone }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|p| p.as_str().eq_ignore_ascii_case(s.trim())).ok_or_else(|| {
            TransferError::InvalidFilter {
                message: format!("unknown priority '{s}'").into(),
                context: None,
            }
        })
    }
}

/// Approval state. Only `Pending` may change, and only once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl TransferStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Whether `self -> next` is an allowed transition.
    #[must_use]
    pub const fn can_become(self, next: Self) -> bool {
        matches!((self, next), (Self::Pending, Self::Approved | Self::Rejected))
    }

    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn badge(self) -> Badge {
        match self {
            Self::Approved => Badge { label: "Approved", tone: BadgeTone::Success },
            Self::Rejected => Badge { label: "Rejected", tone: BadgeTone::Danger },
            Self::Pending => Badge { label: "Pending", tone: BadgeTone::Warning },
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransferStatus {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|st| st.as_str().eq_ignore_ascii_case(s.trim())).ok_or_else(
            || TransferError::InvalidFilter {
                message: format!("unknown status '{s}'").into(),
                context: None,
            },
        )
    }
}

/// Estimated saving of a transfer in whole currency units.
///
/// Parses from and renders to dollar strings such as `"$1,250"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CostSaving(pub u64);

impl CostSaving {
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }
}

impl FromStr for CostSaving {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.chars().filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace()).collect();
        digits.parse::<u64>().map(Self).map_err(|e| TransferError::InvalidRecord {
            message: format!("cost saving '{s}' is not a whole amount: {e}").into(),
            context: None,
        })
    }
}

impl fmt::Display for CostSaving {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", group_thousands(self.0))
    }
}

/// Formats `1250` as `1,250`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Serialize for CostSaving {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CostSaving {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CostVisitor;

        impl Visitor<'_> for CostVisitor {
            type Value = CostSaving;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a currency string like \"$1,250\" or a whole amount")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<CostSaving, E> {
                Ok(CostSaving(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<CostSaving, E> {
                u64::try_from(v).map(CostSaving).map_err(E::custom)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<CostSaving, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(CostVisitor)
    }
}

/// A proposed inventory move between two stores.
#[inv_derive::view_model]
#[derive(PartialEq, Eq)]
pub struct TransferSuggestion {
    pub id: String,
    pub from_store: String,
    #[serde(default)]
    pub from_store_id: String,
    pub to_store: String,
    #[serde(default)]
    pub to_store_id: String,
    pub sku: String,
    #[serde(default)]
    pub product_name: String,
    pub quantity: u32,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub estimated_time: String,
    pub priority: Priority,
    #[serde(default)]
    pub status: TransferStatus,
    #[serde(default)]
    pub reason: String,
    pub cost_saving: CostSaving,
}

impl TransferSuggestion {
    /// Checks the per-record constraints that serde cannot express.
    ///
    /// # Errors
    /// Returns [`TransferError::InvalidRecord`] for an empty id or a zero quantity.
    pub fn validate(&self) -> Result<(), TransferError> {
        if self.id.trim().is_empty() {
            return Err(TransferError::InvalidRecord {
                message: "transfer id cannot be empty".into(),
                context: None,
            });
        }
        if self.quantity == 0 {
            return Err(TransferError::InvalidRecord {
                message: format!("transfer {} has zero quantity", self.id).into(),
                context: None,
            });
        }
        Ok(())
    }

    /// Case-insensitive substring match over product name, SKU and both stores.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || [&self.product_name, &self.sku, &self.from_store, &self.to_store]
                .into_iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_saving_parses_currency_strings() {
        assert_eq!("$1,250".parse::<CostSaving>().unwrap(), CostSaving(1250));
        assert_eq!(" $ 890 ".parse::<CostSaving>().unwrap(), CostSaving(890));
        assert_eq!("2100".parse::<CostSaving>().unwrap(), CostSaving(2100));
        assert!("$12.50".parse::<CostSaving>().is_err());
        assert!("free".parse::<CostSaving>().is_err());
    }

    #[test]
    fn cost_saving_renders_grouped() {
        assert_eq!(CostSaving(1250).to_string(), "$1,250");
        assert_eq!(CostSaving(450).to_string(), "$450");
        assert_eq!(CostSaving(1_234_567).to_string(), "$1,234,567");
        assert_eq!(CostSaving(0).to_string(), "$0");
    }

    #[test]
    fn only_pending_transitions_are_allowed() {
        use TransferStatus::{Approved, Pending, Rejected};
        assert!(Pending.can_become(Approved));
        assert!(Pending.can_become(Rejected));
        for from in [Approved, Rejected] {
            for to in TransferStatus::ALL {
                assert!(!from.can_become(to), "{from} -> {to} must be rejected");
            }
        }
        assert!(!Pending.can_become(Pending));
    }

    #[test]
    fn enums_parse_case_insensitively() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("Rejected".parse::<TransferStatus>().unwrap(), TransferStatus::Rejected);
        assert!(matches!("urgent".parse::<Priority>(), Err(TransferError::InvalidFilter { .. })));
    }

    #[test]
    fn badges_follow_status_and_priority() {
        assert_eq!(TransferStatus::Approved.badge().tone, BadgeTone::Success);
        assert_eq!(TransferStatus::Rejected.badge().tone, BadgeTone::Danger);
        assert_eq!(TransferStatus::Pending.badge().label, "Pending");
        assert_eq!(Priority::High.badge().tone, BadgeTone::Destructive);
        assert_eq!(Priority::Medium.badge().tone, BadgeTone::Secondary);
        assert_eq!(Priority::Low.badge().tone, BadgeTone::Outline);
    }
}
