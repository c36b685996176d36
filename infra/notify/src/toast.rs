use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient user-facing notification.
///
/// `seq` is zero until the toast passes through [`crate::Notifications::notify`],
/// which stamps it with the next sequence number.
#[inv_derive::view_model]
#[derive(PartialEq, Eq)]
pub struct Toast {
    pub seq: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        variant: ToastVariant,
    ) -> Self {
        Self { seq: 0, title: title.into(), description: description.into(), variant }
    }

    /// A default-styled toast.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, ToastVariant::Default)
    }

    /// A destructive-styled toast (rejections, failures).
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, ToastVariant::Destructive)
    }

    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.variant {
            ToastVariant::Default => "✔",
            ToastVariant::Destructive => "✖",
        };
        write!(f, "{marker} {}: {}", self.title, self.description)
    }
}
