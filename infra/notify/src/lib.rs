//! # Notifications
//!
//! Transient user-facing notifications ("toasts") for the dashboard front ends.
//!
//! ## Overview
//!
//! A [`Notifications`] center fans every [`Toast`] out over a `tokio` broadcast
//! channel and keeps a bounded history, so a renderer can either follow the live
//! stream or read the latest entries on its next frame.
//!
//! # Example
//!
//! ```rust
//! use inv_notify::{Notifications, Toast, ToastReceiverExt};
//!
//! let center = Notifications::new();
//! let mut rx = center.subscribe();
//!
//! center.notify(Toast::success("Transfer Approved", "Transfer T001 has been approved successfully"));
//! center.notify(Toast::destructive("Transfer Rejected", "Transfer T003 has been rejected"));
//!
//! let toasts = rx.drain();
//! assert_eq!(toasts.len(), 2);
//! assert!(toasts[1].is_destructive());
//! ```

mod center;
mod error;
mod receiver;
mod toast;

pub use center::Notifications;
pub use error::{NotifyError, NotifyErrorExt};
pub use receiver::ToastReceiverExt;
pub use toast::{Toast, ToastVariant};
