//! Facade crate for Inventra features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `inventra` with the desired slice features (`transfers` is on by default).
//! - Call [`workspace`] to get a ready [`Workspace`], or [`init`] to only build the slices.

pub use inv_domain as domain;
pub use inv_kernel as kernel;
pub use inv_notify as notify;

use inv_domain::config::DashboardConfig;
use inv_domain::features::Page;
use inv_domain::registry::InitializedSlice;
pub use inv_kernel::workspace::{Workspace, WorkspaceError};
use inv_notify::{Notifications, NotifyError};

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "transfers")]
    pub use inv_transfers as transfers;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "transfers")]
        "transfers",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Notify(#[from] NotifyError),
    #[cfg(feature = "transfers")]
    #[error(transparent)]
    Transfers(#[from] inv_transfers::TransferError),
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
}

/// Initialize every feature slice enabled both at build time and in `config.pages`.
///
/// # Errors
/// Returns an error if any slice fails to initialize.
pub fn init(
    config: &DashboardConfig,
    notifications: &Notifications,
) -> Result<Vec<InitializedSlice>, InitError> {
    let mut slices = Vec::new();

    // Transfers
    #[cfg(feature = "transfers")]
    if config.pages.contains(Page::TRANSFERS) {
        slices.push(features::transfers::init(&config.transfers, notifications)?);
    }

    tracing::info!(
        slices = slices.len(),
        pages = ?config.pages.names().collect::<Vec<_>>(),
        "Feature slices initialized"
    );
    Ok(slices)
}

/// Builds the notification center from config, initializes the slices and
/// assembles the [`Workspace`].
///
/// # Errors
/// Returns an error if the notification bounds are invalid or a slice fails.
pub fn workspace(config: DashboardConfig) -> Result<Workspace, InitError> {
    let notifications = Notifications::with_capacity(
        config.notifications.channel_capacity,
        config.notifications.history,
    )?;
    let slices = init(&config, &notifications)?;

    Ok(Workspace::builder()
        .config(config)
        .notifications(notifications)
        .register_slices(slices)
        .build()?)
}
