use crate::features::Page;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level dashboard configuration shared across slices and front ends.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfigInner {
    pub pages: Page,
    pub logging: LoggingConfig,
    pub notifications: NotificationConfig,
    pub transfers: TransfersConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(flatten, default)]
    inner: Arc<DashboardConfigInner>,
}

impl Deref for DashboardConfig {
    type Target = DashboardConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for DashboardConfig {
    fn deref_mut(&mut self) -> &mut DashboardConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Extra env-filter directives, e.g. `inv_transfers=debug`.
    pub filter: Option<String>,
    /// Enables rolling file output into this directory.
    pub directory: Option<PathBuf>,
    /// Writes file output as JSON lines.
    pub json: bool,
    pub console: bool,
}

/// Toast channel and history bounds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub channel_capacity: usize,
    pub history: usize,
}

/// Transfer suggestions slice settings.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransfersConfig {
    /// JSON array of transfer suggestions; the built-in set is used when absent.
    pub seed: Option<PathBuf>,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            directory: None,
            json: false,
            console: true,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { channel_capacity: 128, history: 32 }
    }
}
