//! String identifiers shared by configuration, logs and front ends.

/// Application name used for log files and the config env prefix.
pub const APP_NAME: &str = "inventra";

/// Prefix for environment overrides (`INVENTRA__TRANSFERS__SEED=...`).
pub const ENV_PREFIX: &str = "INVENTRA";

pub const DASHBOARD: &str = "dashboard";
pub const INVENTORY: &str = "inventory";
pub const FORECASTS: &str = "forecasts";
pub const TRANSFERS: &str = "transfers";
pub const MAP: &str = "map";
pub const SETTINGS: &str = "settings";
