use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use inv_domain::constants::{APP_NAME, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[inv_derive::inv_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from `path` (any format the `config` crate detects from the
///    extension, e.g. `inventra.toml`). An explicit path must exist. Without a path the loader
///    looks for an optional `inventra` file in the working directory.
/// 2. **Environment Overrides**: Overlays variables prefixed with `INVENTRA__`.
///    Nested keys use double underscores (`INVENTRA__TRANSFERS__SEED` maps to `transfers.seed`).
///
/// # Errors
/// This function will return an error if:
/// * An explicitly requested file cannot be found or parsed.
/// * The merged values do not match the structure of `T`.
///
/// # Example
/// ```rust
/// use inv_kernel::config::load_config;
/// use inv_kernel::domain::config::DashboardConfig;
///
/// let cfg: DashboardConfig = load_config(None::<&str>).unwrap_or_default();
/// assert_eq!(cfg.notifications.channel_capacity, 128);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path
        .map_or_else(|| (PathBuf::from(APP_NAME), false), |p| (p.as_ref().to_path_buf(), true));

    info!(path = %effective_path.display(), required, "Loading config");

    let builder = layered(&effective_path, required)
        .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__"));

    deserialize(builder)
}

fn layered(path: &Path, required: bool) -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from(path).required(required))
}

fn deserialize<T: DeserializeOwned>(builder: ConfigBuilder<DefaultState>) -> Result<T, ConfigError> {
    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inv_domain::config::DashboardConfig;
    use inv_domain::features::Page;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .source(Some(map))
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let cfg: DashboardConfig = load_config(None::<&str>).unwrap();
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.pages, Page::ALL);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let res = load_config::<DashboardConfig>(Some("/definitely/missing/inventra.toml"));
        assert!(matches!(res, Err(ConfigError::Config { context: Some(_), .. })));
    }

    #[test]
    fn file_values_are_loaded() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "pages = [\"transfers\"]\n[logging]\nlevel = \"debug\"\n[notifications]\nhistory = 5"
        )
        .unwrap();

        let cfg: DashboardConfig = load_config(Some(file.path())).unwrap();
        assert_eq!(cfg.pages, Page::TRANSFERS);
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.notifications.history, 5);
        assert_eq!(cfg.notifications.channel_capacity, 128);
    }

    #[test]
    fn environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

        let builder = layered(file.path(), true).add_source(env(&[
            ("INVENTRA__LOGGING__LEVEL", "warn"),
            ("INVENTRA__TRANSFERS__SEED", "/srv/seed.json"),
        ]));
        let cfg: DashboardConfig = deserialize(builder).unwrap();

        assert_eq!(cfg.logging.level, "warn");
        assert_eq!(cfg.transfers.seed.as_deref(), Some(Path::new("/srv/seed.json")));
    }
}
