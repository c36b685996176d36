#![windows_subsystem = "windows"]

use anyhow::Context;
use inv_desktop::{App, DesktopApp};
use inv_logger::Logger;
use inventra::domain::config::DashboardConfig;
use inventra::kernel::config::load_config;

fn main() -> anyhow::Result<()> {
    let config: DashboardConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &config.logging)?;

    let workspace = inventra::workspace(config)?;

    DesktopApp::new().with_title("Inventra · Transfer Suggestions").launch(workspace, App);

    Ok(())
}
