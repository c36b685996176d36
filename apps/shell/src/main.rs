mod cli;
mod render;
mod session;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use inv_logger::Logger;
use inventra::domain::config::DashboardConfig;
use inventra::features::transfers::Transfers;
use inventra::kernel::config::load_config;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config: DashboardConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    cli.apply(&mut config);

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &config.logging)?;

    let workspace = inventra::workspace(config)?;
    let transfers = workspace.try_get_slice::<Transfers>()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::List(args) => {
            let mut list = transfers.write();
            list.set_filter(args.filter());
            render::table(&mut out, &list)?;
        }
        Command::Summary => render::summary(&mut out, &transfers.read().summary())?,
        Command::Session => {
            session::run(std::io::stdin().lock(), &mut out, transfers, &workspace.notifications)?;
        }
    }
    out.flush()?;
    Ok(())
}
