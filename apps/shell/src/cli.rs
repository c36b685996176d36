use clap::{Args, Parser, Subcommand};
use inventra::domain::config::DashboardConfig;
use inventra::features::transfers::{PriorityFilter, StatusFilter, TransferFilter};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "inventra", version, about = "Review and approve inventory transfer suggestions")]
pub struct Cli {
    /// Config file (TOML, JSON or YAML); `INVENTRA__*` variables override it.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON array of transfer suggestions replacing the built-in set.
    #[arg(long, global = true, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the transfer table.
    List(ListArgs),
    /// Print total, approved, pending and rejected counts.
    Summary,
    /// Read commands from stdin and apply them to one live list.
    Session,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// all, pending, approved or rejected.
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    /// all, high, medium or low.
    #[arg(long, default_value = "all")]
    pub priority: PriorityFilter,

    /// Matches product name, SKU and store names, ignoring case.
    #[arg(long, default_value = "")]
    pub search: String,
}

impl ListArgs {
    pub fn filter(&self) -> TransferFilter {
        TransferFilter::new(self.status, self.priority, self.search.as_str())
    }
}

impl Cli {
    /// Folds the command-line overrides into the loaded config.
    pub fn apply(&self, config: &mut DashboardConfig) {
        if let Some(seed) = &self.seed {
            config.transfers.seed = Some(seed.clone());
        }
        if self.verbose {
            config.logging.level = "debug".to_owned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventra::features::transfers::{Priority, TransferStatus};

    #[test]
    fn parses_list_filters() {
        let cli = Cli::parse_from([
            "inventra", "list", "--status", "Pending", "--priority", "high", "--search", "rain",
        ]);
        let Command::List(args) = cli.command else { panic!("expected list") };
        assert_eq!(args.status, StatusFilter::Only(TransferStatus::Pending));
        assert_eq!(args.priority, PriorityFilter::Only(Priority::High));
        assert_eq!(args.filter().search(), "rain");
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(Cli::try_parse_from(["inventra", "list", "--status", "shipped"]).is_err());
    }

    #[test]
    fn overrides_apply_to_config() {
        let cli = Cli::parse_from(["inventra", "--seed", "seed.json", "-v", "summary"]);
        let mut config = DashboardConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.transfers.seed.as_deref(), Some(std::path::Path::new("seed.json")));
        assert_eq!(config.logging.level, "debug");
    }
}
