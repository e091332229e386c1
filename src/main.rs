//! osshare: desktop dashboard of OS market share, 2001–2024.
//!
//! Run with:  `RUST_LOG=info osshare`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use osshare_core::{report, Dataset, TimeRange};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "osshare", version, about = "Historical OS market share dashboard")]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/osshare/osshare.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the dashboard window (default).
    Gui,
    /// Print the yearly data table.
    Table {
        /// "all" or the number of most recent years.
        #[arg(long, default_value = "all")]
        range: TimeRange,
    },
    /// Print the latest year-over-year changes.
    Stats,
    /// Print the dataset as JSON.
    Export,
}

fn main() -> Result<()> {
    // Structured logging; RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data = Dataset::builtin();

    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => {
            tracing::info!("osshare v{} starting", env!("CARGO_PKG_VERSION"));
            let path = cli.config.unwrap_or_else(osshare_config::default_path);
            osshare_app::run(path).context("dashboard window failed")?;
        }
        Command::Table { range } => {
            print!("{}", report::format_table(&data.window(range)));
        }
        Command::Stats => {
            let changes = data
                .latest_changes()
                .context("dataset needs at least two years for statistics")?;
            print!("{}", report::format_stats(&changes));
        }
        Command::Export => {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
    }

    Ok(())
}
