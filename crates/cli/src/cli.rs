use std::env;
use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;

use crate::error::CliError;
use crate::poll::POLL_INTERVAL_MS;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Poll the station endpoint and regenerate the dashboard on a
    /// fixed cadence until interrupted.
    Watch(WatchArgs),

    /// Run a single fetch and render pass, without arming the timer.
    Snapshot(SnapshotArgs),
}

#[derive(Args)]
pub(crate) struct WatchArgs {
    #[command(flatten)]
    pub(crate) page: PageArgs,

    /// Specify the polling interval in milliseconds.
    #[arg(short, long, default_value_t = POLL_INTERVAL_MS, value_parser(parse_interval))]
    pub(crate) interval_ms: u64,
}

#[derive(Args)]
pub(crate) struct SnapshotArgs {
    #[command(flatten)]
    pub(crate) page: PageArgs,
}

#[derive(Args)]
pub(crate) struct PageArgs {
    /// The station page URL. The page language and the page kind are
    /// derived from it.
    #[arg(short, long)]
    pub(crate) url: String,

    /// The base URL of the station readings endpoint.
    #[arg(short, long)]
    pub(crate) endpoint: String,

    /// Specify the path where the dashboard will be generated.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output: Option<PathBuf>,

    /// The display label of the selected sensor, in the page language.
    /// Defaults to the first catalog entry when omitted.
    #[arg(short, long)]
    pub(crate) sensor: Option<String>,
}

fn parse_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

fn parse_interval(value: &str) -> Result<u64, String> {
    let interval: u64 = value
        .parse()
        .map_err(|_| format!("The `{value}` interval is not a number of milliseconds."))?;

    if interval == 0 {
        return Err(String::from("The polling interval must be positive."));
    }

    Ok(interval)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}
