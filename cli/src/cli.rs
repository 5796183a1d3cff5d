use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(name = "find-the-object", version)]
pub struct Cli {
    /// Level file (JSON). Overrides LEVEL_PATH.
    #[clap(long)]
    pub level: Option<PathBuf>,

    /// Tick cadence in milliseconds. Overrides TICK_MS.
    #[clap(long)]
    pub tick_ms: Option<u64>,

    /// Emit logs as JSON lines.
    #[clap(long)]
    pub json_logs: bool,
}
