use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Level file to play.
    pub level_path: PathBuf,

    /// How often the countdown is advanced. Never zero.
    pub tick_interval: Duration,

    /// JSON log lines instead of human-readable output.
    pub json_logs: bool,
}

const DEFAULT_LEVEL_PATH: &str = "levels/attic.json";
const DEFAULT_TICK_MS: u64 = 100;

impl AppConfig {
    pub fn from_env() -> Self {
        let level_path = std::env::var("LEVEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LEVEL_PATH));

        let tick_ms = std::env::var("TICK_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TICK_MS);

        let json_logs = std::env::var("APP_ENV").unwrap_or_default() == "production";

        Self {
            level_path,
            tick_interval: tick_interval(tick_ms),
            json_logs,
        }
    }

    /// Command-line flags win over the environment.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(path) = &cli.level {
            self.level_path = path.clone();
        }
        if let Some(ms) = cli.tick_ms {
            self.tick_interval = tick_interval(ms);
        }
        self.json_logs |= cli.json_logs;
        self
    }
}

// tokio::time::interval panics on a zero period
fn tick_interval(ms: u64) -> Duration {
    Duration::from_millis(ms.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn base() -> AppConfig {
        AppConfig {
            level_path: PathBuf::from(DEFAULT_LEVEL_PATH),
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            json_logs: false,
        }
    }

    #[test]
    fn cli_flags_override_environment() {
        let cli = Cli::parse_from([
            "find-the-object",
            "--level",
            "levels/kitchen.json",
            "--tick-ms",
            "250",
            "--json-logs",
        ]);

        let cfg = base().with_overrides(&cli);

        assert_eq!(cfg.level_path, PathBuf::from("levels/kitchen.json"));
        assert_eq!(cfg.tick_interval, Duration::from_millis(250));
        assert!(cfg.json_logs);
    }

    #[test]
    fn absent_flags_keep_environment_values() {
        let cli = Cli::parse_from(["find-the-object"]);
        let cfg = base().with_overrides(&cli);

        assert_eq!(cfg.level_path, PathBuf::from(DEFAULT_LEVEL_PATH));
        assert_eq!(cfg.tick_interval, Duration::from_millis(DEFAULT_TICK_MS));
        assert!(!cfg.json_logs);
    }

    #[test]
    fn zero_tick_is_raised_to_one_millisecond() {
        let cli = Cli::parse_from(["find-the-object", "--tick-ms", "0"]);
        let cfg = base().with_overrides(&cli);

        assert_eq!(cfg.tick_interval, Duration::from_millis(1));
    }
}
