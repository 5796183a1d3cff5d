mod cli;
mod config;
mod render;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{Instrument, field, info};

use catalog::LevelConfig;
use common::logger::{child_span, init_logger, session_span};
use game::{ClickOutcome, GameSession, Outcome};

use crate::cli::Cli;
use crate::config::AppConfig;

/// Drives one session: countdown on a fixed cadence, one item id per stdin line.
async fn play(mut session: GameSession, cfg: AppConfig) -> anyhow::Result<Outcome> {
    let shown = session.start().context("starting game session")?;
    render::items(&shown, session.use_images());

    let mut ticker = tokio::time::interval(cfg.tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_tick = Instant::now();
    let mut last_whole_secs = session.remaining_time().map(|d| d.as_secs());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = Instant::now();
                session.tick(now.duration_since(last_tick));
                last_tick = now;

                // announce whole seconds only
                if let Some(remaining) = session.remaining_time() {
                    let secs = remaining.as_secs();
                    if last_whole_secs != Some(secs) {
                        last_whole_secs = Some(secs);
                        render::countdown(remaining);
                    }
                }
            }

            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    info!("stdin closed; ending session");
                    break;
                };

                let id = line.trim();
                if id.is_empty() {
                    continue;
                }

                let outcome = session.click(id)?;
                render::click(id, &outcome);
                if matches!(outcome, ClickOutcome::Found { .. }) {
                    render::items(session.displayed(), session.use_images());
                }
            }

            res = &mut shutdown => {
                res.context("listening for ctrl-c")?;
                info!("Shutdown signal received");
                break;
            }
        }

        if session.outcome().is_over() {
            break;
        }
    }

    Ok(session.outcome())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = AppConfig::from_env().with_overrides(&cli);

    init_logger("find-the-object", cfg.json_logs);

    let level = {
        let _span = child_span("load_level").entered();
        LevelConfig::load(&cfg.level_path)
            .with_context(|| format!("loading level {}", cfg.level_path.display()))?
    };

    let session = GameSession::new(level).context("building game session")?;

    let span = session_span("play", session.trace_id());
    span.record("level", field::display(cfg.level_path.display()));

    let outcome = play(session, cfg).instrument(span).await?;
    render::outcome(outcome);

    Ok(())
}
