//! Session orchestration.
//!
//! The pool and the timer do not know about each other; this type reacts to
//! both notification streams:
//!   - `CurrentItemsUpdated` refreshes what the player sees
//!   - `AllItemsFound` stops the countdown and wins the game
//!   - `TimerEvent::Expired` loses the game if it is still undecided
//!
//! The first decided outcome is final.

use std::time::Duration;

use tracing::{debug, info, instrument};

use catalog::{Catalog, Item, ItemId, LevelConfig};
use common::logger::TraceId;
use pool::{FoundStatus, ItemPool, PoolEvent, PoolEventReceiver, PoolProgress};
use timer::{CountdownTimer, TimerEvent, TimerEventReceiver, TimerState};

use crate::error::GameError;
use crate::model::{ClickOutcome, Outcome};

pub struct GameSession {
    trace_id: TraceId,
    level: LevelConfig,
    catalog: Catalog,
    pool: ItemPool,
    timer: CountdownTimer,
    pool_rx: PoolEventReceiver,
    timer_rx: TimerEventReceiver,

    /// Pool order captured at start, used for per-item interactivity.
    pool_order: Vec<ItemId>,
    /// What the player currently sees, as last announced by the pool.
    displayed: Vec<Item>,
    outcome: Outcome,
}

impl GameSession {
    pub fn new(level: LevelConfig) -> Result<Self, GameError> {
        let catalog = level.catalog()?;

        let mut pool = ItemPool::new();
        let pool_rx = pool.subscribe();

        let mut timer = CountdownTimer::new();
        let timer_rx = timer.subscribe();

        Ok(Self {
            trace_id: TraceId::default(),
            level,
            catalog,
            pool,
            timer,
            pool_rx,
            timer_rx,
            pool_order: Vec::new(),
            displayed: Vec::new(),
            outcome: Outcome::NotStarted,
        })
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = trace_id;
        self
    }

    /// Builds the item pool and, when the level asks for it, starts the countdown.
    ///
    /// Returns the items shown first.
    #[instrument(skip(self), target = "game", fields(trace_id = %self.trace_id))]
    pub fn start(&mut self) -> Result<Vec<Item>, GameError> {
        if self.outcome != Outcome::NotStarted {
            return Err(GameError::AlreadyStarted);
        }

        let duration = if self.level.use_timer {
            Some(self.level.timer_duration()?)
        } else {
            None
        };

        let init = self.pool.initialize(
            &self.catalog,
            self.level.max_concurrent_items,
            &self.level.item_order,
        )?;

        self.pool_order = self
            .catalog
            .enabled_items(&self.level.item_order)
            .into_iter()
            .map(|item| item.id)
            .collect();
        self.displayed = init.current.clone();

        if let Some(duration) = duration {
            self.timer.start(duration);
        }

        self.outcome = Outcome::InProgress;

        info!(
            total = init.total_count,
            shown = init.current.len(),
            use_timer = self.level.use_timer,
            "game started"
        );

        Ok(init.current)
    }

    /// Handles the player clicking item `id`.
    ///
    /// Only items in the working set count; anything else is a stale or
    /// early click and leaves the pool untouched.
    #[instrument(skip(self), target = "game", fields(trace_id = %self.trace_id))]
    pub fn click(&mut self, id: &str) -> Result<ClickOutcome, GameError> {
        match self.outcome {
            Outcome::NotStarted => return Err(GameError::NotStarted),
            Outcome::Won | Outcome::Lost => return Ok(ClickOutcome::GameOver),
            Outcome::InProgress => {}
        }

        if !self.pool.is_active(id)? {
            debug!("click on inactive item");
            return Ok(ClickOutcome::Inactive);
        }

        let report = self.pool.item_found(id)?;
        self.drain_notifications();

        let outcome = match report.status {
            FoundStatus::Retired { promoted } => ClickOutcome::Found { promoted },
            FoundStatus::Completed => ClickOutcome::Won,
            FoundStatus::Ignored(warning) => {
                debug!(%warning, "pool ignored an active click");
                ClickOutcome::Inactive
            }
        };

        Ok(outcome)
    }

    /// Advances the countdown by `elapsed` and returns the resulting outcome.
    pub fn tick(&mut self, elapsed: Duration) -> Outcome {
        if self.outcome != Outcome::InProgress {
            return self.outcome;
        }

        self.timer.tick(elapsed);
        self.drain_notifications();

        self.outcome
    }

    fn drain_notifications(&mut self) {
        while let Ok(event) = self.pool_rx.try_recv() {
            match event {
                PoolEvent::CurrentItemsUpdated(items) => {
                    debug!(count = items.len(), "current items updated");
                    self.displayed = items;
                }
                PoolEvent::AllItemsFound => self.finish(Outcome::Won),
            }
        }

        while let Ok(TimerEvent::Expired) = self.timer_rx.try_recv() {
            self.finish(Outcome::Lost);
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        if self.outcome != Outcome::InProgress {
            debug!(
                ignored = %outcome,
                decided = %self.outcome,
                "outcome already decided"
            );
            return;
        }

        if outcome == Outcome::Won {
            self.timer.stop();
        }

        self.outcome = outcome;
        info!(
            trace_id = %self.trace_id,
            %outcome,
            remaining_ms = self.timer.remaining_time().as_millis() as u64,
            "game over"
        );
    }

    /// Every pool item paired with whether it can currently be clicked.
    pub fn interactivity(&self) -> Vec<(ItemId, bool)> {
        self.pool_order
            .iter()
            .map(|id| {
                let active = self.displayed.iter().any(|item| &item.id == id);
                (id.clone(), active)
            })
            .collect()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn displayed(&self) -> &[Item] {
        &self.displayed
    }

    /// `None` when the level runs without a countdown.
    pub fn remaining_time(&self) -> Option<Duration> {
        self.level
            .use_timer
            .then(|| self.timer.remaining_time())
    }

    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn progress(&self) -> Result<PoolProgress, GameError> {
        Ok(self.pool.progress()?)
    }

    pub fn trace_id(&self) -> &TraceId {
        &self.trace_id
    }

    pub fn use_images(&self) -> bool {
        self.level.use_images_instead_of_text
    }

    pub fn level(&self) -> &LevelConfig {
        &self.level
    }
}
