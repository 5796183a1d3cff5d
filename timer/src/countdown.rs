use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::types::{TickOutcome, TimerEvent, TimerEventReceiver, TimerEventSender, TimerState};

/// Countdown advanced by an external tick source.
///
/// Never fails: stopping an idle timer or ticking a stopped one are no-ops.
#[derive(Debug)]
pub struct CountdownTimer {
    remaining: Duration,
    state: TimerState,
    subscribers: Vec<TimerEventSender>,
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self {
            remaining: Duration::ZERO,
            state: TimerState::Idle,
            subscribers: Vec::new(),
        }
    }

    /// Registers a new listener. Dropped receivers are pruned on the next send.
    pub fn subscribe(&mut self) -> TimerEventReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Arms the countdown, replacing whatever it was doing before.
    pub fn start(&mut self, duration: Duration) {
        if self.state == TimerState::Running {
            debug!(
                previous_remaining_ms = self.remaining.as_millis() as u64,
                "timer restarted while running"
            );
        }

        self.remaining = duration;
        self.state = TimerState::Running;

        info!(duration_ms = duration.as_millis() as u64, "timer started");
    }

    /// Halts the countdown. `remaining` keeps its last value.
    pub fn stop(&mut self) {
        if self.state != TimerState::Running {
            return;
        }

        self.state = TimerState::Stopped;
        debug!(
            remaining_ms = self.remaining.as_millis() as u64,
            "timer stopped"
        );
    }

    /// Advances the countdown by `elapsed`.
    ///
    /// `elapsed` is the wall or frame time since the previous tick; the
    /// caller is responsible for it being monotonic.
    pub fn tick(&mut self, elapsed: Duration) -> TickOutcome {
        if self.state != TimerState::Running {
            return TickOutcome::NotRunning;
        }

        self.remaining = self.remaining.saturating_sub(elapsed);

        if !self.remaining.is_zero() {
            return TickOutcome::Counting {
                remaining: self.remaining,
            };
        }

        self.state = TimerState::Expired;
        info!("timer expired");
        self.subscribers
            .retain(|tx| tx.send(TimerEvent::Expired).is_ok());

        TickOutcome::Expired
    }

    pub fn remaining_time(&self) -> Duration {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn state(&self) -> TimerState {
        self.state
    }
}
