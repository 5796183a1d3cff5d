//! Shared types used by the countdown.

use std::fmt;
use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// Lifecycle of a countdown.
///
/// `Idle -> Running -> Expired | Stopped`; `start` re-enters `Running` from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Expired,
    Stopped,
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimerState::Idle => "Idle",
            TimerState::Running => "Running",
            TimerState::Expired => "Expired",
            TimerState::Stopped => "Stopped",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Remaining time reached zero. Sent once per `start`.
    Expired,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running; nothing changed.
    NotRunning,
    /// Still counting down.
    Counting { remaining: Duration },
    /// This tick expired the timer.
    Expired,
}

impl TickOutcome {
    pub fn is_expired(&self) -> bool {
        matches!(self, TickOutcome::Expired)
    }
}

pub type TimerEventSender = UnboundedSender<TimerEvent>;
pub type TimerEventReceiver = UnboundedReceiver<TimerEvent>;
