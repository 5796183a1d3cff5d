//! Tick-driven countdown used to bound a session.

pub mod countdown;
pub mod types;

pub use countdown::CountdownTimer;
pub use types::{TickOutcome, TimerEvent, TimerEventReceiver, TimerEventSender, TimerState};
