//! One hidden-object play session: the item pool and the countdown wired
//! together, with the win / lose outcome derived from their notifications.

pub mod error;
pub mod model;
pub mod session;

pub use error::GameError;
pub use model::{ClickOutcome, Outcome};
pub use session::GameSession;
