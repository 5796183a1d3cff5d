//! Bounded working-set rotation over an ordered item catalog.
//!
//! The coordinator shows at most `max_concurrent` items at a time. Finding an
//! item retires it and promotes the next one chosen by a [`PromotionPolicy`],
//! until every item of the pool has been found.

pub mod coordinator;
pub mod error;
pub mod events;
pub mod model;
pub mod policy;

pub use coordinator::ItemPool;
pub use error::{ConfigurationError, PoolError};
pub use events::{PoolEvent, PoolEventReceiver, PoolEventSender};
pub use model::{
    FoundReport, FoundStatus, InitialSnapshot, NotFoundWarning, PoolProgress, PoolSnapshot,
    PoolState,
};
pub use policy::{FirstAvailable, PromotionPolicy};
