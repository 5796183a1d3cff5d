//! The item pool coordinator.
//!
//! Owns `available` (pool items not yet found) and `current` (the bounded
//! working set shown to the player). Invariants after every mutating call:
//!   - `current` is a subset of `available`
//!   - `current.len() == min(max_concurrent, available.len())`
//!   - no id appears twice in either sequence
//!   - surviving items keep their relative order
//!
//! Calls are serialized by `&mut self`; a find is fully applied and its
//! notifications sent before the call returns.

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use catalog::{Catalog, Item};

use crate::error::{ConfigurationError, PoolError};
use crate::events::{PoolEvent, PoolEventReceiver, PoolEventSender};
use crate::model::{
    FoundReport, FoundStatus, InitialSnapshot, NotFoundWarning, PoolProgress, PoolSnapshot,
    PoolState,
};
use crate::policy::{FirstAvailable, PromotionPolicy};

#[derive(Debug)]
struct PoolInner {
    max_concurrent: usize,
    total_count: usize,
    available: Vec<Item>,
    current: Vec<Item>,
    completed: bool,
}

impl PoolInner {
    fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            current: self.current.clone(),
            available: self.available.clone(),
            completed: self.completed,
        }
    }

    fn is_shown(&self, id: &str) -> bool {
        self.current.iter().any(|i| i.id == id)
    }
}

pub struct ItemPool<P: PromotionPolicy = FirstAvailable> {
    policy: P,
    inner: Option<PoolInner>,
    subscribers: Vec<PoolEventSender>,
}

impl ItemPool<FirstAvailable> {
    pub fn new() -> Self {
        Self::with_policy(FirstAvailable)
    }
}

impl Default for ItemPool<FirstAvailable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PromotionPolicy> ItemPool<P> {
    pub fn with_policy(policy: P) -> Self {
        Self {
            policy,
            inner: None,
            subscribers: Vec::new(),
        }
    }

    /// Registers a new listener. Dropped receivers are pruned on the next send.
    pub fn subscribe(&mut self) -> PoolEventReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn state(&self) -> PoolState {
        match &self.inner {
            None => PoolState::Uninitialized,
            Some(inner) if inner.completed => PoolState::Completed,
            Some(_) => PoolState::Active,
        }
    }

    /// Builds the pool from `catalog` and fills the working set with its
    /// first `max_concurrent` items.
    ///
    /// Calling this on an initialized pool starts over from the new pool.
    #[instrument(
        skip(self, catalog, order),
        target = "pool",
        fields(catalog_len = catalog.len())
    )]
    pub fn initialize(
        &mut self,
        catalog: &Catalog,
        max_concurrent: usize,
        order: &[String],
    ) -> Result<InitialSnapshot, PoolError> {
        if max_concurrent == 0 {
            return Err(ConfigurationError::ZeroMaxConcurrent.into());
        }
        if catalog.is_empty() {
            return Err(ConfigurationError::EmptyCatalog.into());
        }

        let pool = catalog.enabled_items(order);
        if pool.is_empty() {
            return Err(ConfigurationError::EmptyPool.into());
        }

        if self.inner.is_some() {
            info!("re-initializing item pool; previous progress discarded");
        }

        let total_count = pool.len();
        let current: Vec<Item> = pool.iter().take(max_concurrent).cloned().collect();

        self.inner = Some(PoolInner {
            max_concurrent,
            total_count,
            available: pool,
            current: current.clone(),
            completed: false,
        });

        info!(total_count, shown = current.len(), "item pool initialized");

        Ok(InitialSnapshot {
            current,
            total_count,
        })
    }

    /// Whether `id` is in the working set, i.e. a find for it should be honored.
    pub fn is_active(&self, id: &str) -> Result<bool, PoolError> {
        let inner = self.inner.as_ref().ok_or(PoolError::NotInitialized)?;
        Ok(inner.is_shown(id))
    }

    /// Retires `id` and refills at most one slot.
    ///
    /// An id that is not available (never pooled, already found, or any id
    /// after completion) leaves the pool untouched, sends nothing, and is
    /// reported as [`FoundStatus::Ignored`].
    #[instrument(skip(self), target = "pool")]
    pub fn item_found(&mut self, id: &str) -> Result<FoundReport, PoolError> {
        let inner = self.inner.as_mut().ok_or(PoolError::NotInitialized)?;

        let Some(pos) = inner.available.iter().position(|i| i.id == id) else {
            let warning = NotFoundWarning::new(id);
            warn!(completed = inner.completed, "{warning}");
            return Ok(FoundReport {
                status: FoundStatus::Ignored(warning),
                snapshot: inner.snapshot(),
            });
        };

        inner.available.remove(pos);
        inner.current.retain(|i| i.id != id);

        let promoted = promote(&self.policy, inner);

        debug!(
            remaining = inner.available.len(),
            shown = inner.current.len(),
            promoted = promoted.as_ref().map(|i| i.id.as_str()),
            "item retired"
        );

        let completed = inner.available.is_empty();
        if completed {
            inner.completed = true;
        }

        let total_count = inner.total_count;
        let snapshot = inner.snapshot();

        self.emit(PoolEvent::CurrentItemsUpdated(snapshot.current.clone()));

        let status = if completed {
            info!(total_count, "all items found");
            self.emit(PoolEvent::AllItemsFound);
            FoundStatus::Completed
        } else {
            FoundStatus::Retired { promoted }
        };

        Ok(FoundReport { status, snapshot })
    }

    pub fn snapshot(&self) -> Result<PoolSnapshot, PoolError> {
        self.inner
            .as_ref()
            .map(PoolInner::snapshot)
            .ok_or(PoolError::NotInitialized)
    }

    pub fn current(&self) -> Result<Vec<Item>, PoolError> {
        self.inner
            .as_ref()
            .map(|inner| inner.current.clone())
            .ok_or(PoolError::NotInitialized)
    }

    pub fn progress(&self) -> Result<PoolProgress, PoolError> {
        let inner = self.inner.as_ref().ok_or(PoolError::NotInitialized)?;
        Ok(PoolProgress {
            found: inner.total_count - inner.available.len(),
            total: inner.total_count,
        })
    }

    pub fn max_concurrent(&self) -> Option<usize> {
        self.inner.as_ref().map(|inner| inner.max_concurrent)
    }

    fn emit(&mut self, event: PoolEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

/// Fills one free slot, if any, using `policy`.
///
/// A policy answer that would break the working-set invariants is discarded
/// and the slot is filled first-available instead.
fn promote<P: PromotionPolicy>(policy: &P, inner: &mut PoolInner) -> Option<Item> {
    if inner.current.len() >= inner.max_concurrent {
        return None;
    }

    let choice = policy
        .select(&inner.available, &inner.current)
        .filter(|&idx| {
            inner
                .available
                .get(idx)
                .is_some_and(|candidate| !inner.is_shown(&candidate.id))
        });

    let idx = match choice {
        Some(idx) => idx,
        None => {
            let fallback = FirstAvailable.select(&inner.available, &inner.current)?;
            warn!(
                ?policy,
                fallback_id = %inner.available[fallback].id,
                "promotion policy gave no usable item; falling back to first available"
            );
            fallback
        }
    };

    let item = inner.available[idx].clone();
    inner.current.push(item.clone());
    Some(item)
}
