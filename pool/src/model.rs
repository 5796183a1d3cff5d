use std::fmt;

use catalog::{Item, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolState {
    Uninitialized,
    Active,
    Completed,
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PoolState::Uninitialized => "Uninitialized",
            PoolState::Active => "Active",
            PoolState::Completed => "Completed",
        };
        f.write_str(s)
    }
}

/// Owned copy of the coordinator's sequences at one point in time.
///
/// Mutating a snapshot never affects the coordinator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolSnapshot {
    /// Items presented to the player, in presentation order.
    pub current: Vec<Item>,
    /// Items not yet found, in pool order.
    pub available: Vec<Item>,
    pub completed: bool,
}

/// What `initialize` hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialSnapshot {
    pub current: Vec<Item>,
    /// Size of the pool, i.e. how many finds complete the level.
    pub total_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolProgress {
    pub found: usize,
    pub total: usize,
}

impl PoolProgress {
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.found)
    }
}

/// A found signal for an id that is not (or no longer) available.
///
/// Not an error: duplicate clicks and late callbacks are expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundWarning {
    pub item_id: ItemId,
}

impl NotFoundWarning {
    pub fn new(item_id: impl Into<ItemId>) -> Self {
        Self {
            item_id: item_id.into(),
        }
    }
}

impl fmt::Display for NotFoundWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item {} not found in available items", self.item_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoundStatus {
    /// The item was retired; `promoted` is the replacement, if any slot was refilled.
    Retired { promoted: Option<Item> },
    /// The item was the last one available.
    Completed,
    /// Nothing changed.
    Ignored(NotFoundWarning),
}

/// Result of one `item_found` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundReport {
    pub status: FoundStatus,
    pub snapshot: PoolSnapshot,
}

impl FoundReport {
    pub fn warning(&self) -> Option<&NotFoundWarning> {
        match &self.status {
            FoundStatus::Ignored(w) => Some(w),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.snapshot.completed
    }
}
