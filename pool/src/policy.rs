//! Promotion policy: which available item fills a freed slot.

use std::fmt;

use catalog::Item;

/// Chooses the next item to present once a slot in the working set frees up.
///
/// Returns an index into `available`. The coordinator only accepts an index
/// that is in range and names an item not already in `current`.
pub trait PromotionPolicy: fmt::Debug + Send + Sync {
    fn select(&self, available: &[Item], current: &[Item]) -> Option<usize>;
}

/// Earliest available item, by pool order, that is not already shown.
///
/// Deterministic for a given catalog order, which keeps level design predictable.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl PromotionPolicy for FirstAvailable {
    fn select(&self, available: &[Item], current: &[Item]) -> Option<usize> {
        available
            .iter()
            .position(|candidate| !current.iter().any(|shown| shown.id == candidate.id))
    }
}
