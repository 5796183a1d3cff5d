//! Outbound notifications of the coordinator.

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use catalog::Item;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolEvent {
    /// The working set changed; carries an owned copy of it.
    CurrentItemsUpdated(Vec<Item>),

    /// The last available item was found. Sent once per pool lifetime,
    /// always after the `CurrentItemsUpdated` of the same find.
    AllItemsFound,
}

pub type PoolEventSender = UnboundedSender<PoolEvent>;
pub type PoolEventReceiver = UnboundedReceiver<PoolEvent>;
