//! Read-only item catalog and derivation of the presentation pool.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::CatalogError;
use crate::models::Item;

/// Ordered, immutable list of items for a level.
///
/// Ids are unique; construction fails otherwise.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(items.len());

        for (idx, item) in items.iter().enumerate() {
            if by_id.insert(item.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }

        Ok(Self { items, by_id })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.by_id.get(id).map(|&idx| &self.items[idx])
    }

    /// Derives the pool: the enabled items in presentation order.
    ///
    /// With a non-empty `order`, the pool follows that list; ids that are
    /// unknown, disabled or repeated are skipped. With an empty `order`, the
    /// pool is catalog order filtered by `enabled`.
    pub fn enabled_items(&self, order: &[String]) -> Vec<Item> {
        if order.is_empty() {
            return self.items.iter().filter(|i| i.enabled).cloned().collect();
        }

        let mut seen = HashSet::with_capacity(order.len());
        let mut pool = Vec::with_capacity(order.len());

        for id in order {
            match self.get(id) {
                Some(item) if item.enabled => {
                    if seen.insert(id.as_str()) {
                        pool.push(item.clone());
                    }
                }
                Some(_) => debug!(item_id = %id, "order entry skipped: item disabled"),
                None => debug!(item_id = %id, "order entry skipped: unknown id"),
            }
        }

        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            Item::new("A", "Apple"),
            Item::new("B", "Bell").disabled(),
            Item::new("C", "Candle"),
            Item::new("D", "Drum"),
        ])
        .unwrap()
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![Item::new("A", "Apple"), Item::new("A", "Anchor")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "A"));
    }

    #[test]
    fn without_order_pool_is_catalog_order_filtered_by_enabled() {
        let pool = sample().enabled_items(&[]);
        assert_eq!(ids(&pool), ["A", "C", "D"]);
    }

    #[test]
    fn explicit_order_is_followed() {
        let order = vec!["D".to_string(), "A".to_string(), "C".to_string()];
        let pool = sample().enabled_items(&order);
        assert_eq!(ids(&pool), ["D", "A", "C"]);
    }

    #[test]
    fn explicit_order_skips_unknown_and_disabled_ids() {
        let order = vec![
            "Z".to_string(),
            "B".to_string(),
            "C".to_string(),
            "A".to_string(),
        ];
        let pool = sample().enabled_items(&order);
        assert_eq!(ids(&pool), ["C", "A"]);
    }

    #[test]
    fn explicit_order_does_not_append_unlisted_items() {
        let order = vec!["C".to_string()];
        let pool = sample().enabled_items(&order);
        assert_eq!(ids(&pool), ["C"]);
    }

    #[test]
    fn repeated_order_entries_appear_once() {
        let order = vec!["A".to_string(), "C".to_string(), "A".to_string()];
        let pool = sample().enabled_items(&order);
        assert_eq!(ids(&pool), ["A", "C"]);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = sample();
        assert_eq!(catalog.get("C").map(|i| i.display_name.as_str()), Some("Candle"));
        assert!(catalog.get("Z").is_none());
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
    }
}
