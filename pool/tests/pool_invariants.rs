use std::collections::HashSet;

use catalog::{Catalog, Item};
use pool::{ItemPool, PoolEvent, PoolSnapshot};
use proptest::prelude::*;

fn build_catalog(enabled: &[bool]) -> Catalog {
    Catalog::new(
        enabled
            .iter()
            .enumerate()
            .map(|(i, on)| {
                let item = Item::new(format!("item-{i}"), format!("Item {i}"));
                if *on { item } else { item.disabled() }
            })
            .collect(),
    )
    .expect("generated ids are unique")
}

fn position_in(pool: &[Item], id: &str) -> usize {
    pool.iter()
        .position(|i| i.id == id)
        .expect("item belongs to the pool")
}

/// Working-set invariants against the pool order the coordinator was built from.
fn check_invariants(snap: &PoolSnapshot, pool: &[Item], max_concurrent: usize) {
    // current is a subset of available
    for item in &snap.current {
        assert!(
            snap.available.iter().any(|a| a.id == item.id),
            "{} shown but not available",
            item.id
        );
    }

    // working set is as full as it can be
    assert_eq!(
        snap.current.len(),
        max_concurrent.min(snap.available.len()),
        "working set size"
    );

    // no duplicates
    let unique: HashSet<_> = snap.available.iter().map(|i| &i.id).collect();
    assert_eq!(unique.len(), snap.available.len(), "duplicate in available");
    let unique: HashSet<_> = snap.current.iter().map(|i| &i.id).collect();
    assert_eq!(unique.len(), snap.current.len(), "duplicate in current");

    // available keeps pool order
    let positions: Vec<_> = snap.available.iter().map(|i| position_in(pool, &i.id)).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "available out of order");

    // the working set is always the earliest surviving items
    let mut shown: Vec<_> = snap.current.iter().map(|i| position_in(pool, &i.id)).collect();
    shown.sort_unstable();
    let expected: Vec<_> = snap
        .available
        .iter()
        .take(snap.current.len())
        .map(|i| position_in(pool, &i.id))
        .collect();
    assert_eq!(shown, expected, "working set is not the earliest survivors");

    assert_eq!(snap.completed, snap.available.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn initialize_shows_pool_prefix(
        enabled in prop::collection::vec(prop::bool::weighted(0.8), 1..20),
        max_concurrent in 1..8usize,
    ) {
        let catalog = build_catalog(&enabled);
        let pool_order = catalog.enabled_items(&[]);
        prop_assume!(!pool_order.is_empty());

        let mut pool = ItemPool::new();
        let init = pool.initialize(&catalog, max_concurrent, &[]).unwrap();

        prop_assert_eq!(init.total_count, pool_order.len());
        prop_assert_eq!(init.current.len(), max_concurrent.min(pool_order.len()));
        prop_assert_eq!(&init.current[..], &pool_order[..init.current.len()]);
    }

    #[test]
    fn invariants_hold_for_any_find_sequence(
        enabled in prop::collection::vec(prop::bool::weighted(0.8), 1..16),
        max_concurrent in 1..6usize,
        // indices into the catalog; out-of-range values become unknown ids
        finds in prop::collection::vec(0..24usize, 0..40),
    ) {
        let catalog = build_catalog(&enabled);
        let pool_order = catalog.enabled_items(&[]);
        prop_assume!(!pool_order.is_empty());

        let mut pool = ItemPool::new();
        let mut rx = pool.subscribe();
        pool.initialize(&catalog, max_concurrent, &[]).unwrap();
        check_invariants(&pool.snapshot().unwrap(), &pool_order, max_concurrent);

        let mut all_found = 0;

        for idx in finds {
            let id = format!("item-{idx}");
            let before = pool.snapshot().unwrap();
            let was_available = before.available.iter().any(|i| i.id == id);

            let report = pool.item_found(&id).unwrap();
            check_invariants(&report.snapshot, &pool_order, max_concurrent);
            prop_assert_eq!(&report.snapshot, &pool.snapshot().unwrap());

            let mut events = Vec::new();
            while let Ok(ev) = rx.try_recv() {
                events.push(ev);
            }

            if was_available {
                prop_assert!(report.warning().is_none());
                prop_assert_eq!(report.snapshot.available.len(), before.available.len() - 1);
                let updated = PoolEvent::CurrentItemsUpdated(report.snapshot.current.clone());
                prop_assert_eq!(events.first(), Some(&updated));
            } else {
                prop_assert!(report.warning().is_some());
                prop_assert_eq!(&report.snapshot, &before);
                prop_assert!(events.is_empty());
            }

            all_found += events.iter().filter(|e| **e == PoolEvent::AllItemsFound).count();
        }

        let completed = pool.snapshot().unwrap().completed;
        prop_assert_eq!(all_found, usize::from(completed));
    }

    #[test]
    fn second_find_of_same_id_is_a_no_op(
        len in 1..12usize,
        max_concurrent in 1..5usize,
        pick in 0..12usize,
    ) {
        let catalog = build_catalog(&vec![true; len]);
        let id = format!("item-{}", pick % len);

        let mut pool = ItemPool::new();
        pool.initialize(&catalog, max_concurrent, &[]).unwrap();

        let first = pool.item_found(&id).unwrap();
        let second = pool.item_found(&id).unwrap();

        prop_assert!(first.warning().is_none());
        prop_assert!(second.warning().is_some());
        prop_assert_eq!(first.snapshot, second.snapshot);
    }

    #[test]
    fn finding_everything_completes_exactly_once(
        len in 1..12usize,
        max_concurrent in 1..5usize,
        seed in any::<u64>(),
    ) {
        let catalog = build_catalog(&vec![true; len]);

        // deterministic shuffle of the find order from the generated seed
        let mut ids: Vec<String> = (0..len).map(|i| format!("item-{i}")).collect();
        let mut seed = seed;
        for i in (1..ids.len()).rev() {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let j = (seed >> 33) as usize % (i + 1);
            ids.swap(i, j);
        }

        let mut pool = ItemPool::new();
        let mut rx = pool.subscribe();
        pool.initialize(&catalog, max_concurrent, &[]).unwrap();

        for id in ids.iter().chain(ids.iter()) {
            pool.item_found(id).unwrap();
        }

        let mut completions = 0;
        while let Ok(ev) = rx.try_recv() {
            if ev == PoolEvent::AllItemsFound {
                completions += 1;
            }
        }

        let snap = pool.snapshot().unwrap();
        prop_assert!(snap.completed);
        prop_assert!(snap.available.is_empty());
        prop_assert!(snap.current.is_empty());
        prop_assert_eq!(completions, 1);
    }
}
