//! Property-based tests for the hierarchy sorter.
//!
//! These verify invariants that should hold for all well-formed inputs:
//! - Every entity is emitted strictly after its parent
//! - The order does not depend on the arrival order of the input
//! - Re-sorting the sorter's own output changes nothing

use metridex::core::{Level, MetricEntity};
use metridex::hierarchy::sort_entities;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

fn entity(id: String, parent: Option<String>, level: Level, hint: u16) -> MetricEntity {
    MetricEntity {
        id,
        parent,
        level,
        display_name: "name".to_string(),
        order_hint: hint.to_string(),
        metrics: BTreeMap::new(),
        resolved_path: None,
    }
}

/// Trees with node 0 as the only aggregate root; every other node hangs
/// off an earlier one, so the input is always a well-formed forest.
fn arbitrary_forest() -> impl Strategy<Value = Vec<MetricEntity>> {
    (2usize..40).prop_flat_map(|size| {
        let parents: Vec<_> = (1..size).map(|i| 0..i).collect();
        let hints = proptest::collection::vec(any::<u16>(), size);
        (parents, hints).prop_map(|(parents, hints)| {
            let mut entities = vec![entity("N000".to_string(), None, Level::Aggregate, hints[0])];
            for (offset, parent) in parents.into_iter().enumerate() {
                let index = offset + 1;
                entities.push(entity(
                    format!("N{index:03}"),
                    Some(format!("N{parent:03}")),
                    if index % 2 == 0 {
                        Level::Class
                    } else {
                        Level::Package
                    },
                    hints[index],
                ));
            }
            entities
        })
    })
}

proptest! {
    #[test]
    fn every_entity_follows_its_parent(entities in arbitrary_forest()) {
        let ordered = sort_entities(entities).unwrap();
        let position: HashMap<&str, usize> = ordered
            .iter()
            .enumerate()
            .map(|(index, e)| (e.id.as_str(), index))
            .collect();
        for entity in &ordered {
            if let Some(parent) = &entity.parent {
                prop_assert!(position[parent.as_str()] < position[entity.id.as_str()]);
            }
        }
    }

    #[test]
    fn ordering_ignores_arrival_order(
        entities in arbitrary_forest(),
        seed in any::<u64>(),
    ) {
        let ordered = sort_entities(entities.clone()).unwrap();

        let mut shuffled = entities;
        let mut state = seed | 1;
        for i in (1..shuffled.len()).rev() {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let j = (state >> 33) as usize % (i + 1);
            shuffled.swap(i, j);
        }

        let reordered = sort_entities(shuffled).unwrap();
        prop_assert_eq!(ordered, reordered);
    }

    #[test]
    fn sorter_is_idempotent(entities in arbitrary_forest()) {
        let once = sort_entities(entities).unwrap();
        let twice = sort_entities(once.clone()).unwrap();
        prop_assert_eq!(once, twice);
    }
}
