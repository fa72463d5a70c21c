//! Parent-before-child ordering of the merged entity set.
//!
//! The tool emits entities across three report files whose cross-references
//! use opaque identifiers, and persistence needs every parent stored before
//! its children. The merged set is replayed as a forest traversal: an arena
//! indexed by identifier, a children adjacency index, and a ready queue
//! keyed by (level rank, order hint, identifier). Each entity enters and
//! leaves the pending set exactly once, which keeps the ordering linear in
//! entities plus edges on arbitrarily deep or wide hierarchies.

use crate::core::errors::{Error, Result};
use crate::core::MetricEntity;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Order `entities` so that every entity appears strictly after its parent.
///
/// Roots come first, aggregate-level roots ahead of the synthetic package
/// root whatever their order hints say. Among co-ready entities the order
/// hint decides (ascending, read as an integer), identifiers breaking ties.
/// The result is fully deterministic for a given input set.
pub fn sort_entities(entities: Vec<MetricEntity>) -> Result<Vec<MetricEntity>> {
    let index: HashMap<String, usize> = entities
        .iter()
        .enumerate()
        .map(|(position, entity)| (entity.id.clone(), position))
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); entities.len()];
    let mut roots = Vec::new();
    for (position, entity) in entities.iter().enumerate() {
        match &entity.parent {
            None => roots.push(position),
            Some(parent) => match index.get(parent) {
                Some(&parent_position) => children[parent_position].push(position),
                None => {
                    return Err(Error::DanglingParent {
                        id: entity.id.clone(),
                        level: entity.level,
                        parent: parent.clone(),
                    })
                }
            },
        }
    }

    let mut keys: Vec<(u8, i64, String)> = Vec::with_capacity(entities.len());
    for entity in &entities {
        keys.push((
            entity.level.emit_rank(),
            parse_order_hint(entity)?,
            entity.id.clone(),
        ));
    }

    let total = entities.len();
    let mut slots: Vec<Option<MetricEntity>> = entities.into_iter().map(Some).collect();

    let mut ready: BinaryHeap<Reverse<((u8, i64, String), usize)>> = BinaryHeap::new();
    for position in roots {
        ready.push(Reverse((keys[position].clone(), position)));
    }

    let mut ordered = Vec::with_capacity(total);
    while let Some(Reverse((_, position))) = ready.pop() {
        for &child in &children[position] {
            ready.push(Reverse((keys[child].clone(), child)));
        }
        if let Some(entity) = slots[position].take() {
            ordered.push(entity);
        }
    }

    if ordered.len() != total {
        // Forest invariant violated: something hangs below a cycle.
        if let Some(unreached) = slots.iter().flatten().min_by(|a, b| a.id.cmp(&b.id)) {
            return Err(Error::UnreachableEntity {
                id: unreached.id.clone(),
                level: unreached.level,
            });
        }
    }

    Ok(ordered)
}

fn parse_order_hint(entity: &MetricEntity) -> Result<i64> {
    entity
        .order_hint
        .parse()
        .map_err(|_| Error::MalformedOrderHint {
            id: entity.id.clone(),
            value: entity.order_hint.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;
    use std::collections::BTreeMap;

    fn entity(id: &str, parent: Option<&str>, level: Level, hint: &str) -> MetricEntity {
        MetricEntity {
            id: id.to_string(),
            parent: parent.map(str::to_string),
            level,
            display_name: id.to_string(),
            order_hint: hint.to_string(),
            metrics: BTreeMap::new(),
            resolved_path: None,
        }
    }

    fn ids(entities: &[MetricEntity]) -> Vec<&str> {
        entities.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn synthetic_roots_come_first_in_fixed_order() {
        let input = vec![
            entity("L100", None, Level::Package, "1"),
            entity("L102", None, Level::Aggregate, "0"),
        ];
        let ordered = sort_entities(input).unwrap();
        assert_eq!(ids(&ordered), ["L102", "L100"]);
    }

    #[test]
    fn aggregate_roots_precede_package_root_whatever_the_hints_say() {
        let input = vec![
            entity("L100", None, Level::Package, "0"),
            entity("L102", None, Level::Aggregate, "99"),
        ];
        let ordered = sort_entities(input).unwrap();
        assert_eq!(ids(&ordered), ["L102", "L100"]);
    }

    #[test]
    fn package_root_parented_on_the_component_root_still_sorts_second() {
        let input = vec![
            entity("L205", Some("L100"), Level::Package, "100"),
            entity("L100", Some("L102"), Level::Package, "7"),
            entity("L102", None, Level::Aggregate, "0"),
        ];
        let ordered = sort_entities(input).unwrap();
        assert_eq!(ids(&ordered), ["L102", "L100", "L205"]);
    }

    #[test]
    fn children_follow_their_parent() {
        // The class under package 107 arrives before that package.
        let input = vec![
            entity("106", Some("107"), Level::Class, "107"),
            entity("103", None, Level::Package, "1"),
            entity("104", Some("103"), Level::Package, "103"),
            entity("105", Some("104"), Level::Class, "104"),
            entity("107", Some("104"), Level::Package, "104"),
        ];
        let ordered = sort_entities(input).unwrap();
        let order = ids(&ordered);
        let position = |id: &str| order.iter().position(|x| *x == id).unwrap();
        assert!(position("103") < position("104"));
        assert!(position("104") < position("105"));
        assert!(position("104") < position("107"));
        assert!(position("107") < position("106"));
    }

    #[test]
    fn equal_hints_break_ties_by_identifier() {
        let input = vec![
            entity("L9", None, Level::Aggregate, "0"),
            entity("L100", None, Level::Package, "1"),
            entity("L649", Some("L100"), Level::Package, "100"),
            entity("L104", Some("L100"), Level::Package, "100"),
        ];
        let ordered = sort_entities(input).unwrap();
        assert_eq!(ids(&ordered), ["L9", "L100", "L104", "L649"]);
    }

    #[test]
    fn order_hints_never_override_the_parent_relation() {
        // C carries a smaller hint than B but must still wait for it.
        let input = vec![
            entity("A", None, Level::Package, "1"),
            entity("B", Some("A"), Level::Package, "50"),
            entity("C", Some("B"), Level::Class, "2"),
        ];
        let ordered = sort_entities(input).unwrap();
        assert_eq!(ids(&ordered), ["A", "B", "C"]);
    }

    #[test]
    fn unknown_parent_is_a_fatal_inconsistency() {
        let input = vec![
            entity("A", None, Level::Package, "1"),
            entity("B", Some("missing"), Level::Class, "7"),
        ];
        let err = sort_entities(input).unwrap_err();
        assert!(matches!(
            err,
            Error::DanglingParent { ref id, ref parent, .. }
                if id == "B" && parent == "missing"
        ));
    }

    #[test]
    fn cycles_are_reported_not_looped_over() {
        let input = vec![
            entity("A", None, Level::Package, "1"),
            entity("B", Some("C"), Level::Package, "2"),
            entity("C", Some("B"), Level::Package, "3"),
        ];
        let err = sort_entities(input).unwrap_err();
        assert!(matches!(err, Error::UnreachableEntity { .. }));
    }

    #[test]
    fn non_numeric_order_hint_is_fatal() {
        let input = vec![entity("A", None, Level::Package, "first")];
        let err = sort_entities(input).unwrap_err();
        assert!(matches!(err, Error::MalformedOrderHint { ref id, .. } if id == "A"));
    }

    #[test]
    fn sorting_its_own_output_is_a_fixpoint() {
        let input = vec![
            entity("L102", None, Level::Aggregate, "0"),
            entity("L100", None, Level::Package, "1"),
            entity("L104", Some("L100"), Level::Package, "100"),
            entity("L124", Some("L104"), Level::Class, "104"),
        ];
        let once = sort_entities(input).unwrap();
        let twice = sort_entities(once.clone()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(sort_entities(Vec::new()).unwrap().is_empty());
    }
}
