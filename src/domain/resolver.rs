//! Node address resolution without parent pointers.
//!
//! Nodes own their children and hold no back-reference, so every lookup is a
//! depth-first search from the forest roots. Edits rebuild the path from the
//! root to the match and clone untouched siblings as they are.

use tracing::{instrument, trace};

use crate::domain::entities::{Forest, OutlineNode};

/// Apply `transform` to the sibling list that directly contains `target_id`.
///
/// At each recursion level the current list is checked first; on a match the
/// list and the index of the matching element are handed to `transform` and
/// the search stops. Otherwise every node is rebuilt with its (possibly
/// transformed) children. First match wins.
///
/// Returns the rebuilt forest and whether `target_id` was found. When it was
/// not found the result equals the input.
#[instrument(level = "trace", skip(forest, transform))]
pub fn find_and_transform_sibling_list<F>(
    forest: &[OutlineNode],
    target_id: &str,
    transform: F,
) -> (Forest, bool)
where
    F: FnOnce(Forest, usize) -> Forest,
{
    let mut pending = Some(transform);
    let rebuilt = transform_list(forest, target_id, &mut pending);
    let found = pending.is_none();
    trace!(found, "sibling list resolution finished");
    (rebuilt, found)
}

fn transform_list<F>(list: &[OutlineNode], target_id: &str, pending: &mut Option<F>) -> Forest
where
    F: FnOnce(Forest, usize) -> Forest,
{
    if pending.is_none() {
        return list.to_vec();
    }
    if let Some(index) = list.iter().position(|node| node.id == target_id) {
        if let Some(transform) = pending.take() {
            return transform(list.to_vec(), index);
        }
    }
    list.iter()
        .map(|node| {
            if pending.is_none() {
                return node.clone();
            }
            OutlineNode {
                id: node.id.clone(),
                title: node.title.clone(),
                level: node.level,
                children: transform_list(&node.children, target_id, pending),
            }
        })
        .collect()
}

/// Replace the first node whose id is `target_id` with `f(node)`.
#[instrument(level = "trace", skip(forest, f))]
pub fn transform_node<F>(forest: &[OutlineNode], target_id: &str, f: F) -> (Forest, bool)
where
    F: FnOnce(&OutlineNode) -> OutlineNode,
{
    find_and_transform_sibling_list(forest, target_id, |mut list, index| {
        let replaced = f(&list[index]);
        list[index] = replaced;
        list
    })
}

/// First node with the given id, depth-first in sibling order.
pub fn find_node<'a>(forest: &'a [OutlineNode], target_id: &str) -> Option<&'a OutlineNode> {
    for node in forest {
        if node.id == target_id {
            return Some(node);
        }
    }
    forest
        .iter()
        .find_map(|node| find_node(&node.children, target_id))
}

pub fn contains(forest: &[OutlineNode], target_id: &str) -> bool {
    find_node(forest, target_id).is_some()
}
