//! Structural checks for forests arriving from outside the store.

use std::collections::HashSet;

use tracing::instrument;

use crate::domain::entities::OutlineNode;
use crate::domain::error::{DomainError, DomainResult};

/// Check id uniqueness and level consistency.
///
/// Reports the first violation in pre-order. Nothing is repaired.
#[instrument(level = "debug", skip(forest))]
pub fn validate_forest(forest: &[OutlineNode]) -> DomainResult<()> {
    let mut seen = HashSet::new();
    check_list(forest, 1, &mut seen)
}

fn check_list<'a>(
    list: &'a [OutlineNode],
    expected: u32,
    seen: &mut HashSet<&'a str>,
) -> DomainResult<()> {
    for node in list {
        if !seen.insert(node.id.as_str()) {
            return Err(DomainError::DuplicateId(node.id.clone()));
        }
        if node.level != expected {
            return Err(DomainError::LevelMismatch {
                id: node.id.clone(),
                expected,
                actual: node.level,
            });
        }
        check_list(&node.children, expected + 1, seen)?;
    }
    Ok(())
}
