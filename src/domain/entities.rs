//! Domain entities: outline nodes, forests and generation requests

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};

/// One section heading in a guide outline.
///
/// `level` is a cached depth: 1 for forest roots, parent level + 1 below that.
/// Expand/collapse state is a presentation concern and never lives here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    pub id: String,
    pub title: String,
    pub level: u32,
    #[serde(default)]
    pub children: Vec<OutlineNode>,
}

/// Ordered top-level sections, not wrapped in a root node.
pub type Forest = Vec<OutlineNode>;

impl OutlineNode {
    pub fn new(id: impl Into<String>, title: impl Into<String>, level: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            level,
            children: Vec::new(),
        }
    }

    /// Builder-style helper, mostly for fixtures.
    pub fn with_children(mut self, children: Vec<OutlineNode>) -> Self {
        self.children = children;
        self
    }

    /// Number of nodes in this subtree, including self.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(|c| c.subtree_len()).sum::<usize>()
    }
}

/// Pre-order walk over every node of a forest.
pub fn walk<'a>(forest: &'a [OutlineNode], visit: &mut impl FnMut(&'a OutlineNode)) {
    for node in forest {
        visit(node);
        walk(&node.children, visit);
    }
}

/// All ids of a forest in pre-order.
pub fn collect_ids(forest: &[OutlineNode]) -> Vec<String> {
    let mut ids = Vec::new();
    walk(forest, &mut |node| ids.push(node.id.clone()));
    ids
}

/// Outline document as exchanged with the outline provider and stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineDocument {
    pub location: String,
    pub outline: Forest,
}

/// Request for an initial outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineRequest {
    pub location: String,
    #[serde(default)]
    pub days: Option<u32>,
    #[serde(default)]
    pub budget: Option<String>,
}

impl OutlineRequest {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            days: None,
            budget: None,
        }
    }

    /// Reject blank locations and zero-day trips.
    pub fn validate(&self) -> DomainResult<()> {
        if self.location.trim().is_empty() {
            return Err(DomainError::InvalidRequest(
                "location must not be empty".into(),
            ));
        }
        if self.days == Some(0) {
            return Err(DomainError::InvalidRequest(
                "trip length must be at least one day".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_node_without_children_field_when_deserializing_then_defaults_to_empty() {
        let node: OutlineNode =
            serde_json::from_str(r#"{"id":"1","title":"Food","level":1}"#).unwrap();
        assert!(node.children.is_empty());
        assert_eq!(node.level, 1);
    }

    #[test]
    fn given_nested_forest_when_collecting_ids_then_pre_order() {
        let forest = vec![
            OutlineNode::new("1", "a", 1).with_children(vec![OutlineNode::new("1-1", "b", 2)]),
            OutlineNode::new("2", "c", 1),
        ];
        assert_eq!(collect_ids(&forest), vec!["1", "1-1", "2"]);
        assert_eq!(forest[0].subtree_len(), 2);
    }

    #[test]
    fn given_zero_days_when_validating_request_then_rejects() {
        let mut request = OutlineRequest::new("Kyoto");
        request.days = Some(0);
        assert!(request.validate().is_err());
        request.days = Some(3);
        assert!(request.validate().is_ok());
        assert!(OutlineRequest::new("   ").validate().is_err());
    }
}
