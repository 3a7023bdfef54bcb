use std::collections::HashMap;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::entities::OutlineNode;

/// Node payload copied out of the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionData {
    pub id: String,
    pub title: String,
    pub level: u32,
}

impl fmt::Display for SectionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id)
    }
}

/// Arena slot with explicit parent link.
#[derive(Debug)]
pub struct IndexNode {
    pub data: SectionData,
    /// Index of parent node in the arena, None for top-level sections
    pub parent: Option<Index>,
    pub children: Vec<Index>,
}

/// Read-only arena view of a forest with parent links.
///
/// Built from a forest snapshot for lookups the pointer-free tree cannot
/// answer directly (breadcrumbs, parents). Edits still go through the store;
/// rebuild the index after each one.
#[derive(Debug, Default)]
pub struct OutlineIndex {
    arena: Arena<IndexNode>,
    roots: Vec<Index>,
    by_id: HashMap<String, Index>,
}

impl OutlineIndex {
    #[instrument(level = "debug", skip(forest))]
    pub fn build(forest: &[OutlineNode]) -> Self {
        let mut index = Self::default();
        for node in forest {
            let idx = index.insert_subtree(node, None);
            index.roots.push(idx);
        }
        index
    }

    fn insert_subtree(&mut self, node: &OutlineNode, parent: Option<Index>) -> Index {
        let idx = self.arena.insert(IndexNode {
            data: SectionData {
                id: node.id.clone(),
                title: node.title.clone(),
                level: node.level,
            },
            parent,
            children: Vec::new(),
        });
        // first occurrence wins, matching the resolver
        self.by_id.entry(node.id.clone()).or_insert(idx);
        for child in &node.children {
            let child_idx = self.insert_subtree(child, Some(idx));
            if let Some(slot) = self.arena.get_mut(idx) {
                slot.children.push(child_idx);
            }
        }
        idx
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn roots(&self) -> &[Index] {
        &self.roots
    }

    pub fn node(&self, idx: Index) -> Option<&IndexNode> {
        self.arena.get(idx)
    }

    pub fn get(&self, id: &str) -> Option<&SectionData> {
        self.by_id
            .get(id)
            .and_then(|&idx| self.arena.get(idx))
            .map(|node| &node.data)
    }

    pub fn parent_of(&self, id: &str) -> Option<&SectionData> {
        let idx = *self.by_id.get(id)?;
        let parent = self.arena.get(idx)?.parent?;
        self.arena.get(parent).map(|node| &node.data)
    }

    /// Sections from the top level down to `id`, inclusive. Empty if unknown.
    #[instrument(level = "trace", skip(self))]
    pub fn breadcrumb(&self, id: &str) -> Vec<&SectionData> {
        let mut path = Vec::new();
        let mut current = self.by_id.get(id).copied();
        while let Some(idx) = current {
            match self.arena.get(idx) {
                Some(node) => {
                    path.push(&node.data);
                    current = node.parent;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }

    /// Number of levels in the deepest branch; 0 for an empty forest.
    pub fn depth(&self) -> usize {
        self.roots
            .iter()
            .map(|&root| self.calculate_depth(root))
            .max()
            .unwrap_or(0)
    }

    fn calculate_depth(&self, idx: Index) -> usize {
        match self.arena.get(idx) {
            Some(node) => {
                1 + node
                    .children
                    .iter()
                    .map(|&child| self.calculate_depth(child))
                    .max()
                    .unwrap_or(0)
            }
            None => 0,
        }
    }

    pub fn iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }
}

/// Pre-order traversal in document order.
pub struct PreOrderIter<'a> {
    index: &'a OutlineIndex,
    stack: Vec<Index>,
}

impl<'a> PreOrderIter<'a> {
    fn new(index: &'a OutlineIndex) -> Self {
        let stack = index.roots.iter().rev().copied().collect();
        Self { index, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = (Index, &'a IndexNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.index.node(current) {
                // reverse push keeps left-to-right order
                self.stack.extend(node.children.iter().rev().copied());
                return Some((current, node));
            }
        }
        None
    }
}
