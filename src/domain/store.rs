//! Outline tree store: id-addressed structural edits.
//!
//! Every operation borrows the current forest and returns a new one. The input
//! is never modified, and an id that does not resolve yields an unchanged copy.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::domain::entities::{collect_ids, Forest, OutlineNode};
use crate::domain::ids::{IdGenerator, IdScheme, UuidIds};
use crate::domain::resolver::{find_and_transform_sibling_list, transform_node};

pub const DEFAULT_TITLE: &str = "New Section";

/// Applies edits to outline forests and mints ids for inserted nodes.
#[derive(Debug)]
pub struct OutlineStore {
    ids: Box<dyn IdGenerator>,
    default_title: String,
}

impl Default for OutlineStore {
    fn default() -> Self {
        Self::new(Box::new(UuidIds), DEFAULT_TITLE)
    }
}

impl OutlineStore {
    pub fn new(ids: Box<dyn IdGenerator>, default_title: impl Into<String>) -> Self {
        Self {
            ids,
            default_title: default_title.into(),
        }
    }

    pub fn with_scheme(scheme: IdScheme, default_title: impl Into<String>) -> Self {
        Self::new(scheme.generator(), default_title)
    }

    pub fn default_title(&self) -> &str {
        &self.default_title
    }

    /// Replace the title of the node `id`. Level and children are kept.
    #[instrument(level = "debug", skip(self, forest))]
    pub fn rename(&self, forest: &[OutlineNode], id: &str, new_title: &str) -> Forest {
        fn rename_in(list: &[OutlineNode], id: &str, new_title: &str) -> Forest {
            list.iter()
                .map(|node| OutlineNode {
                    id: node.id.clone(),
                    title: if node.id == id {
                        new_title.to_string()
                    } else {
                        node.title.clone()
                    },
                    level: node.level,
                    children: rename_in(&node.children, id, new_title),
                })
                .collect()
        }
        rename_in(forest, id, new_title)
    }

    /// Append a fresh node to the end of `parent_id`'s children.
    ///
    /// The child level is read from the parent as it is now.
    #[instrument(level = "debug", skip(self, forest))]
    pub fn insert_child(&mut self, forest: &[OutlineNode], parent_id: &str) -> Forest {
        let taken = taken_ids(forest);
        let (rebuilt, found) = transform_node(forest, parent_id, |parent| {
            let child = self.mint(&taken, parent.level + 1);
            debug!(child_id = %child.id, level = child.level, "inserting child");
            let mut parent = parent.clone();
            parent.children.push(child);
            parent
        });
        if !found {
            debug!("parent not found, forest unchanged");
        }
        rebuilt
    }

    /// Insert a fresh node directly after `anchor_id`, in whatever sibling list
    /// holds the anchor (the forest itself for top-level anchors).
    #[instrument(level = "debug", skip(self, forest))]
    pub fn insert_sibling(&mut self, forest: &[OutlineNode], anchor_id: &str) -> Forest {
        let taken = taken_ids(forest);
        let (rebuilt, found) = find_and_transform_sibling_list(forest, anchor_id, |mut list, index| {
            let sibling = self.mint(&taken, list[index].level);
            debug!(sibling_id = %sibling.id, position = index + 1, "inserting sibling");
            list.insert(index + 1, sibling);
            list
        });
        if !found {
            debug!("anchor not found, forest unchanged");
        }
        rebuilt
    }

    /// Remove the node `id` together with its whole subtree.
    #[instrument(level = "debug", skip(self, forest))]
    pub fn delete_subtree(&self, forest: &[OutlineNode], id: &str) -> Forest {
        fn retain(list: &[OutlineNode], id: &str) -> Forest {
            list.iter()
                .filter(|node| node.id != id)
                .map(|node| OutlineNode {
                    id: node.id.clone(),
                    title: node.title.clone(),
                    level: node.level,
                    children: retain(&node.children, id),
                })
                .collect()
        }
        retain(forest, id)
    }

    /// Append a fresh level-1 node to the end of the forest.
    #[instrument(level = "debug", skip(self, forest))]
    pub fn append_top_level(&mut self, forest: &[OutlineNode]) -> Forest {
        let taken = taken_ids(forest);
        let mut rebuilt = forest.to_vec();
        rebuilt.push(self.mint(&taken, 1));
        rebuilt
    }

    fn mint(&mut self, taken: &HashSet<String>, level: u32) -> OutlineNode {
        let id = self.ids.next_id(taken);
        assert!(
            !taken.contains(&id),
            "id generator returned an id already present in the outline: {id}"
        );
        OutlineNode::new(id, self.default_title.clone(), level)
    }
}

fn taken_ids(forest: &[OutlineNode]) -> HashSet<String> {
    collect_ids(forest).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::SequentialIds;

    #[derive(Debug)]
    struct Fixed(&'static str);

    impl IdGenerator for Fixed {
        fn next_id(&mut self, _taken: &HashSet<String>) -> String {
            self.0.to_string()
        }
    }

    #[test]
    #[should_panic(expected = "already present")]
    fn given_colliding_generator_when_inserting_then_fails_fast() {
        let mut store = OutlineStore::new(Box::new(Fixed("a")), DEFAULT_TITLE);
        let forest = vec![OutlineNode::new("a", "A", 1)];
        store.append_top_level(&forest);
    }

    #[test]
    fn given_missing_parent_when_inserting_child_then_generator_not_advanced() {
        let mut store = OutlineStore::new(Box::new(SequentialIds::default()), "x");
        let forest = vec![OutlineNode::new("a", "A", 1)];
        let same = store.insert_child(&forest, "missing");
        assert_eq!(same, forest);
        let grown = store.append_top_level(&forest);
        assert_eq!(grown[1].id, "node-1");
    }

    #[test]
    fn given_custom_title_when_appending_then_new_node_uses_it() {
        let mut store = OutlineStore::with_scheme(IdScheme::Sequential, "Untitled");
        let forest = store.append_top_level(&[]);
        assert_eq!(forest[0].title, "Untitled");
        assert_eq!(forest[0].level, 1);
        assert!(forest[0].children.is_empty());
    }
}
