/*
termtree rendering for outlines.

Forest is a type alias for Vec<OutlineNode>, and inherent impls on foreign
types are not allowed (E0116), so rendering goes through a local trait.
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::{Forest, OutlineNode};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

fn label(node: &OutlineNode) -> String {
    let title = if node.title.is_empty() {
        "(untitled)"
    } else {
        node.title.as_str()
    };
    format!("{title} [{}]", node.id)
}

impl TreeNodeConvert for OutlineNode {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children.iter().map(|c| c.to_tree_string()).collect();
        Tree::new(label(self)).with_leaves(leaves)
    }
}

/// Render a forest under a synthetic root labelled with the location.
pub fn forest_tree(location: &str, forest: &Forest) -> Tree<String> {
    let leaves: Vec<_> = forest.iter().map(|n| n.to_tree_string()).collect();
    Tree::new(location.to_string()).with_leaves(leaves)
}
