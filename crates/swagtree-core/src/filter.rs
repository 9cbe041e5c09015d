//! Search over the catalog tree.
//!
//! The engine remembers the first tree it sees and always filters that one,
//! so narrowing and then widening a search never loses nodes. Each call
//! returns a fresh, independently owned view.

use std::collections::HashSet;

use log::debug;

use crate::config::FilterConfig;
use crate::model::NodeId;
use crate::tree::CatalogTree;


#[derive(Debug, Clone, Default)]
pub struct TreeFilterEngine {
    config: FilterConfig,
    original: Option<CatalogTree>,
}

impl TreeFilterEngine {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            original: None,
        }
    }

    /// The tree every filter call is evaluated against, once cached
    pub fn original(&self) -> Option<&CatalogTree> {
        self.original.as_ref()
    }

    /// Forget the cached original. Call exactly when a new canonical tree is loaded.
    pub fn reset(&mut self) {
        self.original = None;
    }

    /// Produce the view of the cached original matching `text`.
    ///
    /// `tree` is only consulted when nothing is cached yet; it then becomes
    /// the original for every later call until [`reset`](Self::reset).
    pub fn filter(&mut self, tree: &CatalogTree, text: &str) -> CatalogTree {
        let original: &CatalogTree = self.original.get_or_insert_with(|| tree.clone());

        if text.is_empty() {
            return original.clone();
        }

        let needle = if self.config.case_sensitive {
            text.to_string()
        } else {
            text.to_lowercase()
        };

        let mut retained = HashSet::new();
        let root = original.root();
        for child in original.children(root) {
            mark_retained(original, *child, &needle, self.config.case_sensitive, &mut retained);
        }

        let mut view = CatalogTree::new(original.label(root));
        let view_root = view.root();
        for child in original.children(root) {
            if retained.contains(child) {
                copy_retained(original, *child, &retained, &mut view, view_root);
            }
        }

        reattach_operations(original, &mut view);

        if self.config.expand_matches {
            view.expand_all(view_root);
        }

        debug!(
            "filter {:?}: {} of {} nodes kept",
            text,
            view.len(),
            original.len()
        );
        view
    }
}

/// Phase 1: a node is kept when its label matches or any descendant is kept
fn mark_retained(
    tree: &CatalogTree,
    id: NodeId,
    needle: &str,
    case_sensitive: bool,
    retained: &mut HashSet<NodeId>,
) -> bool {
    let mut any_child = false;
    for child in tree.children(id) {
        any_child |= mark_retained(tree, *child, needle, case_sensitive, retained);
    }

    let label = tree.label(id);
    let matches = if case_sensitive {
        label.contains(needle)
    } else {
        label.to_lowercase().contains(needle)
    };

    if any_child || matches {
        retained.insert(id);
        true
    } else {
        false
    }
}

fn copy_retained(
    source: &CatalogTree,
    id: NodeId,
    retained: &HashSet<NodeId>,
    view: &mut CatalogTree,
    parent: NodeId,
) {
    let node = source.node(id);
    // kept nodes only ever hang under kept plain nodes
    let copy = view.push_node(parent, node.label.clone(), node.kind.clone());
    for child in source.children(id) {
        if retained.contains(child) {
            copy_retained(source, *child, retained, view, copy);
        }
    }
}

/// Phase 2: grandchildren of the root that kept no children of their own get
/// back the operation leaves found under same-labelled nodes of the original,
/// looking only inside the top-level node that matches their parent.
fn reattach_operations(original: &CatalogTree, view: &mut CatalogTree) {
    let view_root = view.root();
    let top_level: Vec<NodeId> = view.children(view_root).to_vec();

    for group in top_level {
        let scopes: Vec<NodeId> = original
            .children(original.root())
            .iter()
            .copied()
            .filter(|candidate| original.label(*candidate) == view.label(group))
            .collect();

        let bare: Vec<NodeId> = view
            .children(group)
            .iter()
            .copied()
            .filter(|grandchild| {
                let node = view.node(*grandchild);
                !node.is_operation() && node.children().is_empty()
            })
            .collect();

        for grandchild in bare {
            let label = view.label(grandchild).to_string();
            for scope in &scopes {
                for candidate in original.descendants(*scope) {
                    if original.label(candidate) != label {
                        continue;
                    }
                    for leaf in original.children(candidate) {
                        if original.node(*leaf).is_operation() {
                            view.push_copy(grandchild, original, *leaf);
                        }
                    }
                }
            }
        }
    }
}
