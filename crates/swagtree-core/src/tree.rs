use crate::error::{CatalogError, Result};
use crate::model::{CatalogNode, NodeId, NodeKind};

#[cfg(test)]
mod tests;

/// Arena-backed catalog hierarchy.
///
/// Children lists are the only ownership path. Parent links are plain
/// `NodeId` indices used for upward lookups.
#[derive(Debug, Clone)]
pub struct CatalogTree {
    nodes: Vec<CatalogNode>,
    root: NodeId,
}

impl CatalogTree {
    pub fn new(root_label: impl Into<String>) -> Self {
        Self {
            nodes: vec![CatalogNode::new(root_label.into(), NodeKind::Plain, None)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Option<&CatalogNode> {
        self.nodes.get(id.0)
    }

    /// Panics when `id` was not minted by this tree
    pub fn node(&self, id: NodeId) -> &CatalogNode {
        &self.nodes[id.0]
    }

    pub fn label(&self, id: NodeId) -> &str {
        &self.node(id).label
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Append a child under `parent`, keeping insertion order
    pub fn add_child(
        &mut self,
        parent: NodeId,
        label: impl Into<String>,
        kind: NodeKind,
    ) -> Result<NodeId> {
        let parent_node = self.node(parent);
        if parent_node.is_operation() {
            return Err(CatalogError::LeafHasChildren(parent_node.label.clone()));
        }

        Ok(self.push_node(parent, label.into(), kind))
    }

    /// Append under `parent`, which the caller knows to be a plain node
    pub(crate) fn push_node(&mut self, parent: NodeId, label: String, kind: NodeKind) -> NodeId {
        debug_assert!(!self.node(parent).is_operation());
        let id = NodeId(self.nodes.len());
        self.nodes.push(CatalogNode::new(label, kind, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Replace the root's variant; an operation root must not have children
    pub fn set_root_kind(&mut self, kind: NodeKind) -> Result<()> {
        let root = &mut self.nodes[self.root.0];
        if kind.is_operation() && !root.children.is_empty() {
            return Err(CatalogError::LeafHasChildren(root.label.clone()));
        }
        root.kind = kind;
        Ok(())
    }

    /// First direct child of `parent` carrying `label`
    pub fn find_child(&self, parent: NodeId, label: &str) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|child| self.label(*child) == label)
    }

    /// Pre-order walk of `id` and everything below it
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) {
        self.nodes[id.0].expanded = expanded;
    }

    /// Set the expansion flag on `id` and all of its descendants
    pub fn set_expanded_recursive(&mut self, id: NodeId, expanded: bool) {
        for node in self.descendants(id) {
            self.nodes[node.0].expanded = expanded;
        }
    }

    pub fn expand_all(&mut self, id: NodeId) {
        self.set_expanded_recursive(id, true);
    }

    pub fn collapse_all(&mut self, id: NodeId) {
        self.set_expanded_recursive(id, false);
    }

    /// Deep-copy `source_id` (from `source`) under `parent` in this tree
    pub fn graft(
        &mut self,
        parent: NodeId,
        source: &CatalogTree,
        source_id: NodeId,
    ) -> Result<NodeId> {
        let parent_node = self.node(parent);
        if parent_node.is_operation() {
            return Err(CatalogError::LeafHasChildren(parent_node.label.clone()));
        }
        Ok(self.push_copy(parent, source, source_id))
    }

    /// Independent tree rooted at a copy of `id`
    pub fn subtree(&self, id: NodeId) -> CatalogTree {
        let source_root = self.node(id);
        let mut out = CatalogTree::new(source_root.label.clone());
        for child in self.children(id) {
            out.push_copy(out.root, self, *child);
        }
        out.nodes[0].kind = source_root.kind.clone();
        out.nodes[0].expanded = source_root.expanded;
        out
    }

    /// Deep copy without the leaf check; `parent` must be a plain node
    pub(crate) fn push_copy(
        &mut self,
        parent: NodeId,
        source: &CatalogTree,
        source_id: NodeId,
    ) -> NodeId {
        let source_node = source.node(source_id);
        let id = self.push_node(parent, source_node.label.clone(), source_node.kind.clone());
        self.nodes[id.0].expanded = source_node.expanded;
        for child in source.children(source_id) {
            self.push_copy(id, source, *child);
        }
        id
    }

    fn same_subtree(&self, id: NodeId, other: &CatalogTree, other_id: NodeId) -> bool {
        let left = self.node(id);
        let right = other.node(other_id);
        left.label == right.label
            && left.kind == right.kind
            && left.children.len() == right.children.len()
            && left
                .children
                .iter()
                .zip(right.children.iter())
                .all(|(l, r)| self.same_subtree(*l, other, *r))
    }
}

/// Structural equality: labels, variants and child order. Expansion state is
/// view state and does not take part.
impl PartialEq for CatalogTree {
    fn eq(&self, other: &Self) -> bool {
        self.same_subtree(self.root, other, other.root)
    }
}
