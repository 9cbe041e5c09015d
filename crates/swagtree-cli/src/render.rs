use std::fmt::Write;

use swagtree_core::{CatalogTree, NodeId, NodeKind, OperationLeaf};

const INDENT: &str = "  ";

/// Indented outline of the whole tree, one node per line.
/// Operation leaves also show their URI template.
pub fn outline(tree: &CatalogTree) -> String {
    let mut text = String::new();
    let mut stack: Vec<(NodeId, usize)> = vec![(tree.root(), 0)];

    while let Some((id, depth)) = stack.pop() {
        let Some(node) = tree.get(id) else {
            continue;
        };
        let indent = INDENT.repeat(depth);
        match &node.kind {
            NodeKind::Plain => {
                let _ = writeln!(text, "{}{}", indent, node.label);
            }
            NodeKind::Operation(leaf) => {
                let _ = writeln!(text, "{}{} {}", indent, node.label, leaf.uri);
            }
        }
        for child in node.children().iter().rev() {
            stack.push((*child, depth + 1));
        }
    }

    text
}

/// Parameter listing for one operation
pub fn operation_details(method: &str, leaf: &OperationLeaf) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{} {}", method, leaf.uri);

    for param in &leaf.parameters {
        let marker = if param.required { " (required)" } else { "" };
        let _ = write!(text, "{}{} [{}]{}", INDENT, param.name, param.location, marker);
        if let Some(description) = &param.description {
            let _ = write!(text, ": {}", description);
        }
        text.push('\n');
    }

    if !leaf.query_items.is_empty() {
        let _ = writeln!(text, "{}choices: {}", INDENT, leaf.query_items.join(", "));
    }
    text
}
