//! Persisted form of a catalog tree.
//!
//! Each node becomes one JSON record, children nested in order. Operation
//! parameters keep only `name` and `in`; description, schema, required and
//! example are dropped on the way out and come back empty.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::model::{NodeId, NodeKind, OperationLeaf, Parameter, ParameterLocation};
use crate::tree::CatalogTree;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    pub value: String,
    pub is_leaf: bool,
    #[serde(default)]
    pub children: Vec<NodeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_parameters: Option<Vec<ParameterRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "in", default)]
    pub location: Option<ParameterLocation>,
}

/// Encode the whole tree, root first
pub fn encode(tree: &CatalogTree) -> Result<Vec<u8>> {
    encode_subtree(tree, tree.root())
}

/// Encode `id` and everything below it
pub fn encode_subtree(tree: &CatalogTree, id: NodeId) -> Result<Vec<u8>> {
    serde_json::to_vec(&to_record(tree, id)).map_err(CatalogError::Encode)
}

pub fn decode(bytes: &[u8]) -> Result<CatalogTree> {
    let record: NodeRecord =
        serde_json::from_slice(bytes).map_err(|e| CatalogError::Decode(e.to_string()))?;
    from_record(&record)
}

pub fn to_record(tree: &CatalogTree, id: NodeId) -> NodeRecord {
    let node = tree.node(id);
    let children = tree
        .children(id)
        .iter()
        .map(|child| to_record(tree, *child))
        .collect();

    match &node.kind {
        NodeKind::Plain => NodeRecord {
            value: node.label.clone(),
            is_leaf: false,
            children,
            query_items: None,
            method_parameters: None,
            uri: None,
        },
        NodeKind::Operation(leaf) => NodeRecord {
            value: node.label.clone(),
            is_leaf: true,
            children,
            query_items: Some(leaf.query_items.clone()),
            method_parameters: Some(
                leaf.parameters
                    .iter()
                    .map(|p| ParameterRecord {
                        name: Some(p.name.clone()),
                        location: Some(p.location),
                    })
                    .collect(),
            ),
            uri: Some(leaf.uri.clone()),
        },
    }
}

pub fn from_record(record: &NodeRecord) -> Result<CatalogTree> {
    let mut tree = CatalogTree::new(record.value.clone());
    if record.is_leaf {
        let leaf = leaf_from_record(record)?;
        tree.set_root_kind(NodeKind::Operation(leaf))?;
        return Ok(tree);
    }

    let root = tree.root();
    for child in &record.children {
        push_record(&mut tree, root, child)?;
    }
    Ok(tree)
}

fn push_record(tree: &mut CatalogTree, parent: NodeId, record: &NodeRecord) -> Result<()> {
    if record.is_leaf {
        let leaf = leaf_from_record(record)?;
        tree.add_child(parent, record.value.clone(), NodeKind::Operation(leaf))?;
        return Ok(());
    }

    let id = tree.add_child(parent, record.value.clone(), NodeKind::Plain)?;
    for child in &record.children {
        push_record(tree, id, child)?;
    }
    Ok(())
}

fn leaf_from_record(record: &NodeRecord) -> Result<OperationLeaf> {
    let missing = |field: &str| {
        CatalogError::Decode(format!("leaf `{}` is missing `{}`", record.value, field))
    };

    if !record.children.is_empty() {
        return Err(CatalogError::Decode(format!(
            "leaf `{}` carries children",
            record.value
        )));
    }

    let uri = record.uri.clone().ok_or_else(|| missing("uri"))?;
    let parameters = record
        .method_parameters
        .as_ref()
        .ok_or_else(|| missing("methodParameters"))?
        .iter()
        .filter_map(|p| match (&p.name, p.location) {
            (Some(name), Some(location)) => Some(Parameter::new(name.clone(), location)),
            _ => None,
        })
        .collect();

    Ok(OperationLeaf {
        uri,
        parameters,
        query_items: record.query_items.clone().unwrap_or_default(),
    })
}
