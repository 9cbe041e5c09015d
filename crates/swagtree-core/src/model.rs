use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a node inside the `CatalogTree` arena that minted it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Where a declared parameter travels in a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterLocation {
    #[serde(rename = "path")]
    Path,
    #[serde(rename = "query")]
    Query,
    #[serde(rename = "header")]
    Header,
    #[serde(rename = "body")]
    Body,
    #[serde(rename = "formData")]
    FormData,
    #[serde(rename = "cookie")]
    Cookie,
}

impl ParameterLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Body => "body",
            ParameterLocation::FormData => "formData",
            ParameterLocation::Cookie => "cookie",
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter declared by an operation.
///
/// Only `name` and `location` survive persistence; the remaining metadata is
/// available for a freshly built catalog only.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,
    pub description: Option<String>,
    pub required: bool,
    pub schema: Option<serde_json::Value>,
    pub example: Option<serde_json::Value>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, location: ParameterLocation) -> Self {
        Self {
            name: name.into(),
            location,
            description: None,
            required: false,
            schema: None,
            example: None,
        }
    }
}

/// Fields carried only by operation leaves
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OperationLeaf {
    pub uri: String,
    pub parameters: Vec<Parameter>,
    pub query_items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Plain,
    Operation(OperationLeaf),
}

impl NodeKind {
    pub fn is_operation(&self) -> bool {
        matches!(self, NodeKind::Operation(_))
    }
}

/// One entry of the catalog hierarchy
#[derive(Debug, Clone)]
pub struct CatalogNode {
    pub label: String,
    pub kind: NodeKind,
    pub expanded: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl CatalogNode {
    pub(crate) fn new(label: String, kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            label,
            kind,
            expanded: false,
            parent,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn operation(&self) -> Option<&OperationLeaf> {
        match &self.kind {
            NodeKind::Operation(leaf) => Some(leaf),
            NodeKind::Plain => None,
        }
    }

    pub fn is_operation(&self) -> bool {
        self.kind.is_operation()
    }
}
