//! Serde model of the parts of a Swagger 2 / OpenAPI 3 document the catalog reads.
//!
//! Everything else in the document is ignored.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::model::{Parameter, ParameterLocation};
use crate::vfs::FileSystem;


#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecDocument {
    #[serde(default)]
    pub swagger: Option<String>,
    #[serde(default)]
    pub openapi: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub base_path: Option<String>,
    #[serde(default)]
    pub schemes: Vec<String>,
    #[serde(default)]
    pub servers: Vec<Server>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Insertion order is the order paths are offered to each tag
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    /// Swagger 2 shared parameters
    #[serde(default)]
    pub parameters: IndexMap<String, ParameterSpec>,
    #[serde(default)]
    pub components: Option<Components>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub parameters: IndexMap<String, ParameterSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    pub get: Option<OperationSpec>,
    pub put: Option<OperationSpec>,
    pub post: Option<OperationSpec>,
    pub delete: Option<OperationSpec>,
    pub options: Option<OperationSpec>,
    pub head: Option<OperationSpec>,
    pub patch: Option<OperationSpec>,
    pub trace: Option<OperationSpec>,
    #[serde(default)]
    pub parameters: Vec<ParameterOrRef>,
}

impl PathItem {
    /// Declared operations keyed by upper-case method name, in the fixed
    /// GET, PUT, POST, DELETE, OPTIONS, HEAD, PATCH, TRACE order
    pub fn operations(&self) -> Vec<(&'static str, &OperationSpec)> {
        [
            ("GET", &self.get),
            ("PUT", &self.put),
            ("POST", &self.post),
            ("DELETE", &self.delete),
            ("OPTIONS", &self.options),
            ("HEAD", &self.head),
            ("PATCH", &self.patch),
            ("TRACE", &self.trace),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
        .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationSpec {
    #[serde(default)]
    pub operation_id: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterOrRef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ParameterOrRef {
    Reference {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Inline(ParameterSpec),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub schema: Option<serde_json::Value>,
    /// Swagger 2 array item description
    #[serde(default)]
    pub items: Option<serde_json::Value>,
    #[serde(default)]
    pub example: Option<serde_json::Value>,
}

impl ParameterSpec {
    /// Enum values offered for the parameter's items, as strings
    pub fn item_enum(&self) -> Vec<String> {
        let from_items = self.items.as_ref().and_then(|items| items.get("enum"));
        let from_schema = self
            .schema
            .as_ref()
            .and_then(|schema| schema.get("items"))
            .and_then(|items| items.get("enum"));

        from_items
            .or(from_schema)
            .and_then(|values| values.as_array())
            .map(|values| {
                values
                    .iter()
                    .map(|value| match value {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn to_parameter(&self) -> Parameter {
        Parameter {
            name: self.name.clone(),
            location: self.location,
            description: self.description.clone(),
            required: self.required,
            schema: self.schema.clone().or_else(|| self.items.clone()),
            example: self.example.clone(),
        }
    }
}

impl SpecDocument {
    /// Parse JSON or YAML bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| CatalogError::Parse(format!("document is not UTF-8: {}", e)))?;

        if text.trim().is_empty() {
            return Err(CatalogError::Parse("document is empty".to_string()));
        }

        if text.trim_start().starts_with('{') {
            serde_json::from_str(text).map_err(|e| CatalogError::Parse(e.to_string()))
        } else {
            serde_yaml::from_str(text).map_err(|e| CatalogError::Parse(e.to_string()))
        }
    }

    pub fn load(path: &Path, fs: &dyn FileSystem) -> Result<Self> {
        let bytes = fs.read_all(path).map_err(|source| CatalogError::Retrieval {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_slice(&bytes)
    }

    pub fn is_swagger(&self) -> bool {
        self.swagger.as_deref().is_some_and(|v| !v.trim().is_empty())
    }

    pub fn is_openapi(&self) -> bool {
        self.openapi.as_deref().is_some_and(|v| !v.trim().is_empty())
    }

    /// Resolve `#/parameters/x` or `#/components/parameters/x`
    pub fn resolve_parameter<'a>(&'a self, param: &'a ParameterOrRef) -> Option<&'a ParameterSpec> {
        match param {
            ParameterOrRef::Inline(spec) => Some(spec),
            ParameterOrRef::Reference { reference } => {
                if let Some(name) = reference.strip_prefix("#/parameters/") {
                    self.parameters.get(name)
                } else if let Some(name) = reference.strip_prefix("#/components/parameters/") {
                    self.components
                        .as_ref()
                        .and_then(|components| components.parameters.get(name))
                } else {
                    None
                }
            }
        }
    }
}
