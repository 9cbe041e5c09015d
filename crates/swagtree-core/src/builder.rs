use log::{debug, warn};
use url::Url;

use crate::config::LayoutMode;
use crate::document::{OperationSpec, ParameterOrRef, ParameterSpec, PathItem, SpecDocument};
use crate::error::{CatalogError, Result};
use crate::model::{NodeId, NodeKind, OperationLeaf, Parameter};
use crate::tree::CatalogTree;


pub const ROOT_LABEL: &str = "base root";

/// Turns a specification document into the canonical catalog tree
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    layout: LayoutMode,
}

impl CatalogBuilder {
    pub fn new(layout: LayoutMode) -> Self {
        Self { layout }
    }

    /// Build the tree for `doc`, which was obtained from `source`.
    ///
    /// `source` supplies the scheme and host of request URIs when the
    /// document does not declare them.
    pub fn build(&self, doc: &SpecDocument, source: &Url) -> Result<CatalogTree> {
        let layout = match self.layout {
            LayoutMode::Auto if doc.is_swagger() => LayoutMode::Tagged,
            LayoutMode::Auto if doc.is_openapi() => LayoutMode::PathSegments,
            LayoutMode::Auto => return Err(CatalogError::UnrecognizedDocument),
            forced => forced,
        };

        let base = request_base(doc, source);
        debug!(
            "building catalog: layout={:?} base={} tags={} paths={}",
            layout,
            base,
            doc.tags.len(),
            doc.paths.len()
        );

        let mut tree = CatalogTree::new(ROOT_LABEL);
        match layout {
            LayoutMode::PathSegments => build_segments(&mut tree, doc, &base)?,
            _ => build_tagged(&mut tree, doc, &base)?,
        }

        debug!("catalog built with {} nodes", tree.len());
        Ok(tree)
    }
}

/// tag -> path -> operation, a path belonging to every tag whose name it contains
fn build_tagged(tree: &mut CatalogTree, doc: &SpecDocument, base: &str) -> Result<()> {
    let root = tree.root();
    for tag in &doc.tags {
        let tag_node = tree.add_child(root, tag.name.clone(), NodeKind::Plain)?;
        for (path, item) in &doc.paths {
            if path.contains(&tag.name) {
                let path_node = tree.add_child(tag_node, path.clone(), NodeKind::Plain)?;
                add_operations(tree, path_node, doc, path, item, base)?;
            }
        }
    }
    Ok(())
}

/// one node per path segment, operations under the last one
fn build_segments(tree: &mut CatalogTree, doc: &SpecDocument, base: &str) -> Result<()> {
    for (path, item) in &doc.paths {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let mut current = tree.root();
        for part in trimmed.split('/') {
            current = match tree.find_child(current, part) {
                Some(existing) if !tree.node(existing).is_operation() => existing,
                _ => tree.add_child(current, part, NodeKind::Plain)?,
            };
        }
        add_operations(tree, current, doc, path, item, base)?;
    }
    Ok(())
}

fn add_operations(
    tree: &mut CatalogTree,
    parent: NodeId,
    doc: &SpecDocument,
    path: &str,
    item: &PathItem,
    base: &str,
) -> Result<()> {
    for (method, operation) in item.operations() {
        let leaf = operation_leaf(doc, path, item, operation, base);
        tree.add_child(parent, method, NodeKind::Operation(leaf))?;
    }
    Ok(())
}

fn operation_leaf(
    doc: &SpecDocument,
    path: &str,
    item: &PathItem,
    operation: &OperationSpec,
    base: &str,
) -> OperationLeaf {
    let own = resolve_all(doc, &operation.parameters, path);

    // an operation-level declaration overrides the path-level one with the same name and location
    let specs: Vec<&ParameterSpec> = resolve_all(doc, &item.parameters, path)
        .into_iter()
        .filter(|shared| {
            !own.iter()
                .any(|spec| spec.name == shared.name && spec.location == shared.location)
        })
        .chain(own.iter().copied())
        .collect();

    let query_items = operation
        .parameters
        .first()
        .and_then(|first| doc.resolve_parameter(first))
        .map(|first| first.item_enum())
        .unwrap_or_default();
    let parameters: Vec<Parameter> = specs.iter().map(|spec| spec.to_parameter()).collect();

    OperationLeaf {
        uri: format!("{}{}", base, path),
        parameters,
        query_items,
    }
}

fn resolve_all<'a>(
    doc: &'a SpecDocument,
    params: &'a [ParameterOrRef],
    path: &str,
) -> Vec<&'a ParameterSpec> {
    params
        .iter()
        .filter_map(|param| {
            let resolved = doc.resolve_parameter(param);
            if resolved.is_none() {
                warn!("skipping unresolvable parameter reference under {}", path);
            }
            resolved
        })
        .collect()
}

/// Address every request URI of the document starts with
pub fn request_base(doc: &SpecDocument, source: &Url) -> String {
    if doc.is_swagger() {
        let scheme = doc
            .schemes
            .first()
            .cloned()
            .unwrap_or_else(|| source.scheme().to_string());
        let host = doc.host.clone().unwrap_or_else(|| source_host(source));
        let base_path = doc.base_path.as_deref().unwrap_or("");
        let base_path = base_path.strip_suffix('/').unwrap_or(base_path);
        return format!("{}://{}{}", scheme, host, base_path);
    }

    let origin = format!("{}://{}", source.scheme(), source_host(source));
    match doc.servers.first().map(|server| server.url.as_str()) {
        Some(server) if Url::parse(server).is_ok() => server.trim_end_matches('/').to_string(),
        Some(server) if server.starts_with('/') => {
            format!("{}{}", origin, server.trim_end_matches('/'))
        }
        _ => origin,
    }
}

fn source_host(source: &Url) -> String {
    match (source.host_str(), source.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}
