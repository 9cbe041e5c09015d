use std::collections::HashMap;
use std::path::Path;

use log::{info, warn};
use url::Url;

use crate::builder::{CatalogBuilder, ROOT_LABEL};
use crate::codec;
use crate::config::SwagtreeConfig;
use crate::document::SpecDocument;
use crate::error::{CatalogError, Result};
use crate::filter::TreeFilterEngine;
use crate::model::{NodeId, ParameterLocation};
use crate::tree::CatalogTree;
use crate::uri::{self, ParameterValue, ResolvedUri};
use crate::vfs::FileSystem;


/// Owns the canonical tree of the loaded document.
///
/// Loading a document is the only way the canonical tree (and with it the
/// filter cache) is replaced, and it needs `&mut self`.
pub struct CatalogSession {
    config: SwagtreeConfig,
    tree: CatalogTree,
    filter: TreeFilterEngine,
    source: Option<Url>,
}

impl CatalogSession {
    pub fn new(config: SwagtreeConfig) -> Self {
        let filter = TreeFilterEngine::new(config.filter.clone());
        Self {
            config,
            tree: CatalogTree::new(ROOT_LABEL),
            filter,
            source: None,
        }
    }

    pub fn config(&self) -> &SwagtreeConfig {
        &self.config
    }

    pub fn tree(&self) -> &CatalogTree {
        &self.tree
    }

    pub fn source(&self) -> Option<&Url> {
        self.source.as_ref()
    }

    /// Parse and build `bytes`. On failure the current tree stays in place.
    pub fn load_document(&mut self, bytes: &[u8], source: Url) -> Result<()> {
        let tree = SpecDocument::from_slice(bytes)
            .and_then(|doc| CatalogBuilder::new(self.config.catalog.layout).build(&doc, &source))
            .map_err(|e| {
                warn!("keeping previous catalog, {} failed to load: {}", source, e);
                e
            })?;

        info!("loaded {} ({} nodes)", source, tree.len());
        self.install(tree);
        self.source = Some(source);
        Ok(())
    }

    /// Read a document through `fs`, using its `file://` address as source
    /// unless `source` is given.
    pub fn load_path(
        &mut self,
        path: &Path,
        source: Option<Url>,
        fs: &dyn FileSystem,
    ) -> Result<()> {
        let bytes = fs.read_all(path).map_err(|source| CatalogError::Retrieval {
            path: path.to_path_buf(),
            source,
        })?;
        let source = match source {
            Some(url) => url,
            None => file_source(path)?,
        };
        self.load_document(&bytes, source)
    }

    /// Install a previously persisted tree, e.g. the last session
    pub fn restore(&mut self, bytes: &[u8]) -> Result<()> {
        let tree = codec::decode(bytes)?;
        self.install(tree);
        Ok(())
    }

    /// Encode the canonical tree for persistence
    pub fn snapshot(&self) -> Result<Vec<u8>> {
        codec::encode(&self.tree)
    }

    /// Filtered view of the canonical tree; never modifies it
    pub fn filter(&mut self, text: &str) -> CatalogTree {
        self.filter.filter(&self.tree, text)
    }

    pub fn expand_all(&mut self) {
        let root = self.tree.root();
        self.tree.expand_all(root);
    }

    pub fn collapse_all(&mut self) {
        let root = self.tree.root();
        self.tree.collapse_all(root);
    }

    /// First operation leaf labelled `method` under the node for `path`.
    ///
    /// Tagged trees label path nodes with the whole path; segment trees are
    /// walked one segment at a time from the root.
    pub fn find_operation(&self, path: &str, method: &str) -> Result<NodeId> {
        let root = self.tree.root();
        let mut candidates: Vec<NodeId> = self
            .tree
            .descendants(root)
            .into_iter()
            .filter(|id| self.tree.label(*id) == path)
            .collect();
        candidates.extend(self.segment_node(path));

        candidates
            .into_iter()
            .find_map(|id| {
                self.tree.children(id).iter().copied().find(|child| {
                    let node = self.tree.node(*child);
                    node.is_operation() && node.label.eq_ignore_ascii_case(method)
                })
            })
            .ok_or_else(|| CatalogError::OperationNotFound {
                path: path.to_string(),
                method: method.to_string(),
            })
    }

    fn segment_node(&self, path: &str) -> Option<NodeId> {
        path.trim_start_matches('/')
            .split('/')
            .try_fold(self.tree.root(), |current, segment| {
                self.tree.find_child(current, segment)
            })
    }

    /// Resolve the URI of `leaf` with the user's values, keyed by parameter
    /// name. Declared parameters without a value count as empty.
    pub fn request_uri(
        &self,
        leaf: NodeId,
        values: &HashMap<String, String>,
    ) -> Result<ResolvedUri> {
        let node = self
            .tree
            .get(leaf)
            .ok_or_else(|| CatalogError::NotAnOperation(format!("#{}", leaf.index())))?;
        let operation = node
            .operation()
            .ok_or_else(|| CatalogError::NotAnOperation(node.label.clone()))?;

        let params: Vec<ParameterValue> = operation
            .parameters
            .iter()
            .filter(|p| matches!(p.location, ParameterLocation::Path | ParameterLocation::Query))
            .map(|p| {
                let value = values.get(&p.name).cloned().unwrap_or_default();
                ParameterValue::new(p.name.clone(), value, p.location)
            })
            .collect();

        uri::resolve(&operation.uri, &params)
    }

    fn install(&mut self, tree: CatalogTree) {
        self.tree = tree;
        self.filter.reset();
    }
}

fn file_source(path: &Path) -> Result<Url> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|source| CatalogError::Retrieval {
                path: path.to_path_buf(),
                source,
            })?
            .join(path)
    };
    Url::from_file_path(&absolute)
        .map_err(|_| CatalogError::Parse(format!("no file address for {}", absolute.display())))
}
