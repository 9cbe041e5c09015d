use std::sync::Arc;

use anyhow::Context;
use swagtree_core::vfs::FileSystem;
use swagtree_core::{BookmarkStore, CatalogSession, SwagtreeConfig};
use url::Url;

use crate::SpecArgs;

/// Everything one command invocation works on
pub struct AppState {
    pub session: CatalogSession,
    pub store: BookmarkStore,
    fs: Arc<dyn FileSystem>,
}

impl AppState {
    pub fn new(config: SwagtreeConfig, fs: Arc<dyn FileSystem>) -> Self {
        let store = BookmarkStore::new(config.storage.bookmark_dir.clone(), fs.clone());
        Self {
            session: CatalogSession::new(config),
            store,
            fs,
        }
    }

    /// Load the document named by `spec` into the session
    pub fn open(&mut self, spec: &SpecArgs) -> anyhow::Result<()> {
        let source = spec
            .source
            .as_deref()
            .map(Url::parse)
            .transpose()
            .context("invalid --source address")?;

        self.session
            .load_path(&spec.spec, source, self.fs.as_ref())
            .with_context(|| format!("loading {}", spec.spec.display()))
    }
}
