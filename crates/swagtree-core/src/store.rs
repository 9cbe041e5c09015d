use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};

use crate::codec;
use crate::error::{CatalogError, Result};
use crate::tree::CatalogTree;
use crate::vfs::FileSystem;

const EXTENSION: &str = "json";

/// Named trees persisted as encoded JSON files under one directory
pub struct BookmarkStore {
    dir: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl BookmarkStore {
    pub fn new(dir: PathBuf, fs: Arc<dyn FileSystem>) -> Self {
        Self { dir, fs }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save(&self, name: &str, tree: &CatalogTree) -> Result<PathBuf> {
        let path = self.path_for(name)?;
        let bytes = codec::encode(tree)?;
        self.fs
            .write_all(&path, &bytes)
            .map_err(|source| storage(&path, source))?;
        info!("saved bookmark `{}` ({} nodes)", name, tree.len());
        Ok(path)
    }

    /// Corrupt payloads surface as decode errors; the caller decides what to do with the file
    pub fn load(&self, name: &str) -> Result<CatalogTree> {
        let path = self.path_for(name)?;
        let bytes = self
            .fs
            .read_all(&path)
            .map_err(|source| storage(&path, source))?;
        let tree = codec::decode(&bytes)?;
        debug!("loaded bookmark `{}` from {}", name, path.display());
        Ok(tree)
    }

    pub fn remove(&self, name: &str) -> Result<()> {
        let path = self.path_for(name)?;
        self.fs
            .remove(&path)
            .map_err(|source| storage(&path, source))
    }

    /// Bookmark names, sorted
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .fs
            .list_files(&self.dir, EXTENSION)
            .iter()
            .filter_map(|path| path.file_stem())
            .map(|stem| stem.to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        let valid = !name.is_empty()
            && !name.starts_with('.')
            && !name.contains(['/', '\\']);
        if !valid {
            let path = self.dir.join(name);
            return Err(storage(
                &path,
                io::Error::new(io::ErrorKind::InvalidInput, "invalid bookmark name"),
            ));
        }
        Ok(self.dir.join(format!("{}.{}", name, EXTENSION)))
    }
}

fn storage(path: &Path, source: io::Error) -> CatalogError {
    CatalogError::Storage {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NodeKind, OperationLeaf, Parameter, ParameterLocation};
    use crate::vfs::PhysicalFileSystem;
    use tempfile::TempDir;

    fn sample_tree() -> CatalogTree {
        let mut tree = CatalogTree::new("base root");
        let tag = tree.add_child(tree.root(), "pet", NodeKind::Plain).unwrap();
        let path = tree.add_child(tag, "/pet/{petId}", NodeKind::Plain).unwrap();
        tree.add_child(
            path,
            "GET",
            NodeKind::Operation(OperationLeaf {
                uri: "https://h/v2/pet/{petId}".to_string(),
                parameters: vec![Parameter::new("petId", ParameterLocation::Path)],
                query_items: vec![],
            }),
        )
        .unwrap();
        tree
    }

    fn create_store() -> (BookmarkStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = BookmarkStore::new(
            temp_dir.path().join("bookmarks"),
            Arc::new(PhysicalFileSystem),
        );
        (store, temp_dir)
    }

    #[test]
    fn test_save_then_load_returns_same_tree() {
        let (store, _temp_dir) = create_store();
        let tree = sample_tree();

        let path = store.save("pets", &tree).unwrap();
        assert!(path.ends_with("pets.json"));

        let loaded = store.load("pets").unwrap();
        assert_eq!(loaded, tree);
    }

    #[test]
    fn test_list_is_sorted_and_ignores_other_files() {
        let (store, _temp_dir) = create_store();
        store.save("zoo", &sample_tree()).unwrap();
        store.save("alpha", &sample_tree()).unwrap();
        std::fs::write(store.dir().join("notes.txt"), "x").unwrap();

        assert_eq!(store.list(), vec!["alpha".to_string(), "zoo".to_string()]);
    }

    #[test]
    fn test_list_of_missing_directory_is_empty() {
        let (store, _temp_dir) = create_store();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_corrupt_payload_is_a_decode_error() {
        let (store, _temp_dir) = create_store();
        store.save("broken", &sample_tree()).unwrap();
        std::fs::write(store.dir().join("broken.json"), b"{\"value\": \"x\"}").unwrap();

        let err = store.load("broken").unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)), "got {:?}", err);
    }

    #[test]
    fn test_remove_and_missing_bookmark() {
        let (store, _temp_dir) = create_store();
        store.save("gone", &sample_tree()).unwrap();
        store.remove("gone").unwrap();

        assert!(store.list().is_empty());
        assert!(matches!(
            store.load("gone").unwrap_err(),
            CatalogError::Storage { .. }
        ));
    }

    #[test]
    fn test_rejects_names_that_escape_the_directory() {
        let (store, _temp_dir) = create_store();
        for name in ["", "../up", "a/b", ".hidden"] {
            assert!(
                matches!(store.save(name, &sample_tree()), Err(CatalogError::Storage { .. })),
                "name {:?} should be rejected",
                name
            );
        }
    }
}
