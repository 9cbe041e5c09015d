//! Swagtree Core Library
//!
//! Turns an OpenAPI/Swagger document into a navigable catalog tree, filters it,
//! persists it, and builds request URIs for its operations.
//! No network access; file access goes through [`vfs::FileSystem`].
//!

pub mod builder;
pub mod codec;
pub mod config;
pub mod document;
pub mod error;
pub mod filter;
pub mod model;
pub mod session;
pub mod store;
pub mod tree;
pub mod uri;
pub mod vfs;

#[cfg(test)]
mod fixtures;

pub use builder::CatalogBuilder;
pub use config::{LayoutMode, SwagtreeConfig};
pub use document::SpecDocument;
pub use error::{CatalogError, Result};
pub use filter::TreeFilterEngine;
pub use model::{CatalogNode, NodeId, NodeKind, OperationLeaf, Parameter, ParameterLocation};
pub use session::CatalogSession;
pub use store::BookmarkStore;
pub use tree::CatalogTree;
pub use uri::{resolve, ParameterValue, ResolvedUri};
