//! Swagtree CLI Library
//!
//! Command layer, turns parsed arguments into Core session calls and prints
//! the results.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use swagtree_core::vfs::PhysicalFileSystem;
use swagtree_core::SwagtreeConfig;

use crate::state::AppState;

mod config;
mod handlers;
mod render;
mod state;

pub use config::load_config;


#[derive(Parser, Debug)]
#[command(name = "swagtree", version, about = "Browse OpenAPI/Swagger documents as a catalog tree")]
pub struct SwagtreeCli {
    /// YAML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the catalog tree of a document
    Tree(TreeArgs),
    /// Build the request URI of one operation
    Resolve(ResolveArgs),
    /// Save, show, list and remove named trees
    #[command(subcommand)]
    Bookmark(BookmarkCommand),
}

/// Where a document comes from
#[derive(Args, Debug, Clone)]
pub struct SpecArgs {
    /// Path to a JSON or YAML document
    pub spec: PathBuf,

    /// Address the document was fetched from; defaults to its file:// URL
    #[arg(long)]
    pub source: Option<String>,
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub spec: SpecArgs,

    /// Only show nodes matching this text
    #[arg(long)]
    pub filter: Option<String>,

    /// Print the persisted JSON form instead of an outline
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub spec: SpecArgs,

    /// Path label, e.g. /pet/{petId}
    pub path: String,

    /// HTTP method, case-insensitive
    pub method: String,

    /// Parameter value as name=value, repeatable
    #[arg(short = 'p', long = "param", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    /// Also list the operation's parameters
    #[arg(long)]
    pub details: bool,
}

#[derive(Subcommand, Debug)]
pub enum BookmarkCommand {
    /// Store a document's tree, optionally filtered, under a name
    Save {
        name: String,
        #[command(flatten)]
        spec: SpecArgs,
        #[arg(long)]
        filter: Option<String>,
    },
    /// Print a stored tree
    Show { name: String },
    /// List stored names
    List,
    /// Delete a stored tree
    Remove { name: String },
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got `{}`", raw))?;
    if name.is_empty() {
        return Err(format!("missing parameter name in `{}`", raw));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Run one command against the physical file system, writing to `out`
pub fn run(command: Commands, config: SwagtreeConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut state = AppState::new(config, Arc::new(PhysicalFileSystem));
    match command {
        Commands::Tree(args) => handlers::handle_tree(&mut state, args, out),
        Commands::Resolve(args) => handlers::handle_resolve(&mut state, args, out),
        Commands::Bookmark(command) => handlers::handle_bookmark(&mut state, command, out),
    }
}
