use std::path::Path;

use anyhow::Context;
use swagtree_core::SwagtreeConfig;

/// Read `path` as YAML configuration, or fall back to the defaults
pub fn load_config(path: Option<&Path>) -> anyhow::Result<SwagtreeConfig> {
    let Some(path) = path else {
        return Ok(SwagtreeConfig::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    SwagtreeConfig::from_yaml(&text).with_context(|| format!("parsing config {}", path.display()))
}
