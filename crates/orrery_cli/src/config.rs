//! Configuration file lookup
//!
//! An explicit `--config` path must exist. Without one, `orrery.toml` in
//! the working directory is used when present, and the defaults otherwise.

use anyhow::{Context, Result};
use orrery_3d::config::{OrreryConfig, CONFIG_FILE};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load the effective configuration
pub fn load(explicit: Option<&Path>) -> Result<OrreryConfig> {
    match explicit {
        Some(path) => load_file(path),
        None => {
            let path = Path::new(CONFIG_FILE);
            if path.is_file() {
                load_file(path)
            } else {
                debug!("No {} found, using defaults", CONFIG_FILE);
                Ok(OrreryConfig::default())
            }
        }
    }
}

fn load_file(path: &Path) -> Result<OrreryConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config = OrreryConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}
