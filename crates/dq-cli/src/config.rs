//! Configuration layering: defaults, then the JSON file, then flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dq_core::SimConfig;
use tracing::debug;

use crate::args::Args;

/// Read a `SimConfig` from a JSON file.
pub fn load_config_file(path: &Path) -> Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

/// Build the effective configuration for one run.
pub fn resolve(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => SimConfig::default(),
    };
    args.apply_overrides(&mut config);
    config.validate().context("invalid configuration")?;
    debug!(?config, "configuration resolved");
    Ok(config)
}
