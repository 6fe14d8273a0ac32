//! Build command implementation.

use super::load_config;
use anyhow::{Context, Result};
use ccsg_core::SiteBuilder;
use std::path::Path;

/// Run one full build pass and report what it did.
pub fn build_site(config_path: &Path, theme: Option<&str>) -> Result<()> {
    let mut config = load_config(config_path)?;
    if theme.is_some() {
        config.theme = theme.map(str::to_string);
    }

    let report = SiteBuilder::new(config)
        .build_once()
        .context("Failed to build site")?;

    println!("🔄 Site rebuilt: {} pages", report.written.len());
    for failure in &report.failures {
        eprintln!("  ✗ {:?}: {}", failure.path, failure.error);
    }

    Ok(())
}
