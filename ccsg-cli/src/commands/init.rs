//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

const SEED_PAGE: &str = "# Home\n\nWelcome to your new static site!";

/// Create a new site directory with a seed content file.
pub fn init_site(name: &Path) -> Result<()> {
    if name.exists() {
        bail!("Site {:?} already exists", name);
    }

    let content_dir = name.join("content");
    fs::create_dir_all(&content_dir)
        .with_context(|| format!("Failed to create {content_dir:?}"))?;
    fs::write(content_dir.join("index.md"), SEED_PAGE).context("Failed to write seed page")?;

    println!("✅ Site {:?} initialized", name);
    println!("   Next: `ccsg new theme default`, then `ccsg serve`");
    Ok(())
}
