//! Theme and page scaffolding.

use super::load_config;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

const STOCK_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>{{ Title }}</title>
</head>
<body>
  {{ Content }}
</body>
</html>
"#;

/// Create `themes/<name>/index.html` with the stock template.
pub fn create_theme(config_path: &Path, name: &str) -> Result<()> {
    let config = load_config(config_path)?;
    let theme_dir = config.themes_dir().join(name);
    if theme_dir.exists() {
        bail!("Theme '{}' already exists", name);
    }

    fs::create_dir_all(&theme_dir).with_context(|| format!("Failed to create {theme_dir:?}"))?;
    fs::write(theme_dir.join("index.html"), STOCK_TEMPLATE)
        .context("Failed to write template")?;

    println!("✅ Theme '{}' created", name);
    Ok(())
}

/// Create a content stub at `content/<name>.md`.
pub fn create_page(config_path: &Path, name: &str) -> Result<()> {
    let config = load_config(config_path)?;
    let content_dir = config.content_dir();
    if !content_dir.is_dir() {
        bail!(
            "Content directory {:?} not found; run `ccsg init` first",
            content_dir
        );
    }

    let page_path = content_dir.join(format!("{name}.md"));
    if page_path.exists() {
        bail!("Page '{}' already exists", name);
    }

    fs::write(&page_path, page_stub(name))
        .with_context(|| format!("Failed to write {page_path:?}"))?;

    println!("✅ Page '{}' created", name);
    Ok(())
}

fn page_stub(name: &str) -> String {
    let mut title = name.to_string();
    if let Some(first) = title.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    format!("# {title}\n\nWrite your content here.")
}
