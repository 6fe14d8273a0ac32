//! CLI command implementations.

mod build;
mod init;
mod new;
mod serve;

pub use build::build_site;
pub use init::init_site;
pub use new::{create_page, create_theme};
pub use serve::serve_site;

use anyhow::{Context, Result};
use ccsg_core::Config;
use std::path::Path;

/// Load `ccsg.yml` when present, otherwise defaults rooted at the current
/// directory. The root is resolved here, once; the core never consults the
/// working directory itself.
pub(crate) fn load_config(config_path: &Path) -> Result<Config> {
    if config_path.exists() {
        Config::from_file(config_path).with_context(|| format!("Failed to load {config_path:?}"))
    } else {
        Ok(Config::with_root("."))
    }
}
