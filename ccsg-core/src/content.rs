//! Content discovery and page loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Extension of markup source files.
pub const MARKUP_EXT: &str = "md";

/// Title used when a page has no level-1 heading.
pub const UNTITLED: &str = "Untitled";

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content directory {0:?} is missing or unreadable")]
    Unavailable(PathBuf),

    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
}

/// One markup source file and what was derived from it.
///
/// Built fresh from disk on every pass and discarded when the pass ends;
/// never mutated after the builder fills in `html`.
#[derive(Debug, Clone)]
pub struct ContentPage {
    /// Path relative to the content directory
    pub rel_path: PathBuf,
    /// Raw markup text as read from disk
    pub raw: String,
    /// Title from the first level-1 heading, or "Untitled"
    pub title: String,
    /// Rendered HTML fragment
    pub html: String,
}

impl ContentPage {
    /// Artifact path for this page: the source path with the extension
    /// swapped to `.html`.
    pub fn output_rel_path(&self) -> PathBuf {
        self.rel_path.with_extension("html")
    }
}

/// List every markup file under the content directory.
///
/// Recursive, restricted to [`MARKUP_EXT`], sorted so that reports and
/// builds are deterministic. A missing or unreadable directory is
/// [`ContentError::Unavailable`]; the caller decides whether that aborts.
pub fn list_content_files(content_dir: &Path) -> Result<Vec<PathBuf>, ContentError> {
    if !content_dir.is_dir() {
        return Err(ContentError::Unavailable(content_dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(content_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == MARKUP_EXT))
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();

    Ok(files)
}

/// Read one source file and extract its title.
pub fn load_page(content_dir: &Path, path: &Path) -> Result<ContentPage, ContentError> {
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let rel_path = path
        .strip_prefix(content_dir)
        .unwrap_or(path)
        .to_path_buf();
    let title = extract_title(&raw);

    Ok(ContentPage {
        rel_path,
        raw,
        title,
        html: String::new(),
    })
}

/// First line beginning with a single `# ` is the title, marker stripped
/// and the rest kept verbatim. No such line means [`UNTITLED`].
pub fn extract_title(raw: &str) -> String {
    raw.lines()
        .find_map(|line| line.strip_prefix("# "))
        .unwrap_or(UNTITLED)
        .to_string()
}
