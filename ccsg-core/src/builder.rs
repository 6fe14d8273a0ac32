//! Site building logic - orchestrates loading, rendering, and output.

use crate::config::Config;
use crate::content::{self, ContentError};
use crate::markdown::MarkdownRenderer;
use crate::theme::{self, Theme, ThemeError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors fatal to a whole build pass.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error("failed to create output directory {path:?}: {source}")]
    OutputDir { path: PathBuf, source: io::Error },
}

/// Errors scoped to a single page; collected, never fatal to the pass.
#[derive(Error, Debug)]
pub enum PageError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("failed to write {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// What one build pass did.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Output-relative paths of artifacts written this pass
    pub written: Vec<PathBuf>,
    /// Per-file failures; the rest of the pass still ran
    pub failures: Vec<BuildFailure>,
}

#[derive(Debug)]
pub struct BuildFailure {
    pub path: PathBuf,
    pub error: PageError,
}

/// Full-tree site builder.
pub struct SiteBuilder {
    config: Config,
    renderer: MarkdownRenderer,
}

impl SiteBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Run one full build pass over the content tree.
    ///
    /// A missing or ambiguous theme fails the pass; an unavailable content
    /// directory is reported and yields an empty report. Each page builds
    /// independently: one page failing to read, render, or write is recorded
    /// and the remaining pages still build. Artifacts are overwritten by
    /// name; artifacts whose source has since been deleted are left on disk
    /// (`public/` is never pruned).
    ///
    /// Two passes over unchanged inputs write byte-identical artifacts.
    pub fn build_once(&self) -> Result<BuildReport, BuildError> {
        let theme = theme::load_theme(&self.config.themes_dir(), self.config.theme.as_deref())?;

        let content_dir = self.config.content_dir();
        let files = match content::list_content_files(&content_dir) {
            Ok(files) => files,
            Err(err) => {
                tracing::warn!("{err}; nothing to build");
                return Ok(BuildReport::default());
            }
        };

        let output_dir = self.config.output_dir();
        fs::create_dir_all(&output_dir).map_err(|source| BuildError::OutputDir {
            path: output_dir.clone(),
            source,
        })?;

        tracing::info!("Building {} pages with theme '{}'", files.len(), theme.name);

        let mut report = BuildReport::default();
        for file in &files {
            match self.build_page(&theme, &content_dir, &output_dir, file) {
                Ok(rel_path) => report.written.push(rel_path),
                Err(error) => {
                    tracing::error!("Failed to build {:?}: {}", file, error);
                    report.failures.push(BuildFailure {
                        path: file.clone(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            "Wrote {} artifacts ({} failures)",
            report.written.len(),
            report.failures.len()
        );

        Ok(report)
    }

    /// Build one page: load, render markup, substitute into the template,
    /// write the artifact.
    fn build_page(
        &self,
        theme: &Theme,
        content_dir: &Path,
        output_dir: &Path,
        file: &Path,
    ) -> Result<PathBuf, PageError> {
        let mut page = content::load_page(content_dir, file)?;
        page.html = self.renderer.render(&page.raw);

        let final_html = theme::render_page(theme, &page);
        let rel_path = page.output_rel_path();
        let out_path = output_dir.join(&rel_path);

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|source| PageError::Write {
                path: out_path.clone(),
                source,
            })?;
        }

        write_atomic(&out_path, &final_html).map_err(|source| PageError::Write {
            path: out_path.clone(),
            source,
        })?;

        Ok(rel_path)
    }
}

/// Write the whole artifact to a temporary sibling, then rename it into
/// place. A concurrent reader (the dev server) never observes a torn file
/// under its final name.
fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}
