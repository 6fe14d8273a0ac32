//! Theme loading and placeholder substitution.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::content::ContentPage;

/// Template file every theme must provide.
pub const TEMPLATE_FILE: &str = "index.html";

/// Extension template files carry; watch events are filtered on it.
pub const TEMPLATE_EXT: &str = "html";

/// Literal token replaced with the page title.
pub const TITLE_TOKEN: &str = "{{ Title }}";

/// Literal token replaced with the rendered page body.
pub const CONTENT_TOKEN: &str = "{{ Content }}";

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("no theme found at {0:?}")]
    NoThemeFound(PathBuf),

    #[error("multiple themes in {dir:?} ({found:?}); pick one with --theme")]
    AmbiguousTheme { dir: PathBuf, found: Vec<String> },

    #[error("failed to read template {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
}

/// One theme: a name and the raw template text it provides.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub template: String,
}

/// Load the theme to build with.
///
/// With a name, that theme is loaded; without one, a sole theme is picked
/// automatically. Zero themes or an unknown name is `NoThemeFound`; more
/// than one theme and no name is `AmbiguousTheme` rather than whatever
/// order the directory listing happens to return.
pub fn load_theme(themes_dir: &Path, name: Option<&str>) -> Result<Theme, ThemeError> {
    let available = list_theme_names(themes_dir);

    let chosen = match name {
        Some(name) if available.iter().any(|t| t == name) => name.to_string(),
        Some(name) => return Err(ThemeError::NoThemeFound(themes_dir.join(name))),
        None => match available.as_slice() {
            [] => return Err(ThemeError::NoThemeFound(themes_dir.to_path_buf())),
            [only] => only.clone(),
            _ => {
                return Err(ThemeError::AmbiguousTheme {
                    dir: themes_dir.to_path_buf(),
                    found: available,
                })
            }
        },
    };

    let template_path = themes_dir.join(&chosen).join(TEMPLATE_FILE);
    let template = fs::read_to_string(&template_path).map_err(|source| ThemeError::Read {
        path: template_path,
        source,
    })?;

    Ok(Theme {
        name: chosen,
        template,
    })
}

fn list_theme_names(themes_dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(themes_dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().to_str().map(String::from))
        .collect();
    names.sort();
    names
}

/// Substitute every occurrence of the title and content tokens.
///
/// Plain literal replacement, no escaping, no nesting. A token missing
/// from the template just leaves that value out; not an error.
pub fn render_page(theme: &Theme, page: &ContentPage) -> String {
    theme
        .template
        .replace(TITLE_TOKEN, &page.title)
        .replace(CONTENT_TOKEN, &page.html)
}
