//! # ccsg-core
//!
//! Core library for the ccsg static site generator.
//!
//! This crate provides the build pipeline: content discovery, markdown
//! rendering, theme/template substitution, and the orchestration that turns
//! a `content/` tree into artifacts under `public/`.

pub mod builder;
pub mod config;
pub mod content;
pub mod markdown;
pub mod theme;

pub use builder::{BuildError, BuildFailure, BuildReport, PageError, SiteBuilder};
pub use config::{Config, ConfigError, ServerConfig};
pub use content::{ContentError, ContentPage, MARKUP_EXT};
pub use markdown::MarkdownRenderer;
pub use theme::{Theme, ThemeError, TEMPLATE_EXT};
