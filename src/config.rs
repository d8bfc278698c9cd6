use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::i18n::LanguageCode;

#[derive(Debug, Clone)]
pub struct Config {
    // Site tree
    pub site_dir: PathBuf,

    // Languages
    pub default_language: LanguageCode,

    // Deployment
    pub site_scheme: String,

    // Markup hooks
    pub selector_item_class: String,
    pub snippet_section_id: String,

    // Behavior
    pub dry_run: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Root of the built site (the directory holding the generated HTML)
            site_dir: std::env::var("SITE_DIR")
                .context("SITE_DIR not set")?
                .into(),

            // Language without a path prefix
            default_language: LanguageCode::new(
                &std::env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "en".to_string()),
            )
            .context("DEFAULT_LANGUAGE is not a valid language code")?,

            // Scheme the site will be browsed under; "file" disables the
            // selector rewrite entirely
            site_scheme: std::env::var("SITE_SCHEME").unwrap_or_else(|_| "https".to_string()),

            // Markup hooks (theme defaults)
            selector_item_class: std::env::var("SELECTOR_ITEM_CLASS")
                .unwrap_or_else(|_| "md-select__item".to_string()),
            snippet_section_id: std::env::var("SNIPPET_SECTION_ID")
                .unwrap_or_else(|_| "pymdownxsnippets".to_string()),

            // Behavior
            dry_run: std::env::var("DRY_RUN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        })
    }

    /// Whether the site is meant for local file browsing (no web server).
    ///
    /// Path rewriting assumes server-absolute URLs, so the selector rewrite
    /// is skipped wholesale in this mode.
    pub fn is_local_file_site(&self) -> bool {
        self.site_scheme == "file"
    }
}
