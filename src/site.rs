//! Walks the built site tree and applies both fixes to every HTML page.
//!
//! One synchronous pass, one page at a time. A page that fails to read or
//! write back is logged and skipped; the run keeps going and only the final
//! report shows the failure.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use kuchiki::traits::TendrilSink;
use kuchiki::NodeRef;
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::report::ProcessingReport;
use crate::selector::{rewrite_language_selector, SelectorOutcome};
use crate::snippets::strip_snippet_escape;

/// A page-level failure. The run continues past these.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {path}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Derive the URL path a built page is served under.
///
/// Directory-style URLs: `fr/guide/install/index.html` is served at
/// `/fr/guide/install/` and the site root `index.html` at `/`. Any other
/// file maps to its literal relative path with a leading slash.
pub fn url_path_for(site_dir: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(site_dir).ok()?;
    let mut segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    let directory_url = segments.last().map(|s| s == "index.html").unwrap_or(false);
    if directory_url {
        segments.pop();
    }

    let mut path = String::from("/");
    path.push_str(&segments.join("/"));
    if directory_url && !segments.is_empty() {
        path.push('/');
    }
    Some(path)
}

/// Apply both fixes to one page, writing the result back in place.
///
/// Returns what changed; nothing is written when the page is untouched or
/// the run is a dry run.
pub fn process_page(
    config: &Config,
    file: &Path,
    page_path: &str,
) -> Result<(SelectorOutcome, bool), PageError> {
    let html = std::fs::read_to_string(file).map_err(|source| PageError::Read {
        path: file.to_path_buf(),
        source,
    })?;

    let document = kuchiki::parse_html().one(html);

    let selector_outcome = if config.is_local_file_site() {
        // Relative-path assumptions do not hold for file:// browsing; leave
        // the selector exactly as generated.
        SelectorOutcome::default()
    } else {
        rewrite_language_selector(
            &document,
            page_path,
            &config.selector_item_class,
            config.default_language.as_str(),
        )
    };

    let snippet_fixed = strip_snippet_escape(&document, &config.snippet_section_id);

    if !selector_outcome.changed() && !snippet_fixed {
        return Ok((selector_outcome, snippet_fixed));
    }

    debug!(
        "page {}: {} links rewritten, {} entries removed, snippet fixed: {}",
        page_path,
        selector_outcome.links_rewritten,
        selector_outcome.entries_removed,
        snippet_fixed
    );

    if !config.dry_run {
        write_document(&document, file)?;
    }

    Ok((selector_outcome, snippet_fixed))
}

fn write_document(document: &NodeRef, file: &Path) -> Result<(), PageError> {
    let mut output = Vec::new();
    document
        .serialize(&mut output)
        .map_err(|source| PageError::Serialize {
            path: file.to_path_buf(),
            source,
        })?;
    std::fs::write(file, output).map_err(|source| PageError::Write {
        path: file.to_path_buf(),
        source,
    })
}

/// Process every HTML page under the configured site directory.
pub fn process_site(config: &Config) -> Result<ProcessingReport> {
    if !config.site_dir.is_dir() {
        bail!(
            "site directory {} does not exist or is not a directory",
            config.site_dir.display()
        );
    }

    let mut report = ProcessingReport::default();

    for entry in WalkDir::new(&config.site_dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry: {}", err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let is_html = entry
            .path()
            .extension()
            .map(|ext| ext == "html")
            .unwrap_or(false);
        if !is_html {
            continue;
        }

        let page_path = match url_path_for(&config.site_dir, entry.path()) {
            Some(path) => path,
            None => continue,
        };

        match process_page(config, entry.path(), &page_path) {
            Ok((selector_outcome, snippet_fixed)) => {
                report.record_page(selector_outcome, snippet_fixed);
            }
            Err(err) => {
                warn!("{}", err);
                report.record_failure();
            }
        }
    }

    Ok(report)
}
