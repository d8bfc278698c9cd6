//! Internationalization (i18n) module.
//!
//! Everything language-related lives here: the validated language-code type
//! and the pure URL-path rewriting logic the selector adapter is built on.
//!
//! # Architecture
//!
//! - `language`: Type-safe two-letter language codes
//! - `paths`: Pure path scanning and link rewriting (no DOM, no I/O)
//!
//! # Example
//!
//! ```rust,ignore
//! use docs_postprocess::i18n::{current_language, link_for_language, LinkAction};
//!
//! let current = current_language("/fr/guide/install/", "en");
//! assert_eq!(current, "fr");
//!
//! match link_for_language("/fr/guide/install/", current, "de", "en") {
//!     LinkAction::Relink(href) => assert_eq!(href, "/de/guide/install/"),
//!     LinkAction::Remove => unreachable!(),
//! }
//! ```

mod language;
mod paths;

pub use language::LanguageCode;
pub use paths::{current_language, link_for_language, LinkAction};
