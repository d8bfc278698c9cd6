//! Post-processing for built multilingual documentation sites.
//!
//! Static-site generators with a theme language selector render the same
//! dropdown markup into every page; the hrefs only make sense once the
//! page's own language is known. This crate walks the generated HTML tree
//! and, per page, removes the selector entry for the page's active language,
//! rewrites the remaining entries to the equivalent page in their language,
//! and strips the leftover escape character from the snippets demo block.
//!
//! The rewrite decisions themselves are pure path logic (see [`i18n`]);
//! [`selector`] and [`snippets`] adapt them to HTML, and [`site`] drives the
//! pass over the site tree.

pub mod config;
pub mod i18n;
pub mod report;
pub mod selector;
pub mod site;
pub mod snippets;
