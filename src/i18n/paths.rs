//! Language-path rewriting: the pure core of the selector fix.
//!
//! Everything in this module operates on URL path strings only, so the
//! rewrite decisions can be tested without touching any HTML. The DOM-side
//! adapter lives in `crate::selector`.

/// Decision for a single selector entry.
///
/// Either the entry denotes the page's active language and must be removed,
/// or it gets relinked to the equivalent page in the entry's language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// The entry's language is the page's current language; drop it from the
    /// selector (the active language is never offered as a choice).
    Remove,
    /// Rewrite the entry's href to the contained URL path.
    Relink(String),
}

/// Whether a path segment looks like a language code (exactly two characters).
fn is_language_segment(segment: &str) -> bool {
    segment.chars().count() == 2
}

/// Index of the language segment within the split path, if any.
///
/// Segments are scanned from index 1 onward; the leading segment is the root
/// prefix (empty for absolute URL paths) and never a language code.
fn language_segment_index(segments: &[&str]) -> Option<usize> {
    segments
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, segment)| is_language_segment(segment))
        .map(|(index, _)| index)
}

/// Determine the language of the page at `path`.
///
/// Splits the path on `/` and scans segments from index 1 onward, returning
/// the first segment of exactly two characters. The language segment may sit
/// at any position (sites hosted under a subpath place it after the prefix).
///
/// Never fails: returns `default_language` for the root path and for paths
/// carrying no language segment.
pub fn current_language<'a>(path: &'a str, default_language: &'a str) -> &'a str {
    path.split('/')
        .skip(1)
        .find(|segment| is_language_segment(segment))
        .unwrap_or(default_language)
}

/// Compute what should happen to a selector entry for `target` on the page
/// at `path`.
///
/// `current` must be the value of [`current_language`] for the same path;
/// it is taken as an argument so a caller evaluating many entries resolves
/// it once.
///
/// The returned `Relink` path always preserves the root prefix (segments
/// before the language segment) and appends the remainder of the path
/// unconditionally, so directory-style URLs keep their trailing slash.
pub fn link_for_language(
    path: &str,
    current: &str,
    target: &str,
    default_language: &str,
) -> LinkAction {
    let segments: Vec<&str> = path.split('/').collect();

    if current == default_language {
        // Page is in the default language: no language segment in the path.
        if target == default_language {
            return LinkAction::Remove;
        }
        let root = segments.first().copied().unwrap_or("");
        let remainder = segments.get(1..).unwrap_or(&[]).join("/");
        return LinkAction::Relink(format!("{}/{}/{}", root, target, remainder));
    }

    if target == current {
        return LinkAction::Remove;
    }

    // The path carries a language segment; splice around its scanned index.
    let language_index = language_segment_index(&segments).unwrap_or(1);
    let root = segments[..language_index].join("/");
    let remainder = segments.get(language_index + 1..).unwrap_or(&[]).join("/");

    if target == default_language {
        // The default language has no path prefix at all.
        LinkAction::Relink(format!("{}/{}", root, remainder))
    } else {
        LinkAction::Relink(format!("{}/{}/{}", root, target, remainder))
    }
}
