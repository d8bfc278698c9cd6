//! One-off fix for the snippets demo code block.
//!
//! The Markdown demo for snippet inclusion has to escape its own include
//! line, otherwise the site generator would expand it while building the
//! page. The rendered page then shows the escape character, so we strip one
//! literal backslash from the demo code block after the fact.
//!
//! The block is located declaratively (nearest code element at or after the
//! section anchor) rather than by fixed child indices, so the fix survives
//! markup reflow between theme versions.

use kuchiki::iter::NodeIterator;
use kuchiki::NodeRef;

fn is_heading(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

/// Remove the first backslash found in the text of `code`.
fn strip_first_backslash(code: &NodeRef) -> bool {
    for text in code.inclusive_descendants().text_nodes() {
        let mut content = text.borrow_mut();
        if content.contains('\\') {
            let stripped = content.replacen('\\', "", 1);
            *content = stripped;
            return true;
        }
    }
    false
}

/// Strip the escape character from the snippets demo under `section_id`.
///
/// No-op when the section anchor, the demo code block, or the backslash is
/// absent; returns whether a character was actually removed.
pub fn strip_snippet_escape(document: &NodeRef, section_id: &str) -> bool {
    let section = match document.select_first(&format!("#{}", section_id)) {
        Ok(section) => section,
        Err(()) => return false,
    };

    let anchor = section.as_node();
    let anchor_tag: &str = &section.name.local;

    // When the id sits on a wrapping section element the demo is inside it.
    if !is_heading(anchor_tag) {
        if let Ok(code) = anchor.select_first("code") {
            return strip_first_backslash(code.as_node());
        }
    }

    // Otherwise the id sits on the section heading and the demo follows it.
    // Stop at the next heading so we never reach into a different section.
    for sibling in anchor.following_siblings().elements() {
        let tag: &str = &sibling.name.local;
        if is_heading(tag) {
            break;
        }
        if let Ok(code) = sibling.as_node().select_first("code") {
            return strip_first_backslash(code.as_node());
        }
    }

    false
}
