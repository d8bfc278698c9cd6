//! Language-selector rewrite: the HTML adapter over `crate::i18n`.
//!
//! The selector dropdown is a list of items (one stable class name), each
//! wrapping a link that carries the entry's language in a `hreflang`
//! attribute. For the page's own language the item is removed; every other
//! entry gets its href rewritten to the equivalent page in that language.

use kuchiki::NodeRef;

use crate::i18n::{current_language, link_for_language, LinkAction};

/// Counts of what a single selector rewrite changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorOutcome {
    /// Links whose href was rewritten
    pub links_rewritten: usize,
    /// Items removed because they matched the active language
    pub entries_removed: usize,
}

impl SelectorOutcome {
    /// Whether the rewrite touched the document at all.
    pub fn changed(&self) -> bool {
        self.links_rewritten > 0 || self.entries_removed > 0
    }
}

/// Rewrite the language selector of `document` for the page at `page_path`.
///
/// Items are evaluated first and detached afterwards, so the item list is
/// never mutated while it is being iterated. Items without a `hreflang`
/// link are left untouched; a page without a selector yields an empty
/// outcome.
///
/// The caller is responsible for the local-file guard: pages meant for
/// `file://` browsing must not be passed here at all, since absolute-path
/// rewriting assumptions do not hold there.
pub fn rewrite_language_selector(
    document: &NodeRef,
    page_path: &str,
    item_class: &str,
    default_language: &str,
) -> SelectorOutcome {
    let mut outcome = SelectorOutcome::default();

    let items = match document.select(&format!(".{}", item_class)) {
        Ok(items) => items,
        Err(()) => return outcome,
    };

    let current = current_language(page_path, default_language).to_string();
    let mut items_to_remove = Vec::new();

    for item in items {
        let link = match item.as_node().select_first("a[hreflang]") {
            Ok(link) => link,
            Err(()) => continue,
        };

        let target = match link.attributes.borrow().get("hreflang") {
            Some(value) => value.to_string(),
            None => continue,
        };

        match link_for_language(page_path, &current, &target, default_language) {
            LinkAction::Remove => items_to_remove.push(item.as_node().clone()),
            LinkAction::Relink(href) => {
                link.attributes.borrow_mut().insert("href", href);
                outcome.links_rewritten += 1;
            }
        }
    }

    for item in items_to_remove {
        item.detach();
        outcome.entries_removed += 1;
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuchiki::traits::TendrilSink;

    const ITEM_CLASS: &str = "md-select__item";

    fn parse(html: &str) -> NodeRef {
        kuchiki::parse_html().one(html)
    }

    fn selector_html() -> String {
        r#"<ul class="md-select__list">
            <li class="md-select__item"><a class="md-select__link" hreflang="en" href="">English</a></li>
            <li class="md-select__item"><a class="md-select__link" hreflang="fr" href="">Français</a></li>
            <li class="md-select__item"><a class="md-select__link" hreflang="de" href="">Deutsch</a></li>
        </ul>"#
            .to_string()
    }

    fn href_for(document: &NodeRef, lang: &str) -> Option<String> {
        let selector = format!("a[hreflang=\"{}\"]", lang);
        document
            .select_first(&selector)
            .ok()
            .and_then(|link| link.attributes.borrow().get("href").map(str::to_string))
    }

    #[test]
    fn test_default_language_page() {
        let document = parse(&selector_html());
        let outcome = rewrite_language_selector(&document, "/guide/install/", ITEM_CLASS, "en");

        assert_eq!(outcome.links_rewritten, 2);
        assert_eq!(outcome.entries_removed, 1);
        assert!(href_for(&document, "en").is_none());
        assert_eq!(href_for(&document, "fr").unwrap(), "/fr/guide/install/");
        assert_eq!(href_for(&document, "de").unwrap(), "/de/guide/install/");
    }

    #[test]
    fn test_translated_page() {
        let document = parse(&selector_html());
        let outcome = rewrite_language_selector(&document, "/fr/guide/install/", ITEM_CLASS, "en");

        assert_eq!(outcome.links_rewritten, 2);
        assert_eq!(outcome.entries_removed, 1);
        assert!(href_for(&document, "fr").is_none());
        assert_eq!(href_for(&document, "en").unwrap(), "/guide/install/");
        assert_eq!(href_for(&document, "de").unwrap(), "/de/guide/install/");
    }

    #[test]
    fn test_page_without_selector() {
        let document = parse("<p>no dropdown here</p>");
        let outcome = rewrite_language_selector(&document, "/guide/", ITEM_CLASS, "en");

        assert_eq!(outcome, SelectorOutcome::default());
        assert!(!outcome.changed());
    }

    #[test]
    fn test_item_without_hreflang_link_is_skipped() {
        let html = r#"<ul>
            <li class="md-select__item"><a href="/somewhere">no hreflang</a></li>
            <li class="md-select__item"><a hreflang="fr" href="">Français</a></li>
        </ul>"#;
        let document = parse(html);
        let outcome = rewrite_language_selector(&document, "/guide/", ITEM_CLASS, "en");

        assert_eq!(outcome.links_rewritten, 1);
        assert_eq!(outcome.entries_removed, 0);
        assert_eq!(
            document
                .select_first("a[href=\"/somewhere\"]")
                .unwrap()
                .attributes
                .borrow()
                .get("href")
                .unwrap(),
            "/somewhere"
        );
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let document = parse(&selector_html());
        rewrite_language_selector(&document, "/guide/install/", ITEM_CLASS, "en");
        let first = document.to_string();

        let reparsed = parse(&first);
        rewrite_language_selector(&reparsed, "/guide/install/", ITEM_CLASS, "en");
        assert_eq!(reparsed.to_string(), first);
    }

    #[test]
    fn test_custom_item_class() {
        let html = r#"<li class="lang-choice"><a hreflang="fr" href="">Français</a></li>"#;
        let document = parse(html);
        let outcome = rewrite_language_selector(&document, "/guide/", "lang-choice", "en");

        assert_eq!(outcome.links_rewritten, 1);
        assert_eq!(href_for(&document, "fr").unwrap(), "/fr/guide/");
    }
}
