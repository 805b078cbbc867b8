//! CSS selector parsing and lookup utilities.

use scraper::{Html, Selector};

/// Parses a CSS selector with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches nothing
/// (`*:not(*)`). This prevents panics while allowing the code to continue.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "title extraction")
///
/// # Returns
///
/// A parsed `Selector`, or a fallback selector that matches nothing if parsing fails.
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        parse_selector_unsafe("*:not(*)", "fallback selector")
    })
}

/// Parses a CSS selector that must succeed (for compile-time constants).
///
/// # Panics
///
/// Panics if the selector cannot be parsed (indicates a programming error).
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

/// Returns `attr` of the first element matching `selector`.
///
/// Only the first match is consulted, so a later element carrying the
/// attribute is ignored when the first one lacks it.
pub fn first_attr(document: &Html, selector: &Selector, attr: &str) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(str::to_string)
}

/// Returns the concatenated text of the first element matching `selector`.
pub fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>())
}

/// Evaluates lookups in order and returns the first non-empty value.
///
/// Lookups after the winning one are never called. Returns an empty string
/// when every lookup misses or yields `""`.
pub fn first_non_empty<'a, I>(lookups: I) -> String
where
    I: IntoIterator<Item = &'a dyn Fn() -> Option<String>>,
{
    lookups
        .into_iter()
        .find_map(|lookup| lookup().filter(|value| !value.is_empty()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_fallback_selector_matches_nothing() {
        let selector = parse_selector_with_fallback("meta[", "test");
        let document = Html::parse_document("<html><head><meta name='a'></head></html>");
        assert_eq!(document.select(&selector).count(), 0);
    }

    #[test]
    fn test_first_attr_only_consults_first_match() {
        let document = Html::parse_document(
            r#"<html><head><meta name="x"><meta name="x" content="second"></head></html>"#,
        );
        let selector = parse_selector_unsafe(r#"meta[name="x"]"#, "test");
        assert_eq!(first_attr(&document, &selector, "content"), None);
    }

    #[test]
    fn test_first_text_concatenates_children() {
        let document =
            Html::parse_document("<html><body><p>a<b>b</b>c</p><p>d</p></body></html>");
        let selector = parse_selector_unsafe("p", "test");
        assert_eq!(first_text(&document, &selector).as_deref(), Some("abc"));
    }

    #[test]
    fn test_first_non_empty_skips_empty_and_stops_early() {
        let calls = Cell::new(0);
        let empty = || -> Option<String> {
            calls.set(calls.get() + 1);
            Some(String::new())
        };
        let hit = || -> Option<String> {
            calls.set(calls.get() + 1);
            Some("hit".to_string())
        };
        let never = || -> Option<String> {
            calls.set(calls.get() + 100);
            Some("never".to_string())
        };
        let lookups: [&dyn Fn() -> Option<String>; 3] = [&empty, &hit, &never];
        assert_eq!(first_non_empty(lookups), "hit");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_first_non_empty_defaults_to_empty_string() {
        let miss = || -> Option<String> { None };
        let lookups: [&dyn Fn() -> Option<String>; 1] = [&miss];
        assert_eq!(first_non_empty(lookups), "");
    }
}
