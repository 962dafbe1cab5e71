//! Small query layer over `scraper`, shared by the page extractors.
//! Every lookup returns an `Option` so callers pick between defaulting and failing.

use scraper::{ElementRef, Selector};

pub const NOT_AVAILABLE: &str = "N/A";

/// Parses a selector literal. Only used for compile time constants.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css}: {e:?}"))
}

/// Whitespace trimmed text content of an element.
pub fn text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

pub fn first<'a>(scope: &ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

pub fn first_text(scope: &ElementRef, selector: &Selector) -> Option<String> {
    first(scope, selector).map(|e| text(&e))
}

pub fn attr(element: &ElementRef, name: &str) -> Option<String> {
    element.value().attr(name).map(|e| e.trim().to_string())
}

pub fn first_attr(scope: &ElementRef, selector: &Selector, name: &str) -> Option<String> {
    first(scope, selector).and_then(|e| attr(&e, name))
}

pub fn all_text(scope: &ElementRef, selector: &Selector) -> Vec<String> {
    scope.select(selector).map(|e| text(&e)).collect()
}

pub fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
