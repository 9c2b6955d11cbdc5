//! Markup helpers shared by storefront extractors

use crate::CatalogError;
use scraper::{ElementRef, Selector};

/// Compiles a CSS selector, reporting the offending selector on failure
pub fn compile(css: &str) -> Result<Selector, CatalogError> {
    Selector::parse(css).map_err(|e| CatalogError::Selector(format!("'{}': {:?}", css, e)))
}

/// Returns the element's text with whitespace runs collapsed, or None if blank
pub fn element_text(element: ElementRef<'_>) -> Option<String> {
    let text = element.text().collect::<String>();
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Returns the first attribute in `names` holding a usable value
///
/// Empty values and `data:` placeholders (common for lazy-loaded images)
/// are skipped so the next attribute is tried.
pub fn first_attr<'a>(element: ElementRef<'a>, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        element
            .value()
            .attr(name)
            .map(str::trim)
            .filter(|value| !value.is_empty() && !value.starts_with("data:"))
    })
}

/// Returns true if the element's class list contains `class`
pub fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// Returns the first element under `scope` matching any of `selectors`, in order
pub fn select_first<'a>(scope: ElementRef<'a>, selectors: &[&Selector]) -> Option<ElementRef<'a>> {
    selectors
        .iter()
        .find_map(|selector| scope.select(selector).next())
}
