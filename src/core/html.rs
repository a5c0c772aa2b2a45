// src/core/html.rs
// Thin helpers over `scraper` so each extraction rule reads as "selector → value".

use scraper::{ ElementRef, Html, Selector };

use super::sanitize::normalize_ws;

/// Parse a built-in selector. Only ever called with literals from `specs`.
pub fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad built-in selector {css:?}: {e}"))
}

/// First match anywhere in the document.
pub fn first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    doc.select(&sel(css)).next()
}

/// First match below `el`.
pub fn first_in<'a>(el: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    el.select(&sel(css)).next()
}

pub fn all<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    doc.select(&sel(css)).collect()
}

/// Concatenated text of `el`, trimmed at the ends only.
pub fn text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Concatenated text with inner whitespace runs collapsed to one space.
pub fn text_ws(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Non-empty trimmed lines, treating each text node as at least one line
/// (so `<br>` separates lines even without a newline in the markup).
pub fn text_lines(el: ElementRef<'_>) -> Vec<String> {
    el.text()
        .flat_map(str::lines)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

pub fn attr(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value().attr(name).map(|v| v.trim().to_string())
}
