// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// "1,234" → 1234. Thousands separators and stray whitespace are ignored.
pub fn parse_count(s: &str) -> Option<u32> {
    let digits: String = s.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    if digits.is_empty() { return None; }
    digits.parse().ok()
}

/// Text before the first `suffix`, trimmed. Whole string if the suffix is absent.
pub fn before<'a>(s: &'a str, suffix: &str) -> &'a str {
    s.split(suffix).next().unwrap_or(s).trim()
}

/// Text after the first `marker`, or None if the marker is absent.
pub fn after<'a>(s: &'a str, marker: &str) -> Option<&'a str> {
    s.split_once(marker).map(|(_, rest)| rest)
}

/// Pull the target out of a CSS `url( '...' )`.
pub fn css_url(style: &str) -> Option<String> {
    let start = style.find("url(")? + "url(".len();
    let end = style[start..].find(')')? + start;
    let inner = style[start..end]
        .trim()
        .trim_matches(|c| c == '\'' || c == '"')
        .trim();
    if inner.is_empty() { None } else { Some(inner.to_string()) }
}
