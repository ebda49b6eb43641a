// src/core/sanitize.rs

/// Collapse runs of whitespace (including NBSP) into one space and trim.
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

/// Filesystem-safe slug: alphanumerics and `-` survive, `&` becomes `and`, every
/// other run of characters becomes a single `_`. Leading/trailing `_` dropped.
/// Idempotent: `slugify(slugify(x)) == slugify(x)`.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut gap = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() || ch == '-' {
            if gap && !out.is_empty() { out.push('_'); }
            gap = false;
            out.push(ch);
        } else if ch == '&' {
            if !out.is_empty() { out.push('_'); }
            out.push_str("and");
            gap = true;
        } else {
            gap = true;
        }
    }
    out
}

/// Trim whitespace, quotes and stray separator punctuation from both ends.
pub fn trim_punct(s: &str) -> &str {
    s.trim_matches(|c: char| {
        c.is_whitespace()
            || matches!(c, '"' | '\'' | '\u{201C}' | '\u{201D}' | '\u{2018}' | '\u{2019}'
                | '\u{2014}' | '\u{2013}' | '-' | ',' | ';' | ':' | '*' | '\u{2022}')
    })
}
