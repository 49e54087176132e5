// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

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

/// Characters we refuse to put in a file name: path separators,
/// quoting, and anything a shell might chew on.
const UNSAFE: &str = "?:/\\\"'\t\n\r!@#$%&<>{}|=+`";

/// Strip troublesome characters from a title before it becomes a file stem.
pub fn cleanse(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for ch in title.chars() {
        if !UNSAFE.contains(ch) {
            out.push(ch);
        }
    }
    normalize_ws(&out)
}
