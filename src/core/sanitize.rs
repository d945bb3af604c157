// src/core/sanitize.rs

/// Decode the handful of entities board markup actually uses.
/// `&amp;` goes last so "&amp;lt;" stays "&lt;".
pub fn normalize_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
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

/// One spreadsheet cell: tabs and line breaks would split the row, so any
/// whitespace run becomes a single space.
pub fn clean_cell(s: &str) -> String {
    if s.contains(['\t', '\n', '\r']) { normalize_ws(s) } else { s.to_string() }
}

/// Trailing ASCII digits of `s` (work item id at the end of a card href).
pub fn trailing_digits(s: &str) -> Option<&str> {
    let start = s
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    Some(&s[start..])
}
