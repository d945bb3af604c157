// src/core/html.rs
//
// Small, tolerant HTML scanning helpers for saved board pages.
// No DOM: we walk opening tags, read attributes, and find the matching
// close tag by counting same-name nesting. All tag/attribute matching is
// ASCII case-insensitive; byte offsets are shared between `s` and `to_lower(s)`.

use super::sanitize::{normalize_entities, normalize_ws};

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track", "wbr",
];

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Next opening tag at or after `from`: (start of '<', end just past '>').
/// Skips closing tags, comments and doctypes.
pub fn next_open_tag(s: &str, from: usize) -> Option<(usize, usize)> {
    let b = s.as_bytes();
    let mut pos = from;
    while pos < b.len() {
        let lt = s.get(pos..)?.find('<')? + pos;
        let next = b.get(lt + 1).copied();
        if next.is_some_and(|c| c.is_ascii_alphabetic()) {
            let gt = tag_close(s, lt)?;
            return Some((lt, gt + 1));
        }
        if s[lt..].starts_with("<!--") {
            pos = s[lt..].find("-->").map(|e| lt + e + 3)?;
        } else {
            pos = lt + 1;
        }
    }
    None
}

// Index of the '>' that ends the tag starting at `lt`, ignoring '>' in quotes.
fn tag_close(s: &str, lt: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, &c) in s.as_bytes()[lt..].iter().enumerate() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, b'"') | (None, b'\'') => quote = Some(c),
            (None, b'>') => return Some(lt + i),
            _ => {}
        }
    }
    None
}

/// Lower-cased tag name of an opening tag (`<div class=..>` → "div").
pub fn tag_name(open_tag: &str) -> String {
    open_tag
        .trim_start_matches('<')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Attribute value from an opening tag, entity-decoded. Quoted or bare values.
pub fn attr_value(open_tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(open_tag);
    let want = to_lower(name);
    let b = lc.as_bytes();
    let mut from = 0usize;

    while let Some(rel) = lc.get(from..)?.find(&want) {
        let at = from + rel;
        from = at + want.len();

        // Must be a whole attribute name: preceded by whitespace.
        if at == 0 || !b[at - 1].is_ascii_whitespace() {
            continue;
        }
        let mut i = at + want.len();
        while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }
        if b.get(i) != Some(&b'=') {
            continue;
        }
        i += 1;
        while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }

        let raw = match b.get(i) {
            Some(&q) if q == b'"' || q == b'\'' => {
                let end = open_tag[i + 1..].find(q as char)? + i + 1;
                &open_tag[i + 1..end]
            }
            Some(_) => {
                let end = open_tag[i..]
                    .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
                    .map(|e| e + i)
                    .unwrap_or(open_tag.len());
                &open_tag[i..end]
            }
            None => return None,
        };
        return Some(normalize_entities(raw));
    }
    None
}

/// Does the tag's class list contain every name in `classes`?
pub fn has_classes(open_tag: &str, classes: &[&str]) -> bool {
    let Some(list) = attr_value(open_tag, "class") else { return false };
    classes.iter().all(|want| list.split_ascii_whitespace().any(|c| c == *want))
}

/// End (exclusive) of the element whose opening tag spans `start..open_end`.
/// Unclosed elements run to the end of `s`.
pub fn element_end(s: &str, start: usize, open_end: usize) -> usize {
    element_end_in(s, &to_lower(s), start, open_end)
}

// `lc` must be `to_lower(s)`.
fn element_end_in(s: &str, lc: &str, start: usize, open_end: usize) -> usize {
    let open_tag = &s[start..open_end];
    let name = tag_name(open_tag);
    if name.is_empty() || VOID_TAGS.contains(&name.as_str()) || open_tag.ends_with("/>") {
        return open_end;
    }

    let open_pat = join!("<", &name);
    let close_pat = join!("</", &name);
    let mut depth = 1usize;
    let mut pos = open_end;

    while depth > 0 {
        let Some(rel) = lc[pos..].find('<') else { return s.len() };
        let lt = pos + rel;
        let rest = &lc[lt..];
        if rest.starts_with(close_pat.as_str()) && is_name_end(rest.as_bytes().get(close_pat.len())) {
            depth -= 1;
            let gt = rest.find('>').map(|g| lt + g + 1).unwrap_or(s.len());
            if depth == 0 {
                return gt;
            }
            pos = gt;
        } else if rest.starts_with(open_pat.as_str()) && is_name_end(rest.as_bytes().get(open_pat.len())) {
            let gt = tag_close(s, lt).map(|g| g + 1).unwrap_or(s.len());
            if !s[lt..gt].ends_with("/>") {
                depth += 1;
            }
            pos = gt;
        } else {
            pos = lt + 1;
        }
    }
    s.len()
}

fn is_name_end(c: Option<&u8>) -> bool {
    match c {
        None => true,
        Some(c) => c.is_ascii_whitespace() || *c == b'>' || *c == b'/',
    }
}

/// First element at or after `from` carrying all `classes`: (start, end).
pub fn find_by_classes(s: &str, from: usize, classes: &[&str]) -> Option<(usize, usize)> {
    find_by_classes_in(s, &to_lower(s), from, classes)
}

fn find_by_classes_in(s: &str, lc: &str, from: usize, classes: &[&str]) -> Option<(usize, usize)> {
    let mut pos = from;
    while let Some((ts, te)) = next_open_tag(s, pos) {
        if has_classes(&s[ts..te], classes) {
            return Some((ts, element_end_in(s, lc, ts, te)));
        }
        pos = te;
    }
    None
}

/// Every element carrying all `classes`, outermost only.
pub fn find_all_by_classes(s: &str, classes: &[&str]) -> Vec<(usize, usize)> {
    let lc = to_lower(s);
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((start, end)) = find_by_classes_in(s, &lc, pos, classes) {
        out.push((start, end));
        pos = end.max(start + 1);
    }
    out
}

/// First element named `tag` at or after `from`: (start, end).
pub fn find_by_tag(s: &str, from: usize, tag: &str) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let mut pos = from;
    while let Some((ts, te)) = next_open_tag(s, pos) {
        if tag_name(&s[ts..te]) == tag {
            return Some((ts, element_end_in(s, &lc, ts, te)));
        }
        pos = te;
    }
    None
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&normalize_entities(&out))
}

/// Visible text of an element block, whitespace-collapsed and trimmed.
pub fn inner_text(block: &str) -> String {
    strip_tags(inner_after_open_tag(block))
}
