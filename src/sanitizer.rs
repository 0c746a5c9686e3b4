// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Markup stripping for user-supplied text.
//!
//! Tags are removed and their text content kept, except for elements whose
//! content never renders as text (scripts, styles, ...), which are dropped
//! whole. Stray angle brackets are entity-encoded, so the output never
//! contains `<` or `>` and sanitizing twice changes nothing.

/// Elements removed together with their content.
const DROP_CONTENT_TAGS: &[&str] = &[
    "script", "style", "template", "iframe", "noscript", "noembed", "noframes", "textarea",
    "title", "xmp",
];

/// Strip all markup from `input`, returning plain text.
pub fn sanitize(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < len {
        match chars[i] {
            '<' if opens_markup(chars.get(i + 1).copied()) => {
                if starts_with(&chars, i, "<!--") {
                    i = match find(&chars, i + 4, "-->") {
                        Some(end) => end + 3,
                        None => len,
                    };
                    continue;
                }

                let (name, closing) = tag_name(&chars, i + 1);
                i = skip_tag(&chars, i + 1);

                if !closing && DROP_CONTENT_TAGS.contains(&name.as_str()) {
                    i = skip_element_content(&chars, i, &name);
                }
            }
            '<' => {
                out.push_str("&lt;");
                i += 1;
            }
            '>' => {
                out.push_str("&gt;");
                i += 1;
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

fn opens_markup(next: Option<char>) -> bool {
    matches!(next, Some(c) if c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'))
}

/// Lowercased tag name starting at `start` (just past `<`), and whether
/// it is a closing tag.
fn tag_name(chars: &[char], start: usize) -> (String, bool) {
    let closing = chars.get(start) == Some(&'/');
    let from = if closing { start + 1 } else { start };
    let name = chars[from.min(chars.len())..]
        .iter()
        .take_while(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    (name, closing)
}

/// Index just past the `>` closing the tag, honoring quoted attribute values.
///
/// A quote opens a value only right after `=`; elsewhere it is plain text.
fn skip_tag(chars: &[char], mut i: usize) -> usize {
    let mut quote: Option<char> = None;
    let mut last = None;
    while i < chars.len() {
        let c = chars[i];
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '>' => return i + 1,
            None if matches!(c, '"' | '\'') && last == Some('=') => quote = Some(c),
            None => {}
        }
        if !c.is_whitespace() {
            last = Some(c);
        }
        i += 1;
    }
    chars.len()
}

/// Index just past `</name ...>`, or the end of input if never closed.
fn skip_element_content(chars: &[char], mut i: usize, name: &str) -> usize {
    while let Some(pos) = find(chars, i, "</") {
        let (candidate, _) = tag_name(chars, pos + 1);
        if candidate == name {
            return skip_tag(chars, pos + 2);
        }
        i = pos + 2;
    }
    chars.len()
}

fn starts_with(chars: &[char], at: usize, pattern: &str) -> bool {
    let mut idx = at;
    for p in pattern.chars() {
        match chars.get(idx) {
            Some(&c) if c == p => idx += 1,
            _ => return false,
        }
    }
    true
}

fn find(chars: &[char], from: usize, pattern: &str) -> Option<usize> {
    (from..chars.len()).find(|&i| starts_with(chars, i, pattern))
}
