use std::sync::LazyLock;

use regex::Regex;

use crate::block::{Line, Span};

// Alternation keeps the delimiter kinds paired: `**` only closes `**`.
static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*|__(.*?)__").expect("Invalid bold regex"));

/// Parse markdown text into a list of classified lines
pub fn parse(markdown: &str) -> Vec<Line<'_>> {
    split_lines(markdown).map(classify).collect()
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into physical lines on every line terminator, not just `\n`.
///
/// `\r\n` is a single break, and a terminator at the very end yields no
/// extra empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some((at, c)) = rest.char_indices().find(|&(_, c)| is_line_break(c)) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..at];
        let mut end = at + c.len_utf8();
        if c == '\r' && rest[end..].starts_with('\n') {
            end += 1;
        }
        rest = &rest[end..];
        Some(line)
    })
}

/// Classify one physical line.
///
/// Precedence, highest first: blank, heading, unordered item, ordered item,
/// plain text.
pub fn classify(line: &str) -> Line<'_> {
    let stripped = line.trim();
    if stripped.is_empty() {
        return Line::Blank;
    }

    if line.starts_with('#') {
        let (token, content) = line.split_once(' ').unwrap_or((line, ""));
        return Line::Heading {
            level: token.chars().count(),
            content,
        };
    }

    if let Some(rest) = line.strip_prefix(['*', '-', '+']) {
        return Line::UnorderedItem(rest.trim());
    }

    if has_ordered_marker(stripped) {
        if let Some((_, rest)) = line.split_once('.') {
            return Line::OrderedItem(rest.trim());
        }
    }

    Line::Text(line)
}

/// A digit followed by `.`; anything shorter than two chars is not a marker.
fn has_ordered_marker(stripped: &str) -> bool {
    let mut chars = stripped.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(first), Some('.')) if first.is_ascii_digit()
    )
}

/// Split text into plain and bold spans.
pub fn parse_inline(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in BOLD_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let Some(inner) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Span::Text(&text[last..whole.start()]));
        }
        spans.push(Span::Bold(inner.as_str()));
        last = whole.end();
    }

    if last < text.len() {
        spans.push(Span::Text(&text[last..]));
    }

    spans
}
