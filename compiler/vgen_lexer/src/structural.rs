//! The structural field-list lexer.
//!
//! Tracks nesting over `()`, `[]`, `{}` and `<>` and skips over string and
//! character literals, so only top-level commas end a field. The label colon
//! is the first single `:` at depth zero; `::` path separators are never
//! taken as the label colon.
//!
//! All delimiters are ASCII, so scanning works on bytes and every split
//! position falls on a `char` boundary.

use vgen_ir::FieldSpec;

use crate::strip_parens;

pub(crate) fn parse(clause: &str) -> Vec<FieldSpec> {
    let inner = strip_parens(clause);
    if inner.trim().is_empty() {
        return Vec::new();
    }

    let mut segments = split_top_level(inner);
    // A trailing comma is ordinary Rust punctuation, not an empty field.
    if segments.len() > 1 && segments.last().is_some_and(|s| s.trim().is_empty()) {
        segments.pop();
    }
    segments.into_iter().map(field_from_segment).collect()
}

fn field_from_segment(segment: &str) -> FieldSpec {
    match find_label_colon(segment) {
        Some(pos) => FieldSpec::new(segment[..pos].trim(), segment[pos + 1..].trim()),
        None => FieldSpec::unlabeled(segment.trim()),
    }
}

/// Split on commas at depth zero.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut scanner = Scanner::new(text);
    let mut start = 0;
    while let Some((pos, byte)) = scanner.next_significant() {
        if byte == b',' && scanner.depth == 0 {
            segments.push(&text[start..pos]);
            start = pos + 1;
        }
    }
    segments.push(&text[start..]);
    segments
}

/// Byte offset of the label colon, if the segment has one.
fn find_label_colon(segment: &str) -> Option<usize> {
    let bytes = segment.as_bytes();
    let mut scanner = Scanner::new(segment);
    while let Some((pos, byte)) = scanner.next_significant() {
        if byte != b':' || scanner.depth != 0 {
            continue;
        }
        if bytes.get(pos + 1) == Some(&b':') {
            // `::` path separator; consume both halves.
            scanner.skip(1);
            continue;
        }
        return Some(pos);
    }
    None
}

/// Byte scanner that reports delimiter bytes outside literals and keeps the
/// current nesting depth.
struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    /// Nesting depth after the byte most recently returned.
    depth: u32,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Scanner {
            text,
            pos: 0,
            depth: 0,
        }
    }

    fn bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    fn skip(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.text.len());
    }

    /// Advance to the next byte that is not inside a literal, updating the
    /// depth for openers and closers. Closers never drive depth below zero.
    fn next_significant(&mut self) -> Option<(usize, u8)> {
        loop {
            let pos = self.pos;
            let byte = *self.bytes().get(pos)?;
            self.pos += 1;
            match byte {
                b'"' => self.skip_string(),
                b'\'' if self.skip_char_literal() => {}
                b'(' | b'[' | b'{' | b'<' => {
                    self.depth += 1;
                    return Some((pos, byte));
                }
                // `->` in a function type is not a closing angle bracket.
                b'>' if pos > 0 && self.bytes()[pos - 1] == b'-' => return Some((pos, byte)),
                b')' | b']' | b'}' | b'>' => {
                    self.depth = self.depth.saturating_sub(1);
                    return Some((pos, byte));
                }
                _ => return Some((pos, byte)),
            }
        }
    }

    /// Skip to just past the closing quote of a string literal. An
    /// unterminated literal runs to the end of the text.
    fn skip_string(&mut self) {
        let bytes = self.bytes();
        while let Some(&byte) = bytes.get(self.pos) {
            self.pos += 1;
            match byte {
                b'\\' => self.skip(1),
                b'"' => return,
                _ => {}
            }
        }
    }

    /// Skip a character literal starting just after its opening quote.
    ///
    /// Returns `false`, consuming nothing, when the quote starts a lifetime
    /// such as `'a` or `'static` instead.
    fn skip_char_literal(&mut self) -> bool {
        let rest = &self.text[self.pos..];
        if let Some(escaped) = rest.strip_prefix('\\') {
            // '\n', '\'', '\u{..}': run to the next unescaped quote.
            let first = escaped.chars().next().map_or(0, char::len_utf8);
            let Some(end) = escaped[first..].find('\'') else {
                return false;
            };
            self.skip(1 + first + end + 1);
            return true;
        }
        let mut chars = rest.chars();
        match (chars.next(), chars.next()) {
            (Some(c), Some('\'')) => {
                self.skip(c.len_utf8() + 1);
                true
            }
            _ => false,
        }
    }
}
