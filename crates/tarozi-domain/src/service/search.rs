//! Case-insensitive search, filtering and match highlighting
//!
//! Matching runs on each field's raw string form; highlighting runs on the
//! display form. The query is always a literal: characters such as `.` or
//! `(` only ever match themselves.

use std::ops::Range;

use serde::Serialize;

use crate::model::TicketEntry;

/// Does any field of `entry` contain `query`, ignoring case?
///
/// An empty query matches everything.
pub fn matches(entry: &TicketEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let target = query.to_lowercase();
    entry
        .raw_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&target))
}

/// Entries matching `query`, each paired with its index in `entries`
pub fn filter<'a>(entries: &'a [TicketEntry], query: &str) -> Vec<(usize, &'a TicketEntry)> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| matches(entry, query))
        .collect()
}

/// Byte ranges of every non-overlapping case-insensitive occurrence of
/// `query` in `text`, scanned left to right
pub fn highlight_spans(text: &str, query: &str) -> Vec<Range<usize>> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    let hay: Vec<(usize, char)> = text.char_indices().collect();

    let mut spans = Vec::new();
    let mut i = 0;
    while i < hay.len() {
        match match_len_at(&hay, i, &needle) {
            Some(end) => {
                let start_byte = hay[i].0;
                let end_byte = hay.get(end).map(|(b, _)| *b).unwrap_or(text.len());
                spans.push(start_byte..end_byte);
                i = end;
            }
            None => i += 1,
        }
    }
    spans
}

/// Index one past the last haystack char of a match starting at `start`
fn match_len_at(hay: &[(usize, char)], start: usize, needle: &[char]) -> Option<usize> {
    let mut n = 0;
    let mut h = start;
    while n < needle.len() {
        let (_, ch) = *hay.get(h)?;
        for lower in ch.to_lowercase() {
            if needle.get(n) != Some(&lower) {
                return None;
            }
            n += 1;
        }
        h += 1;
    }
    Some(h)
}

/// Display text together with the ranges to emphasise
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightedText {
    pub text: String,
    pub spans: Vec<Range<usize>>,
}

impl HighlightedText {
    pub fn new(text: impl Into<String>, query: &str) -> Self {
        let text = text.into();
        let spans = highlight_spans(&text, query);
        Self { text, spans }
    }

    pub fn is_highlighted(&self) -> bool {
        !self.spans.is_empty()
    }

    /// Split into `(segment, highlighted)` pieces covering the whole text
    pub fn segments(&self) -> Vec<(&str, bool)> {
        let mut out = Vec::with_capacity(self.spans.len() * 2 + 1);
        let mut cursor = 0;
        for span in &self.spans {
            if span.start > cursor {
                out.push((&self.text[cursor..span.start], false));
            }
            out.push((&self.text[span.clone()], true));
            cursor = span.end;
        }
        if cursor < self.text.len() {
            out.push((&self.text[cursor..], false));
        }
        out
    }

    /// Wrap every highlighted segment in `open`/`close` markers
    pub fn render_with(&self, open: &str, close: &str) -> String {
        let mut out = String::with_capacity(self.text.len() + self.spans.len() * (open.len() + close.len()));
        for (segment, highlighted) in self.segments() {
            if highlighted {
                out.push_str(open);
                out.push_str(segment);
                out.push_str(close);
            } else {
                out.push_str(segment);
            }
        }
        out
    }
}
