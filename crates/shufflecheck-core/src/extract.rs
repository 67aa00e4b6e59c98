//! Permutation extraction from captured collaborator output.
//!
//! The collaborator reports the list after every command as a line of the
//! form `l = [1 2 3]`, interleaved with prompts and other chatter. Two
//! separate passes recover the shuffle observations:
//!
//! 1. [`strip_initial_state`] drops everything up to and including the
//!    first report of the list in its freshly built order, which is the
//!    echo of the build phase, not a shuffle result.
//! 2. [`Observations`] lazily scans the remaining text for list reports.
//!
//! Both passes are pure functions of the text, so re-running either over
//! the same input yields the same result.

use crate::permutation::Permutation;

/// Literal that opens every list report.
const LIST_PREFIX: &str = "l = [";

/// Render the list report the collaborator prints right after the build
/// commands, before any shuffle has run.
fn initial_marker(elements: &[u32]) -> String {
    let mut marker = String::from(LIST_PREFIX);
    for (i, v) in elements.iter().enumerate() {
        if i > 0 {
            marker.push(' ');
        }
        marker.push_str(&v.to_string());
    }
    marker.push(']');
    marker
}

/// Return the suffix of `text` after the first report of the list in its
/// initial element order. If that report never appears the whole text is
/// returned, and the count check downstream surfaces the discrepancy.
pub fn strip_initial_state<'a>(text: &'a str, elements: &[u32]) -> &'a str {
    let marker = initial_marker(elements);
    match text.find(&marker) {
        Some(pos) => &text[pos + marker.len()..],
        None => text,
    }
}

/// Lazy scan over the list reports in a block of output text.
///
/// A match is the literal `l = [` followed by exactly `width` whitespace
/// separated decimal integers and the closing bracket, all on one line.
/// Anything else, including reports of the wrong width and brackets left
/// open across a line break, is skipped.
pub struct Observations<'a> {
    text: &'a str,
    pos: usize,
    width: usize,
}

impl<'a> Observations<'a> {
    pub fn new(text: &'a str, width: usize) -> Self {
        Self {
            text,
            pos: 0,
            width,
        }
    }
}

impl Iterator for Observations<'_> {
    type Item = Permutation;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let start = self.pos + self.text[self.pos..].find(LIST_PREFIX)?;
            let body_start = start + LIST_PREFIX.len();
            let after = &self.text[body_start..];

            // The closing bracket must land on the same line.
            let close = match after.find(']') {
                Some(i) if !after[..i].contains('\n') => i,
                _ => {
                    self.pos = start + 1;
                    continue;
                }
            };

            match parse_body(&after[..close], self.width) {
                Some(perm) => {
                    self.pos = body_start + close + 1;
                    return Some(perm);
                }
                None => {
                    // Malformed candidate. Resuming one byte in keeps a
                    // nested prefix like `l = [l = [1 2 3]` reachable.
                    self.pos = start + 1;
                }
            }
        }
        None
    }
}

/// Parse the text between the brackets into a permutation of `width`
/// decimal values. Signs, non-digits, and wrong arity all reject.
fn parse_body(body: &str, width: usize) -> Option<Permutation> {
    let mut values = Vec::with_capacity(width);
    for token in body.split_whitespace() {
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        values.push(token.parse::<u32>().ok()?);
    }
    if values.len() == width {
        Some(Permutation::new(values))
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
