//! Greedy word wrapping on top of measured widths.

use std::borrow::Cow;

use tracing::trace;

use crate::metrics::FontMetrics;
use crate::pt::Pt;
use crate::text::compute_width;

pub const DEFAULT_FONT_SIZE: f32 = 12.0;
pub const DEFAULT_MAX_WIDTH: f32 = 100.0;

/// Font size and line budget for a wrap call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapOptions {
    pub font_size: Pt,
    pub max_width: Pt,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            font_size: Pt(DEFAULT_FONT_SIZE),
            max_width: Pt(DEFAULT_MAX_WIDTH),
        }
    }
}

impl WrapOptions {
    pub fn new(font_size: impl Into<Pt>, max_width: impl Into<Pt>) -> Self {
        Self {
            font_size: font_size.into(),
            max_width: max_width.into(),
        }
    }

    pub fn with_font_size(mut self, font_size: impl Into<Pt>) -> Self {
        self.font_size = font_size.into();
        self
    }

    pub fn with_max_width(mut self, max_width: impl Into<Pt>) -> Self {
        self.max_width = max_width.into();
        self
    }
}

/// A word together with the whitespace run that precedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub space: &'a str,
    pub word: &'a str,
}

/// Splits text into alternating whitespace and word runs.
///
/// Concatenating `space + word` over every token reproduces the input. Input
/// that ends in whitespace yields a final token with an empty `word`.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, cursor: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.input[self.cursor..];
        if rest.is_empty() {
            return None;
        }

        let word_start = rest
            .find(|ch: char| !ch.is_whitespace())
            .unwrap_or(rest.len());
        let word_end = rest[word_start..]
            .find(char::is_whitespace)
            .map_or(rest.len(), |len| word_start + len);

        self.cursor += word_end;
        Some(Token {
            space: &rest[..word_start],
            word: &rest[word_start..word_end],
        })
    }
}

/// Collapses every run of `\r` / `\n` into a single space so hard-wrapped
/// text can be wrapped again.
pub fn normalize_line_breaks(space: &str) -> Cow<'_, str> {
    let is_break = |ch: char| ch == '\r' || ch == '\n';
    if !space.contains(is_break) {
        return Cow::Borrowed(space);
    }

    let mut out = String::with_capacity(space.len());
    let mut in_break = false;
    for ch in space.chars() {
        if is_break(ch) {
            if !in_break {
                out.push(' ');
            }
            in_break = true;
        } else {
            out.push(ch);
            in_break = false;
        }
    }
    Cow::Owned(out)
}

/// Greedily fills lines with tokens until the next one would exceed
/// `max_width`.
///
/// The first token of a line is always accepted, so a word wider than the
/// budget sits alone on its own line. A token that lands exactly on
/// `max_width` stays on the current line. Whitespace at a break is dropped.
/// Negative or NaN budgets behave like zero; an infinite budget never
/// breaks. Empty input gives one empty line.
pub fn wrap_lines<F: FontMetrics + ?Sized>(
    font: &F,
    text: &str,
    font_size: Pt,
    max_width: Pt,
) -> Vec<String> {
    let max_w = max_width.clamp_non_negative().as_f32();

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = Pt::ZERO;

    for Token { space, word } in Tokens::new(text) {
        let space = normalize_line_breaks(space);
        let space_width = compute_width(font, &space, font_size);
        let word_width = compute_width(font, word, font_size);

        if current_width.is_zero() || (current_width + space_width + word_width).as_f32() <= max_w {
            current_line.push_str(&space);
            current_line.push_str(word);
            current_width += space_width + word_width;
        } else {
            trace!(line = %current_line, width = %current_width, "line break");
            lines.push(std::mem::take(&mut current_line));
            current_line.push_str(word);
            current_width = word_width;
        }
    }

    lines.push(current_line);
    lines
}
