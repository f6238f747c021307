//! Text layout: turning a string and a pixel budget into rendered rows.
//!
//! Two strategies are provided:
//!
//! - [`WrapMode::Word`] - paragraph mode. Words are kept whole and moved to the
//!   next row when they do not fit. A word longer than
//!   [`WORD_BUFFER_CHARS`] characters is broken at that bound.
//! - [`WrapMode::Char`] - teleprinter mode. Rows are filled one character at a
//!   time regardless of word boundaries, and letters are shown upper-cased.
//!
//! Both are lazy iterators over [`LayoutLine`] byte ranges into the source
//! text. Layout is never cached: calling [`layout`] again with the same
//! arguments yields the same rows, so callers simply re-run it every frame.
//!
//! # Row boundaries
//!
//! - `\n` always ends the current row. A trailing `\n` produces a final empty row.
//! - Breaks are taken lazily, so text that exactly fills a row does not leave a
//!   spurious empty row behind it.
//! - Row ranges never include the whitespace a wrap happened at. An indent
//!   that leaves no room for the next word wraps it like any other word.
//! - Empty text is one empty row.

use heapless::Vec;

use crate::config::WORD_BUFFER_CHARS;

// =============================================================================
// Types
// =============================================================================

/// Pixel budget for a layout pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LayoutMetrics {
    /// Width available to one row.
    pub max_width_px: u32,
    /// Horizontal advance of one character, including spacing.
    pub glyph_width_px: u32,
    /// Vertical pitch of one row.
    pub glyph_height_px: u32,
}

impl LayoutMetrics {
    pub const fn new(
        max_width_px: u32,
        glyph_width_px: u32,
        glyph_height_px: u32,
    ) -> Self {
        Self {
            max_width_px,
            glyph_width_px,
            glyph_height_px,
        }
    }

    /// Y offset of the `row`-th row relative to the first one.
    #[inline]
    pub const fn row_offset(
        &self,
        row: usize,
    ) -> i32 {
        row as i32 * self.glyph_height_px as i32
    }
}

/// Wrapping strategy.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum WrapMode {
    /// Keep words whole; break at whitespace.
    #[default]
    Word,
    /// Fill rows character by character ("teleprinter").
    Char,
}

impl WrapMode {
    /// The character actually drawn for `c` in this mode.
    #[inline]
    pub const fn display_char(
        self,
        c: char,
    ) -> char {
        match self {
            Self::Word => c,
            Self::Char => c.to_ascii_uppercase(),
        }
    }
}

/// One rendered row: a byte range into the source text.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct LayoutLine {
    pub start_offset: usize,
    pub end_offset: usize,
    /// Index of the `\n`-separated source line this row belongs to.
    pub source_line: usize,
}

impl LayoutLine {
    /// The slice of `source` shown on this row.
    pub fn text<'a>(
        &self,
        source: &'a str,
    ) -> &'a str {
        source.get(self.start_offset..self.end_offset).unwrap_or("")
    }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.end_offset <= self.start_offset }
}

#[inline]
const fn is_word_break(c: char) -> bool { matches!(c, ' ' | '\t' | '\n') }

#[inline]
fn char_at(
    text: &str,
    offset: usize,
) -> Option<char> {
    text.get(offset..).and_then(|rest| rest.chars().next())
}

// =============================================================================
// Word Wrap
// =============================================================================

/// Paragraph layout iterator. See [`WrapMode::Word`].
#[derive(Clone, Debug)]
pub struct WordWrap<'a> {
    text: &'a str,
    metrics: LayoutMetrics,
    pos: usize,
    source_line: usize,
    done: bool,
}

impl<'a> WordWrap<'a> {
    pub const fn new(
        text: &'a str,
        metrics: LayoutMetrics,
    ) -> Self {
        Self {
            text,
            metrics,
            pos: 0,
            source_line: 0,
            done: false,
        }
    }

    /// Scan one word starting at `start`: returns its end offset and length in
    /// characters, stopping at whitespace or at the word buffer bound.
    fn scan_word(
        &self,
        start: usize,
    ) -> (usize, usize) {
        let mut end = start;
        let mut chars = 0;
        while chars < WORD_BUFFER_CHARS {
            match char_at(self.text, end) {
                Some(c) if !is_word_break(c) => {
                    end += c.len_utf8();
                    chars += 1;
                }
                _ => break,
            }
        }
        (end, chars)
    }

    const fn row(
        &self,
        start: usize,
        end: usize,
    ) -> LayoutLine {
        LayoutLine {
            start_offset: start,
            end_offset: end,
            source_line: self.source_line,
        }
    }
}

impl Iterator for WordWrap<'_> {
    type Item = LayoutLine;

    fn next(&mut self) -> Option<LayoutLine> {
        if self.done {
            return None;
        }

        let advance = self.metrics.glyph_width_px;
        let start = self.pos;
        let mut end = start;
        let mut cursor_x = 0u32;
        let mut i = start;

        loop {
            let Some(c) = char_at(self.text, i) else {
                self.done = true;
                return Some(self.row(start, end));
            };

            match c {
                '\n' => {
                    let row = self.row(start, end);
                    self.pos = i + 1;
                    self.source_line += 1;
                    return Some(row);
                }
                ' ' | '\t' => {
                    cursor_x = cursor_x.saturating_add(advance);
                    i += 1;
                }
                _ => {
                    let (word_end, chars) = self.scan_word(i);
                    let width = (chars as u32).saturating_mul(advance);

                    // An overwide word at the start of a row is placed anyway and clipped.
                    if cursor_x > 0 && cursor_x.saturating_add(width) > self.metrics.max_width_px {
                        self.pos = i;
                        return Some(self.row(start, end));
                    }

                    cursor_x = cursor_x.saturating_add(width);
                    end = word_end;
                    i = word_end;

                    let truncated = chars == WORD_BUFFER_CHARS && char_at(self.text, word_end).is_some_and(|c| !is_word_break(c));
                    if truncated {
                        self.pos = word_end;
                        return Some(self.row(start, end));
                    }
                }
            }
        }
    }
}

// =============================================================================
// Character Wrap
// =============================================================================

/// Teleprinter layout iterator. See [`WrapMode::Char`].
#[derive(Clone, Debug)]
pub struct CharWrap<'a> {
    text: &'a str,
    metrics: LayoutMetrics,
    pos: usize,
    source_line: usize,
    done: bool,
}

impl<'a> CharWrap<'a> {
    pub const fn new(
        text: &'a str,
        metrics: LayoutMetrics,
    ) -> Self {
        Self {
            text,
            metrics,
            pos: 0,
            source_line: 0,
            done: false,
        }
    }
}

impl Iterator for CharWrap<'_> {
    type Item = LayoutLine;

    fn next(&mut self) -> Option<LayoutLine> {
        if self.done {
            return None;
        }

        let advance = self.metrics.glyph_width_px;
        let start = self.pos;
        let mut cursor_x = 0u32;
        let mut i = start;

        let end = loop {
            let Some(c) = char_at(self.text, i) else {
                self.done = true;
                break i;
            };
            if c == '\n' {
                self.pos = i + 1;
                let row = LayoutLine {
                    start_offset: start,
                    end_offset: i,
                    source_line: self.source_line,
                };
                self.source_line += 1;
                return Some(row);
            }
            if cursor_x > 0 && cursor_x.saturating_add(advance) > self.metrics.max_width_px {
                self.pos = i;
                break i;
            }
            cursor_x = cursor_x.saturating_add(advance);
            i += c.len_utf8();
        };

        Some(LayoutLine {
            start_offset: start,
            end_offset: end,
            source_line: self.source_line,
        })
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Rows produced by [`layout`].
#[derive(Clone, Debug)]
pub enum Lines<'a> {
    Word(WordWrap<'a>),
    Char(CharWrap<'a>),
}

impl Iterator for Lines<'_> {
    type Item = LayoutLine;

    fn next(&mut self) -> Option<LayoutLine> {
        match self {
            Self::Word(rows) => rows.next(),
            Self::Char(rows) => rows.next(),
        }
    }
}

/// Lay out `text` into rows.
pub const fn layout(
    text: &str,
    mode: WrapMode,
    metrics: LayoutMetrics,
) -> Lines<'_> {
    match mode {
        WrapMode::Word => Lines::Word(WordWrap::new(text, metrics)),
        WrapMode::Char => Lines::Char(CharWrap::new(text, metrics)),
    }
}

/// Number of rows `text` occupies.
pub fn line_count(
    text: &str,
    mode: WrapMode,
    metrics: LayoutMetrics,
) -> usize {
    layout(text, mode, metrics).count()
}

/// Rows `[start_line, start_line + N)` of the layout plus the total row count.
///
/// The whole text is walked so the total is exact even when the window is
/// near the top.
pub fn window<const N: usize>(
    text: &str,
    mode: WrapMode,
    metrics: LayoutMetrics,
    start_line: usize,
) -> (Vec<LayoutLine, N>, usize) {
    let mut rows = Vec::new();
    let mut total = 0;
    for (index, row) in layout(text, mode, metrics).enumerate() {
        if index >= start_line {
            // Full once N rows are in; later rows are only counted.
            rows.push(row).ok();
        }
        total += 1;
    }
    (rows, total)
}

// =============================================================================
// Tests
// =============================================================================
