//! Scroll window over a longer sequence of rows.
//!
//! The stored offset is advisory: callers may push it anywhere (including
//! negative values) and every read goes through [`clamp`], so scrolling past
//! either end is absorbed silently.

use core::ops::Range;

use crate::config::MIN_THUMB_PX;

/// Largest valid offset for `total_lines` rows shown `visible_lines` at a time.
#[inline]
pub const fn max_offset(
    total_lines: usize,
    visible_lines: usize,
) -> usize {
    total_lines.saturating_sub(visible_lines)
}

/// Clamp a requested offset into `[0, max(0, total_lines - visible_lines)]`.
pub fn clamp(
    total_lines: usize,
    visible_lines: usize,
    requested_offset: isize,
) -> usize {
    if total_lines <= visible_lines {
        return 0;
    }
    let max = isize::try_from(max_offset(total_lines, visible_lines)).unwrap_or(isize::MAX);
    requested_offset.clamp(0, max) as usize
}

/// Row indices shown for a window starting at `offset`.
#[inline]
pub const fn visible_range(
    offset: usize,
    visible_lines: usize,
) -> Range<usize> {
    offset..offset.saturating_add(visible_lines)
}

/// Scroll indicator thumb, in pixels along the track.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScrollThumb {
    pub offset_px: u32,
    pub length_px: u32,
}

/// A window of `visible_lines` rows over `total_lines` rows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ViewportState {
    pub total_lines: usize,
    pub visible_lines: usize,
    /// Requested offset; may be out of range until clamped.
    pub offset: isize,
}

impl ViewportState {
    pub const fn new(
        total_lines: usize,
        visible_lines: usize,
        offset: isize,
    ) -> Self {
        Self {
            total_lines,
            visible_lines,
            offset,
        }
    }

    /// The offset actually used for drawing.
    #[inline]
    pub fn effective_offset(&self) -> usize { clamp(self.total_lines, self.visible_lines, self.offset) }

    /// Copy with the stored offset replaced by the effective one.
    pub fn clamped(self) -> Self {
        Self {
            offset: self.effective_offset() as isize,
            ..self
        }
    }

    /// Whether there is anything to scroll.
    #[inline]
    pub const fn is_scrollable(&self) -> bool { self.total_lines > self.visible_lines }

    /// Move the window by `delta` rows. Returns whether the effective offset changed.
    pub fn scroll_by(
        &mut self,
        delta: isize,
    ) -> bool {
        let before = self.effective_offset();
        self.offset = clamp(self.total_lines, self.visible_lines, (before as isize).saturating_add(delta)) as isize;
        self.effective_offset() != before
    }

    /// Row indices currently shown, limited to rows that exist.
    pub fn visible_range(&self) -> Range<usize> {
        let range = visible_range(self.effective_offset(), self.visible_lines);
        range.start..range.end.min(self.total_lines.max(range.start))
    }

    /// Shift the window the least amount needed to include row `index`.
    pub fn reveal(
        &mut self,
        index: usize,
    ) {
        let offset = self.effective_offset();
        if index < offset {
            self.offset = index as isize;
        } else if self.visible_lines > 0 && index >= offset + self.visible_lines {
            self.offset = (index + 1 - self.visible_lines) as isize;
        }
        *self = self.clamped();
    }

    /// Thumb geometry on a track `track_px` long, or `None` when everything fits.
    pub fn thumb(
        &self,
        track_px: u32,
    ) -> Option<ScrollThumb> {
        if !self.is_scrollable() {
            return None;
        }
        let total = self.total_lines as u64;
        let track = u64::from(track_px);
        let length = (self.visible_lines as u64 * track / total).max(u64::from(MIN_THUMB_PX)).min(track);
        let travel = track - length;
        let offset = self.effective_offset() as u64 * travel / max_offset(self.total_lines, self.visible_lines) as u64;
        Some(ScrollThumb {
            offset_px: offset as u32,
            length_px: length as u32,
        })
    }
}
