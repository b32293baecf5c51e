//! Track module - the scrolling strip of ground and obstacles
//!
//! The track is built once per session and never mutated afterwards. Each tick
//! the compositor reads a viewport-wide window out of it; advancing the window
//! start by one column per tick produces the scrolling.

use crate::rng::SimpleRng;

/// Immutable row of track characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    cells: Vec<char>,
}

impl Track {
    /// Generate a track of `len` cells filled with `ground`, then stamp
    /// `obstacles` copies of `glyph` at random starts in `[min_offset, len)`.
    ///
    /// Placements may overlap: later stamps overwrite earlier ones and nothing
    /// is retried. A stamp that runs past the end is cut off so the length
    /// stays exactly `len`.
    ///
    /// `min_offset` is clamped to `len - 1`, so a short track still gets
    /// obstacles (crowded into its last cell) instead of an empty range.
    pub fn generate(
        len: usize,
        ground: char,
        glyph: &str,
        obstacles: usize,
        min_offset: usize,
        rng: &mut SimpleRng,
    ) -> Self {
        let mut track = Self {
            cells: vec![ground; len],
        };
        if len == 0 {
            return track;
        }

        let floor = min_offset.min(len - 1);
        for _ in 0..obstacles {
            let start = rng.next_index(floor, len);
            track.stamp(start, glyph);
        }
        track
    }

    /// Build a track from literal text (tests, benchmarks).
    pub fn from_text(text: &str) -> Self {
        Self {
            cells: text.chars().collect(),
        }
    }

    fn stamp(&mut self, start: usize, glyph: &str) {
        for (cell, ch) in self.cells.iter_mut().skip(start).zip(glyph.chars()) {
            *cell = ch;
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Up to `width` cells starting at `start`.
    ///
    /// No wraparound: near the end of the track the window gets shorter, and
    /// past the end it is empty.
    pub fn window(&self, start: usize, width: usize) -> &[char] {
        let start = start.min(self.cells.len());
        let end = start.saturating_add(width).min(self.cells.len());
        &self.cells[start..end]
    }
}
