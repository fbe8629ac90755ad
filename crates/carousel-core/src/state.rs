//! The navigation record each carousel keeps.

use serde::Serialize;

use crate::config::IncrementMode;
use crate::frame::{self, FrameWindow};

/// Navigation position and the pointers derived from it.
///
/// Hooks receive this by reference; only the navigator mutates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselState {
    /// First tile of the active window
    pub index: usize,
    pub prev_index: usize,
    pub frame_index: usize,
    pub frame_number: usize,
    pub prev_frame_index: usize,
    pub prev_frame_number: usize,
    /// Position of the current tile, `None` for an empty carousel
    pub cur_tile: Option<usize>,
    pub prev_tile: Option<usize>,
    pub cur_frame: FrameWindow,
    pub prev_frame: FrameWindow,
    /// Number of tiles in the sequence
    pub cur_tile_length: usize,
    pub cur_frame_length: usize,
    pub frame_count: usize,
    pub increment: usize,
    pub mode: IncrementMode,
    pub tile_delta: usize,
    pub tile_width: f64,
    /// `tile_width * index`
    pub offset: f64,
    /// Set once the first-run unfocus pass has happened
    pub accessibility_initialized: bool,
}

impl CarouselState {
    /// State positioned on frame 0 for `total` tiles
    pub fn new(total: usize, increment: usize, mode: IncrementMode, tile_width: f64) -> Self {
        let cur_frame = FrameWindow::at(0, increment, total);
        let cur_tile = (total > 0).then_some(0);
        Self {
            index: 0,
            prev_index: 0,
            frame_index: 0,
            frame_number: 1,
            prev_frame_index: 0,
            prev_frame_number: 1,
            cur_tile,
            prev_tile: cur_tile,
            cur_frame,
            prev_frame: cur_frame,
            cur_tile_length: total,
            cur_frame_length: cur_frame.len,
            frame_count: frame::frame_count(total, increment),
            increment,
            mode,
            tile_delta: frame::tile_delta(total, increment),
            tile_width,
            offset: 0.0,
            accessibility_initialized: false,
        }
    }

    /// Largest index the navigator may settle on
    #[inline]
    pub fn max_index(&self) -> usize {
        frame::max_index(self.cur_tile_length, self.increment)
    }

    /// An empty carousel accepts requests but never moves
    #[inline]
    pub fn is_inert(&self) -> bool {
        self.cur_tile_length == 0
    }

    #[inline]
    pub fn is_first_frame(&self) -> bool {
        self.index == 0
    }

    #[inline]
    pub fn is_last_frame(&self) -> bool {
        self.cur_tile_length >= self.increment
            && self.index == self.cur_tile_length - self.increment
    }

    /// Move to `index` and recompute every derived pointer, keeping the old ones as `prev_*`
    pub(crate) fn commit(&mut self, index: usize) {
        self.prev_index = self.index;
        self.prev_tile = self.cur_tile;
        self.prev_frame = self.cur_frame;
        self.prev_frame_index = self.frame_index;
        self.prev_frame_number = self.frame_number;

        self.index = index;
        self.frame_index = frame::frame_index(index, self.increment);
        self.frame_number = self.frame_index + 1;

        // The final short frame is shown as a full window of the last tiles,
        // so the current tile points at the nominal start of that frame.
        let slide =
            self.is_last_frame() && self.tile_delta > 0 && self.mode == IncrementMode::Frame;
        self.cur_tile = if self.is_inert() {
            None
        } else if slide {
            Some(index + self.tile_delta)
        } else {
            Some(index)
        };

        self.cur_frame = FrameWindow::at(index, self.increment, self.cur_tile_length);
        self.cur_frame_length = self.cur_frame.len;
        self.offset = self.tile_width * index as f64;
    }

    pub(crate) fn set_tile_width(&mut self, tile_width: f64) {
        self.tile_width = tile_width;
        self.offset = tile_width * self.index as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = CarouselState::new(10, 3, IncrementMode::Frame, 2.0);
        assert_eq!(state.frame_count, 4);
        assert_eq!(state.tile_delta, 2);
        assert_eq!(state.cur_frame, FrameWindow { start: 0, len: 3 });
        assert_eq!(state.cur_tile, Some(0));
        assert_eq!(state.max_index(), 7);
        assert!(!state.accessibility_initialized);
    }

    #[test]
    fn test_commit_tracks_previous() {
        let mut state = CarouselState::new(10, 3, IncrementMode::Frame, 2.0);
        state.commit(3);
        state.commit(6);
        assert_eq!(state.prev_index, 3);
        assert_eq!(state.prev_frame, FrameWindow { start: 3, len: 3 });
        assert_eq!(state.prev_frame_number, 2);
        assert_eq!(state.frame_number, 3);
        assert_eq!(state.offset, 12.0);
    }

    #[test]
    fn test_commit_last_frame_slides_current_tile() {
        let mut state = CarouselState::new(10, 3, IncrementMode::Frame, 1.0);
        state.commit(7);
        assert!(state.is_last_frame());
        assert_eq!(state.frame_index, 3);
        assert_eq!(state.cur_tile, Some(9));
        assert_eq!(state.cur_frame, FrameWindow { start: 7, len: 3 });

        let mut tiles = CarouselState::new(10, 3, IncrementMode::Tile, 1.0);
        tiles.commit(7);
        assert_eq!(tiles.cur_tile, Some(7));
    }

    #[test]
    fn test_short_single_frame() {
        let state = CarouselState::new(2, 5, IncrementMode::Frame, 1.0);
        assert_eq!(state.frame_count, 1);
        assert_eq!(state.cur_frame_length, 2);
        assert!(!state.is_last_frame());
        assert_eq!(state.max_index(), 0);
    }

    #[test]
    fn test_empty_state_is_inert() {
        let mut state = CarouselState::new(0, 3, IncrementMode::Frame, 1.0);
        assert!(state.is_inert());
        assert_eq!(state.cur_tile, None);
        state.commit(0);
        assert_eq!(state.cur_tile, None);
        assert!(state.cur_frame.is_empty());
    }
}
