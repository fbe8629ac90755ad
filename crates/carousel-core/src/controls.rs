//! Prev/next affordances and the live-region summary derived from state.

use std::fmt;

use serde::Serialize;

use crate::state::CarouselState;

/// Whether the prev/next controls accept input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Affordances {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl Affordances {
    pub fn from_state(state: &CarouselState) -> Self {
        Self {
            prev_disabled: state.is_first_frame(),
            next_disabled: state.index + state.increment >= state.cur_tile_length,
        }
    }

    /// A single frame leaves nowhere to go
    #[inline]
    pub fn all_disabled(&self) -> bool {
        self.prev_disabled && self.next_disabled
    }
}

/// Announcement text for the active frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameStatus {
    pub frame_number: usize,
    pub frame_count: usize,
    /// One-based, inclusive
    pub first_tile: usize,
    pub last_tile: usize,
    pub total: usize,
}

impl FrameStatus {
    pub fn from_state(state: &CarouselState) -> Self {
        Self {
            frame_number: if state.is_inert() { 0 } else { state.frame_number },
            frame_count: state.frame_count,
            first_tile: if state.is_inert() { 0 } else { state.cur_frame.start + 1 },
            last_tile: state.cur_frame.end(),
            total: state.cur_tile_length,
        }
    }

    pub fn frame_label(&self) -> String {
        format!("Frame {} of {}", self.frame_number, self.frame_count)
    }
}

impl fmt::Display for FrameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total == 0 {
            return f.write_str("No items");
        }
        if self.first_tile == self.last_tile {
            write!(f, "Showing {} of {}", self.first_tile, self.total)
        } else {
            write!(f, "Showing {}-{} of {}", self.first_tile, self.last_tile, self.total)
        }
    }
}
