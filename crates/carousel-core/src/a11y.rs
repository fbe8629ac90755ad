//! Visibility and focusability markers for tiles.

use crate::frame::FrameWindow;
use crate::tile::Tile;

/// What to do with a group of tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Hidden and unfocusable
    Hide,
    /// Visible and focusable
    Show,
}

/// Keeps exactly one frame's tiles visible and focusable
#[derive(Debug, Clone, Copy)]
pub struct AccessibilityToggler {
    enabled: bool,
}

impl AccessibilityToggler {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Apply `operation` to every non-filler tile in `items`
    pub fn toggle<T: Tile>(&self, items: &mut [T], operation: Operation) {
        if !self.enabled {
            return;
        }
        let on = operation == Operation::Show;
        for tile in items.iter_mut().filter(|t| !t.is_filler()) {
            tile.set_visible(on);
            tile.set_focusable(on);
        }
    }

    /// First-run pass: nothing in the raw list stays tab-reachable
    pub fn unfocus_all<T: Tile>(&self, tiles: &mut [T]) {
        if !self.enabled {
            return;
        }
        for tile in tiles.iter_mut().filter(|t| !t.is_filler()) {
            tile.set_focusable(false);
        }
    }

    /// Hide everything, then show the active frame
    pub fn show_frame<T: Tile>(&self, tiles: &mut [T], frame: FrameWindow) {
        self.toggle(tiles, Operation::Hide);
        if let Some(window) = tiles.get_mut(frame.range()) {
            self.toggle(window, Operation::Show);
        }
    }
}
