//! Capability interface between the state machine and whatever draws the tiles.

/// One content unit in a carousel.
///
/// The carousel only ever flips the two markers; it never inspects content.
pub trait Tile {
    /// Show or hide the tile
    fn set_visible(&mut self, visible: bool);

    /// Allow or prevent keyboard focus on the tile
    fn set_focusable(&mut self, focusable: bool);

    /// Structural padding tiles are never marked visible or focusable
    fn is_filler(&self) -> bool {
        false
    }
}

impl<T: Tile + ?Sized> Tile for Box<T> {
    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible)
    }

    fn set_focusable(&mut self, focusable: bool) {
        (**self).set_focusable(focusable)
    }

    fn is_filler(&self) -> bool {
        (**self).is_filler()
    }
}
