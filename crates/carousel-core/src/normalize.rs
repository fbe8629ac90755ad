//! Builds the initial state and markers from a raw tile sequence.

use tracing::info;

use crate::a11y::AccessibilityToggler;
use crate::config::CarouselConfig;
use crate::state::CarouselState;
use crate::tile::Tile;

/// Validate `config`, partition `tiles` and mark frame 0 as the active frame.
///
/// `initialized` carries over the first-run flag from a previous state so a
/// rebuild does not repeat the one-time unfocus pass.
pub fn normalize<T: Tile>(
    tiles: &mut [T],
    config: &CarouselConfig,
    initialized: bool,
) -> crate::Result<CarouselState> {
    config.validate()?;
    let increment = config.step()?;

    let mut state = CarouselState::new(
        tiles.len(),
        increment,
        config.increment_mode,
        config.tile_width,
    );
    let toggler = AccessibilityToggler::new(config.accessible);

    if !initialized {
        toggler.unfocus_all(tiles);
    }
    toggler.show_frame(tiles, state.cur_frame);
    state.accessibility_initialized = initialized || toggler.is_enabled();

    info!(
        tiles = state.cur_tile_length,
        increment,
        frames = state.frame_count,
        tile_delta = state.tile_delta,
        mode = state.mode.as_str(),
        "Normalized carousel"
    );

    Ok(state)
}
