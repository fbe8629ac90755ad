//! The carousel: owns the tiles and the state, runs every transition.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::a11y::AccessibilityToggler;
use crate::config::CarouselConfig;
use crate::controls::{Affordances, FrameStatus};
use crate::frame::{self, FrameWindow};
use crate::hooks::TransitionHooks;
use crate::navigator::{self, Request};
use crate::normalize::normalize;
use crate::state::CarouselState;
use crate::tile::Tile;

/// Where a carousel is attached: an id, the container it lives in, and its tiles
#[derive(Debug, Clone)]
pub struct Mount<T> {
    pub id: String,
    pub container: Option<String>,
    pub tiles: Vec<T>,
}

impl<T> Mount<T> {
    pub fn new(id: impl Into<String>, container: Option<String>, tiles: Vec<T>) -> Self {
        Self {
            id: id.into(),
            container,
            tiles,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

/// A paged view over an owned tile sequence.
///
/// Every navigation call runs the whole commit before returning: index,
/// pointers, pre-transition hook, tile markers, affordances, post-transition
/// hook. Calls return `&mut Self` so they can be chained.
#[derive(Debug)]
pub struct Carousel<T: Tile> {
    id: Uuid,
    tiles: Vec<T>,
    config: CarouselConfig,
    state: CarouselState,
    affordances: Affordances,
    hooks: TransitionHooks,
    phase: Phase,
}

impl<T: Tile> Carousel<T> {
    /// Build a carousel over `tiles`; fails only on a bad configuration
    pub fn new(mut tiles: Vec<T>, config: CarouselConfig) -> crate::Result<Self> {
        let state = normalize(&mut tiles, &config, false)?;
        let affordances = Affordances::from_state(&state);
        Ok(Self {
            id: Uuid::new_v4(),
            tiles,
            config,
            state,
            affordances,
            hooks: TransitionHooks::default(),
            phase: Phase::Idle,
        })
    }

    /// Build a carousel at a mount point, which must sit inside a container
    pub fn mount(mount: Mount<T>, config: CarouselConfig) -> crate::Result<Self> {
        if mount.container.is_none() {
            return Err(crate::Error::MissingContainer(mount.id));
        }
        Self::new(mount.tiles, config)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn affordances(&self) -> Affordances {
        self.affordances
    }

    pub fn status(&self) -> FrameStatus {
        FrameStatus::from_state(&self.state)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tiles(&self) -> &[T] {
        &self.tiles
    }

    /// Tiles in the active window
    pub fn frame_tiles(&self) -> &[T] {
        &self.tiles[self.state.cur_frame.range()]
    }

    /// The full partition into frames
    pub fn frames(&self) -> Vec<FrameWindow> {
        frame::partition(self.tiles.len(), self.state.increment)
    }

    pub fn on_pre_transition(&mut self, hook: impl FnMut(&CarouselState) + 'static) -> &mut Self {
        self.hooks.set_pre(Box::new(hook));
        self
    }

    pub fn on_post_transition(&mut self, hook: impl FnMut(&CarouselState) + 'static) -> &mut Self {
        self.hooks.set_post(Box::new(hook));
        self
    }

    pub fn next(&mut self) -> &mut Self {
        self.navigate(Request::Next)
    }

    pub fn prev(&mut self) -> &mut Self {
        self.navigate(Request::Prev)
    }

    /// Jump to a one-based frame number
    pub fn jump_to_frame(&mut self, frame: usize) -> &mut Self {
        self.navigate(Request::JumpToFrame(frame))
    }

    pub fn reset(&mut self) -> &mut Self {
        self.navigate(Request::Reset)
    }

    /// Run `request` through the full commit sequence, or do nothing if it resolves to a no-op
    pub fn navigate(&mut self, request: Request) -> &mut Self {
        // The commit guard below restores Idle even when a hook unwinds.
        if self.phase == Phase::Transitioning {
            warn!(carousel = %self.id, %request, "Dropping request issued mid-transition");
            return self;
        }

        let Some(index) = navigator::resolve(&self.state, request) else {
            debug!(carousel = %self.id, %request, index = self.state.index, "Navigation no-op");
            return self;
        };

        self.state.commit(index);
        {
            let Self {
                tiles,
                config,
                state,
                affordances,
                hooks,
                phase,
                ..
            } = self;
            let state = &*state;
            let mut commit =
                CommitGuard::begin(phase, tiles, state, affordances, config.accessible);
            hooks.fire_pre(state);
            commit.apply();
            hooks.fire_post(state);
        }

        debug!(
            carousel = %self.id,
            %request,
            from = self.state.prev_index,
            to = self.state.index,
            frame = self.state.frame_number,
            "Committed transition"
        );
        self
    }

    /// Replace the tile sequence and start over on frame 1
    pub fn rebuild(&mut self, tiles: Vec<T>) -> crate::Result<&mut Self> {
        self.tiles = tiles;
        self.renormalize()?;
        Ok(self)
    }

    /// Apply a new configuration; the carousel returns to frame 1
    pub fn reconfigure(&mut self, config: CarouselConfig) -> crate::Result<&mut Self> {
        config.validate()?;
        self.config = config;
        self.renormalize()?;
        Ok(self)
    }

    /// Update the externally measured tile width; no transition takes place
    pub fn set_tile_width(&mut self, tile_width: f64) -> &mut Self {
        self.config.tile_width = tile_width;
        self.state.set_tile_width(tile_width);
        self
    }

    fn renormalize(&mut self) -> crate::Result<()> {
        let initialized = self.state.accessibility_initialized;
        self.state = normalize(&mut self.tiles, &self.config, initialized)?;
        self.affordances = Affordances::from_state(&self.state);
        Ok(())
    }
}

/// Holds a carousel in `Transitioning` for the tail of a commit.
///
/// Dropping it returns the phase to `Idle`. If a hook unwinds before the
/// markers were applied, they are applied on drop so tiles and affordances
/// never lag behind the committed index.
struct CommitGuard<'a, T: Tile> {
    phase: &'a mut Phase,
    tiles: &'a mut [T],
    state: &'a CarouselState,
    affordances: &'a mut Affordances,
    toggler: AccessibilityToggler,
    applied: bool,
}

impl<'a, T: Tile> CommitGuard<'a, T> {
    fn begin(
        phase: &'a mut Phase,
        tiles: &'a mut [T],
        state: &'a CarouselState,
        affordances: &'a mut Affordances,
        accessible: bool,
    ) -> Self {
        *phase = Phase::Transitioning;
        Self {
            phase,
            tiles,
            state,
            affordances,
            toggler: AccessibilityToggler::new(accessible),
            applied: false,
        }
    }

    /// Set tile markers and affordances for the committed frame
    fn apply(&mut self) {
        self.toggler.show_frame(self.tiles, self.state.cur_frame);
        *self.affordances = Affordances::from_state(self.state);
        self.applied = true;
    }
}

impl<T: Tile> Drop for CommitGuard<'_, T> {
    fn drop(&mut self) {
        if !self.applied {
            self.apply();
        }
        *self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::panic::{self, AssertUnwindSafe};
    use std::rc::Rc;

    use super::*;
    use crate::config::IncrementMode;
    use crate::deck::{Card, Deck};

    fn carousel(count: usize, increment: i64, mode: IncrementMode) -> Carousel<Card> {
        let config = CarouselConfig {
            increment,
            increment_mode: mode,
            ..Default::default()
        };
        Carousel::new(Deck::generate(count).into_cards(), config).unwrap()
    }

    fn visible(c: &Carousel<Card>) -> Vec<usize> {
        c.tiles()
            .iter()
            .enumerate()
            .filter(|(_, t)| t.visible)
            .map(|(i, _)| i)
            .collect()
    }

    /// Records the index seen by every post-transition call
    fn record_posts(c: &mut Carousel<Card>) -> Rc<RefCell<Vec<usize>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        c.on_post_transition(move |state| sink.borrow_mut().push(state.index));
        seen
    }

    #[test]
    fn test_frame_mode_scenario() {
        let mut c = carousel(10, 3, IncrementMode::Frame);
        assert_eq!(c.state().frame_count, 4);
        assert_eq!(c.state().tile_delta, 2);
        let sizes: Vec<usize> = c.frames().iter().map(|f| f.len).collect();
        assert_eq!(sizes, vec![3, 3, 3, 1]);

        let posts = record_posts(&mut c);
        let mut indices = Vec::new();
        for _ in 0..4 {
            indices.push(c.next().state().index);
        }
        assert_eq!(indices, vec![3, 6, 7, 7]);
        // Clamped boundary presses still run the commit
        assert_eq!(*posts.borrow(), vec![3, 6, 7, 7]);
        assert_eq!(c.state().cur_tile, Some(9));
        assert_eq!(c.state().prev_index, 7);
        assert!(c.affordances().next_disabled);
        assert_eq!(visible(&c), vec![7, 8, 9]);
    }

    #[test]
    fn test_tile_mode_scenario() {
        let mut c = carousel(5, 1, IncrementMode::Tile);
        assert_eq!(c.state().frame_count, 5);
        c.next().next();
        assert_eq!(c.state().index, 2);
        c.prev();
        assert_eq!(c.state().index, 1);
        for _ in 0..10 {
            c.next();
        }
        assert_eq!(c.state().index, 4);
        for _ in 0..10 {
            c.prev();
        }
        assert_eq!(c.state().index, 0);
    }

    #[test]
    fn test_next_never_exceeds_max() {
        for count in 0..20 {
            for increment in 1..6 {
                for mode in [IncrementMode::Frame, IncrementMode::Tile] {
                    let mut c = carousel(count, increment, mode);
                    let max = count.saturating_sub(increment as usize);
                    for _ in 0..(count + 2) {
                        c.next();
                        assert!(c.state().index <= max);
                        assert_eq!(
                            c.state().frame_index,
                            c.state().index.div_ceil(increment as usize)
                        );
                    }
                    assert_eq!(c.state().index, max);
                }
            }
        }
    }

    #[test]
    fn test_prev_at_zero_stays() {
        let mut c = carousel(6, 2, IncrementMode::Frame);
        let posts = record_posts(&mut c);
        c.prev();
        assert_eq!(c.state().index, 0);
        assert_eq!(*posts.borrow(), vec![0]);
        assert!(c.affordances().prev_disabled);
    }

    #[test]
    fn test_jump_to_frame_is_strict_noop_on_repeat() {
        let mut c = carousel(12, 4, IncrementMode::Frame);
        let posts = record_posts(&mut c);
        c.jump_to_frame(3);
        assert_eq!(c.state().index, 8);
        c.jump_to_frame(3);
        c.jump_to_frame(9);
        assert_eq!(*posts.borrow(), vec![8]);
        assert_eq!(c.state().frame_number, 3);
    }

    #[test]
    fn test_reset_always_commits() {
        let mut c = carousel(9, 3, IncrementMode::Frame);
        let posts = record_posts(&mut c);
        c.reset();
        c.next().next().reset();
        assert_eq!(c.state().index, 0);
        assert_eq!(*posts.borrow(), vec![0, 3, 6, 0]);

        let mut other = carousel(9, 3, IncrementMode::Frame);
        other.next().next().jump_to_frame(1);
        assert_eq!(other.state().index, c.state().index);
        assert_eq!(other.state().cur_frame, c.state().cur_frame);
    }

    #[test]
    fn test_exactly_one_frame_visible() {
        let mut cards = Deck::generate(7).into_cards();
        cards.insert(4, Card::filler());
        let config = CarouselConfig {
            increment: 3,
            ..Default::default()
        };
        let mut c = Carousel::new(cards, config).unwrap();
        for request in [Request::Next, Request::Next, Request::Prev, Request::JumpToFrame(3)] {
            c.navigate(request);
            let frame = c.state().cur_frame;
            for (i, tile) in c.tiles().iter().enumerate() {
                let expected = frame.contains(i) && !tile.filler;
                assert_eq!(tile.visible, expected, "tile {} after {}", i, request);
                assert_eq!(tile.focusable, expected);
            }
        }
        assert!(!c.tiles()[4].visible);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = carousel(0, 3, IncrementMode::Frame);
        let posts = record_posts(&mut c);
        c.next().prev().jump_to_frame(1).reset();
        assert_eq!(c.state().index, 0);
        assert!(posts.borrow().is_empty());
        assert!(c.affordances().all_disabled());
        assert!(c.frame_tiles().is_empty());
    }

    #[test]
    fn test_short_single_frame_disables_controls() {
        let mut c = carousel(2, 5, IncrementMode::Frame);
        assert!(c.affordances().all_disabled());
        c.next();
        assert_eq!(c.state().index, 0);
        assert_eq!(c.frame_tiles().len(), 2);
    }

    #[test]
    fn test_hook_order_and_snapshot() {
        let mut c = carousel(6, 2, IncrementMode::Frame);
        let log = Rc::new(RefCell::new(Vec::new()));
        let pre = Rc::clone(&log);
        let post = Rc::clone(&log);
        c.on_pre_transition(move |s| {
            pre.borrow_mut()
                .push(format!("pre {}->{}", s.prev_index, s.index))
        })
        .on_post_transition(move |s| post.borrow_mut().push(format!("post {}", s.frame_number)));
        c.next();
        assert_eq!(*log.borrow(), vec!["pre 0->2".to_string(), "post 2".to_string()]);
    }

    #[test]
    fn test_mount_requires_container() {
        let orphan = Mount::new("hero", None, Deck::generate(3).into_cards());
        assert!(matches!(
            Carousel::mount(orphan, CarouselConfig::default()),
            Err(crate::Error::MissingContainer(id)) if id == "hero"
        ));

        let mounted = Mount::new("hero", Some("main".to_string()), Deck::generate(3).into_cards());
        assert!(Carousel::mount(mounted, CarouselConfig::default()).is_ok());
    }

    #[test]
    fn test_rebuild_and_reconfigure() {
        let mut c = carousel(10, 3, IncrementMode::Frame);
        c.next().next();
        c.rebuild(Deck::generate(4).into_cards()).unwrap();
        assert_eq!(c.state().index, 0);
        assert_eq!(c.state().frame_count, 2);
        assert!(c.state().accessibility_initialized);

        let config = CarouselConfig {
            increment: 2,
            increment_mode: IncrementMode::Tile,
            ..Default::default()
        };
        c.reconfigure(config).unwrap();
        c.next();
        assert_eq!(c.state().index, 1);

        let bad = CarouselConfig {
            increment: -1,
            ..Default::default()
        };
        assert!(c.reconfigure(bad).is_err());
        assert_eq!(c.config().increment, 2);
    }

    #[test]
    fn test_offset_follows_tile_width() {
        let mut c = carousel(10, 2, IncrementMode::Frame);
        c.set_tile_width(12.0).next();
        assert_eq!(c.state().offset, 24.0);
        c.set_tile_width(10.0);
        assert_eq!(c.state().offset, 20.0);
    }

    #[test]
    fn test_phase_idle_between_calls() {
        let mut c = carousel(4, 1, IncrementMode::Frame);
        c.next();
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_panicking_post_hook_leaves_carousel_usable() {
        let mut c = carousel(10, 3, IncrementMode::Frame);
        let armed = Rc::new(Cell::new(true));
        let trigger = Rc::clone(&armed);
        c.on_post_transition(move |_| {
            if trigger.replace(false) {
                panic!("hook failure");
            }
        });

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            c.next();
        }));
        assert!(result.is_err());
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.state().index, 3);

        c.next();
        assert_eq!(c.state().index, 6);
        assert_eq!(visible(&c), vec![6, 7, 8]);
    }

    #[test]
    fn test_panicking_pre_hook_still_applies_markers() {
        let mut c = carousel(10, 3, IncrementMode::Frame);
        let armed = Rc::new(Cell::new(true));
        let trigger = Rc::clone(&armed);
        c.on_pre_transition(move |_| {
            if trigger.replace(false) {
                panic!("hook failure");
            }
        });

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            c.next();
        }));
        assert!(result.is_err());
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.state().index, 3);
        assert_eq!(visible(&c), vec![3, 4, 5]);
        assert!(!c.affordances().prev_disabled);

        c.prev();
        assert_eq!(c.state().index, 0);
        assert!(c.affordances().prev_disabled);
    }

    #[test]
    fn test_tile_mode_jump_to_frame_clamps() {
        let mut c = carousel(10, 3, IncrementMode::Tile);
        assert_eq!(c.state().tile_delta, 2);
        let posts = record_posts(&mut c);

        c.next();
        assert_eq!(c.state().index, 1);
        c.jump_to_frame(4);
        assert_eq!(c.state().index, 7);
        // No slide of the current tile outside frame mode
        assert_eq!(c.state().cur_tile, Some(7));
        assert!(c.affordances().next_disabled);
        c.jump_to_frame(1);
        assert_eq!(c.state().index, 0);
        assert_eq!(*posts.borrow(), vec![1, 7, 0]);
    }
}
