use std::sync::mpsc;
use std::sync::Arc;

use carousel_core::{AppConfig, Card, Carousel, CarouselState, Deck};
use tracing::{debug, info};

use crate::input::Action;
use crate::slide::SlideAnimator;
use crate::theme::Theme;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Key binding overlay
    Help,
}

/// What the post-transition hook reports back to the UI loop
#[derive(Debug, Clone)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub offset: f64,
    pub announcement: String,
}

impl Transition {
    fn from_state(state: &CarouselState) -> Self {
        Self {
            from: state.prev_index,
            to: state.index,
            offset: state.offset,
            announcement: carousel_core::FrameStatus::from_state(state).to_string(),
        }
    }
}

/// Application state
pub struct App {
    pub carousel: Carousel<Card>,
    pub config: Arc<AppConfig>,
    /// Deck title shown on the track border
    pub title: String,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Transient message (errors, mode changes)
    pub status_message: Option<String>,
    /// Live-region text for the active frame
    pub announcement: String,
    pub slide: SlideAnimator,
    transitions: mpsc::Receiver<Transition>,
    track_width: u16,
}

impl App {
    pub fn new(deck: Deck, config: Arc<AppConfig>, theme: Theme) -> carousel_core::Result<Self> {
        let title = deck.title.clone().unwrap_or_else(|| "Carousel".to_string());
        let mut carousel = Carousel::new(deck.into_cards(), config.carousel.clone())?;

        let (tx, rx) = mpsc::channel();
        carousel.on_post_transition(move |state| {
            // The receiver only goes away when the app is torn down
            let _ = tx.send(Transition::from_state(state));
        });

        info!(carousel = %carousel.id(), tiles = carousel.tiles().len(), "Carousel ready");

        let announcement = carousel.status().to_string();
        Ok(Self {
            carousel,
            slide: SlideAnimator::new(config.ui.animation.clone()),
            config,
            title,
            theme,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            announcement,
            transitions: rx,
            track_width: 0,
        })
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Next => {
                self.carousel.next();
            }
            Action::Prev => {
                self.carousel.prev();
            }
            Action::Reset => {
                self.carousel.reset();
            }
            Action::JumpToFrame(frame) => {
                self.carousel.jump_to_frame(frame);
            }
            Action::LastFrame => {
                let last = self.carousel.state().frame_count;
                self.carousel.jump_to_frame(last);
            }
            Action::ToggleMode => self.toggle_mode(),
            Action::Help => self.mode = Mode::Help,
            Action::ExitMode => {
                self.mode = Mode::Normal;
                self.status_message = None;
            }
            Action::None => {}
        }
        self.drain_transitions();
    }

    /// Pick up everything the post-transition hook has sent since the last call
    pub fn drain_transitions(&mut self) {
        while let Ok(transition) = self.transitions.try_recv() {
            debug!(from = transition.from, to = transition.to, "Transition");
            self.announcement = transition.announcement;
            self.slide.slide_to(offset_columns(transition.offset));
        }
    }

    /// Switch between frame and tile stepping; the carousel starts over on frame 1
    fn toggle_mode(&mut self) {
        let mut config = self.carousel.config().clone();
        config.increment_mode = config.increment_mode.toggled();
        let mode = config.increment_mode;
        match self.carousel.reconfigure(config) {
            Ok(_) => {
                self.status_message = Some(format!("Stepping by {}", mode.as_str()));
                self.resync();
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Re-read state after a rebuild, which fires no hooks
    fn resync(&mut self) {
        self.announcement = self.carousel.status().to_string();
        self.slide.jump_to(offset_columns(self.carousel.state().offset));
    }

    /// Feed the measured track width back as the tile width
    pub fn set_track_width(&mut self, width: u16) {
        if width == self.track_width {
            return;
        }
        self.track_width = width;
        let per_tile = (width as usize / self.carousel.state().increment).max(1);
        self.carousel.set_tile_width(per_tile as f64);
        self.slide.jump_to(offset_columns(self.carousel.state().offset));
    }

    /// Columns per card at the current track width
    pub fn tile_columns(&self) -> u16 {
        self.carousel.state().tile_width.round().clamp(1.0, u16::MAX as f64) as u16
    }

    pub fn update_animation(&mut self) -> u16 {
        self.slide.update()
    }

    pub fn needs_fast_update(&self) -> bool {
        self.slide.is_animating()
    }
}

fn offset_columns(offset: f64) -> u16 {
    offset.round().clamp(0.0, u16::MAX as f64) as u16
}
