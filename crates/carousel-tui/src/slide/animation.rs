use std::time::{Duration, Instant};

use super::config::{AnimationConfig, AnimationConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp_u16, progress};

#[derive(Debug, Clone)]
struct ActiveSlide {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

/// Track offset animator.
///
/// `slide_to()` starts a slide from wherever the track currently is, so a
/// second request mid-slide continues smoothly instead of snapping back.
#[derive(Debug, Clone)]
pub struct SlideAnimator {
    active: Option<ActiveSlide>,
    config: AnimationConfig,
    position: u16,
}

impl Default for SlideAnimator {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

impl SlideAnimator {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            active: None,
            config,
            position: 0,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Current (possibly mid-slide) offset
    #[inline]
    pub fn position(&self) -> u16 {
        self.position
    }

    /// Where the track will come to rest
    pub fn target(&self) -> u16 {
        self.active.as_ref().map(|s| s.to).unwrap_or(self.position)
    }

    /// Move without animating, cancelling any slide
    pub fn jump_to(&mut self, position: u16) {
        self.active = None;
        self.position = position;
    }

    pub fn slide_to(&mut self, target: u16) {
        if !self.config.is_smooth() || target == self.position {
            self.jump_to(target);
            return;
        }
        self.active = Some(ActiveSlide {
            start: Instant::now(),
            from: self.position,
            to: target,
            duration: self.config.duration(),
            easing: self.config.easing,
        });
    }

    /// Advance the slide; call once per drawn frame
    pub fn update(&mut self) -> u16 {
        if let Some(slide) = &self.active {
            if is_complete(slide.start, slide.duration) {
                self.position = slide.to;
                self.active = None;
            } else {
                let t = slide.easing.apply(progress(slide.start, slide.duration));
                self.position = lerp_u16(slide.from, slide.to, t);
            }
        }
        self.position
    }
}
