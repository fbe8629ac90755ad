use std::time::Duration;

pub use carousel_core::AnimationConfig;

/// Extension trait for AnimationConfig with utility methods
pub trait AnimationConfigExt {
    fn duration(&self) -> Duration;

    /// Redraw interval while a slide is running
    fn tick_duration(&self) -> Duration;

    /// Whether slides animate at all
    fn is_smooth(&self) -> bool;
}

impl AnimationConfigExt for AnimationConfig {
    #[inline]
    fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[inline]
    fn tick_duration(&self) -> Duration {
        if self.fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000 / self.fps as u64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.enabled && self.duration_ms > 0
    }
}
