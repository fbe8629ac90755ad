//! Eased slide of the card track between frames
//!
//! The carousel core only reports an `offset`; this module turns a change of
//! offset into a short animation the renderer can sample every frame.
//!
//! - `easing`: pure easing curves
//! - `timing`: progress and interpolation helpers
//! - `config`: `AnimationConfig` helpers
//! - `animation`: the animator combining the three
//!
//! ```ignore
//! let mut slide = SlideAnimator::new(config.ui.animation.clone());
//! slide.slide_to(carousel.state().offset.round() as u16);
//! // every frame
//! let offset = slide.update();
//! ```

pub mod config;
pub mod easing;
pub mod timing;

pub mod animation;

pub use animation::SlideAnimator;
pub use config::{AnimationConfig, AnimationConfigExt};
pub use easing::{EasingType, EasingTypeExt};
