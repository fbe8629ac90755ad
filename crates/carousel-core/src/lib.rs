pub mod a11y;
pub mod carousel;
pub mod config;
pub mod controls;
pub mod deck;
pub mod error;
pub mod frame;
pub mod hooks;
pub mod navigator;
pub mod normalize;
pub mod state;
pub mod tile;

pub use carousel::{Carousel, Mount, Phase};
pub use config::{AnimationConfig, AppConfig, CarouselConfig, EasingType, IncrementMode};
pub use controls::{Affordances, FrameStatus};
pub use deck::{Card, Deck};
pub use error::{Error, Result};
pub use frame::FrameWindow;
pub use navigator::Request;
pub use state::CarouselState;
pub use tile::Tile;
