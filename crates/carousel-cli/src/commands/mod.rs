pub mod config;
pub mod inspect;
pub mod run;
pub mod simulate;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use carousel_core::{AppConfig, CarouselConfig, Deck, IncrementMode};

/// Where the cards come from and how they are paged
#[derive(Args, Debug, Clone, Default)]
pub struct DeckArgs {
    /// TOML deck file
    #[arg(short = 'd', long = "deck", conflicts_with = "tiles")]
    pub deck: Option<PathBuf>,
    /// Generate this many placeholder cards instead of loading a deck
    #[arg(short = 't', long = "tiles")]
    pub tiles: Option<usize>,
    /// Cards per frame (overrides the config file)
    #[arg(short = 'i', long = "increment", allow_negative_numbers = true)]
    pub increment: Option<i64>,
    /// Step by "frame" or "tile" (overrides the config file)
    #[arg(short = 'm', long = "mode")]
    pub mode: Option<IncrementMode>,
}

const DEFAULT_GENERATED_TILES: usize = 12;

impl DeckArgs {
    pub fn load_deck(&self) -> Result<Deck> {
        match &self.deck {
            Some(path) => Ok(Deck::load(path)?),
            None => Ok(Deck::generate(self.tiles.unwrap_or(DEFAULT_GENERATED_TILES))),
        }
    }

    /// Config file values with command-line overrides applied
    pub fn carousel_config(&self, config: &AppConfig) -> Result<CarouselConfig> {
        let mut carousel = config.carousel.clone();
        if let Some(increment) = self.increment {
            carousel.increment = increment;
        }
        if let Some(mode) = self.mode {
            carousel.increment_mode = mode;
        }
        carousel.validate()?;
        Ok(carousel)
    }
}
