//! Card tiles and the deck files they are loaded from.
//!
//! A deck is a TOML document:
//!
//! ```toml
//! title = "Release notes"
//!
//! [[cards]]
//! title = "Faster startup"
//! body = "Cold start is down to 40ms."
//!
//! [[cards]]
//! filler = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::tile::Tile;

/// A text card; the tile type used by the terminal front end
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Layout padding with no content
    #[serde(default)]
    pub filler: bool,
    #[serde(skip)]
    pub visible: bool,
    #[serde(skip)]
    pub focusable: bool,
}

impl Card {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Default::default()
        }
    }

    pub fn filler() -> Self {
        Self {
            filler: true,
            ..Default::default()
        }
    }
}

impl Tile for Card {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    fn is_filler(&self) -> bool {
        self.filler
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Deck {
    /// Load a deck from a TOML file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::DeckParse(e.to_string()))
    }

    /// Numbered placeholder cards, handy for demos and simulations
    pub fn generate(count: usize) -> Self {
        Self {
            title: Some(format!("{} generated cards", count)),
            cards: (1..=count)
                .map(|n| Card::new(format!("Card {}", n), format!("Tile #{} of {}", n, count)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}
