use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log files, saved decks)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// How far a single `next`/`prev` request moves the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncrementMode {
    /// Advance by a whole frame (`increment` tiles)
    #[default]
    Frame,
    /// Advance by a single tile
    Tile,
}

impl IncrementMode {
    pub fn toggled(self) -> Self {
        match self {
            IncrementMode::Frame => IncrementMode::Tile,
            IncrementMode::Tile => IncrementMode::Frame,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IncrementMode::Frame => "frame",
            IncrementMode::Tile => "tile",
        }
    }
}

impl std::str::FromStr for IncrementMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "frame" => Ok(IncrementMode::Frame),
            "tile" => Ok(IncrementMode::Tile),
            other => Err(crate::Error::Config(format!(
                "unknown increment mode '{}', expected 'frame' or 'tile'",
                other
            ))),
        }
    }
}

/// Per-carousel options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Tiles per frame, and the step size in frame mode
    #[serde(default = "default_increment")]
    pub increment: i64,
    /// Step by frame or by tile
    #[serde(default)]
    pub increment_mode: IncrementMode,
    /// Maintain visibility/focusability markers on tiles
    #[serde(default = "default_true")]
    pub accessible: bool,
    /// Width of one tile, supplied by the layout owner
    #[serde(default = "default_tile_width")]
    pub tile_width: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            increment: default_increment(),
            increment_mode: IncrementMode::default(),
            accessible: default_true(),
            tile_width: default_tile_width(),
        }
    }
}

impl CarouselConfig {
    /// Validated increment as a tile count
    pub fn step(&self) -> crate::Result<usize> {
        if self.increment < 1 {
            return Err(crate::Error::InvalidIncrement(self.increment));
        }
        usize::try_from(self.increment).map_err(|_| crate::Error::InvalidIncrement(self.increment))
    }

    /// Check the configuration before any carousel is built from it
    pub fn validate(&self) -> crate::Result<()> {
        self.step()?;
        if !self.tile_width.is_finite() || self.tile_width < 0.0 {
            return Err(crate::Error::Config(format!(
                "tile_width must be a non-negative number, got {}",
                self.tile_width
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Card height in terminal rows
    #[serde(default = "default_card_height")]
    pub card_height: u16,
    /// Theme name ("gruvbox-dark", "gruvbox-light", "nord")
    #[serde(default = "default_theme_name")]
    pub theme: String,
    /// Slide animation between frames
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            card_height: default_card_height(),
            theme: default_theme_name(),
            animation: AnimationConfig::default(),
        }
    }
}

/// Easing curve used for slide animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the target
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Animate the track offset between frames
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Duration of one slide in milliseconds
    #[serde(default = "default_animation_duration")]
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Redraw rate while a slide is in progress
    #[serde(default = "default_animation_fps")]
    pub fps: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            fps: default_animation_fps(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "l", "<C-n>" (Ctrl+n), "<S-g>" (Shift+g), "<CR>", "<Esc>", "<Tab>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Advance one step
    #[serde(default = "default_key_next")]
    pub next: String,
    /// Go back one step
    #[serde(default = "default_key_prev")]
    pub prev: String,
    /// Return to the first frame
    #[serde(default = "default_key_reset")]
    pub reset: String,
    /// Jump to the last frame
    #[serde(default = "default_key_last_frame")]
    pub last_frame: String,
    /// Switch between frame and tile stepping
    #[serde(default = "default_key_toggle_mode")]
    pub toggle_mode: String,
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next: default_key_next(),
            prev: default_key_prev(),
            reset: default_key_reset(),
            last_frame: default_key_last_frame(),
            toggle_mode: default_key_toggle_mode(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next() -> String { "l".to_string() }
fn default_key_prev() -> String { "h".to_string() }
fn default_key_reset() -> String { "0".to_string() }
fn default_key_last_frame() -> String { "G".to_string() }
fn default_key_toggle_mode() -> String { "m".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("carousel")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_increment() -> i64 {
    1
}

fn default_tile_width() -> f64 {
    1.0
}

fn default_tick_rate() -> u64 {
    100
}

fn default_card_height() -> u16 {
    7
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

fn default_animation_duration() -> u64 {
    180
}

fn default_animation_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.carousel.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/carousel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("carousel")
            .join("config.toml")
    }

    /// Get the log file path used while the terminal UI owns the screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("carousel.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.carousel.increment, 1);
        assert_eq!(config.carousel.increment_mode, IncrementMode::Frame);
        assert!(config.carousel.accessible);
        assert_eq!(config.ui.animation.easing, EasingType::Cubic);
        assert_eq!(config.keymap.next, "l");
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml(
            r#"
            [carousel]
            increment = 3
            increment_mode = "tile"
            "#,
        )
        .unwrap();
        assert_eq!(config.carousel.step().unwrap(), 3);
        assert_eq!(config.carousel.increment_mode, IncrementMode::Tile);
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_non_integer_increment_rejected() {
        let err = AppConfig::from_toml("[carousel]\nincrement = 1.5\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_non_positive_increment_rejected() {
        for bad in [0, -2] {
            let config = CarouselConfig {
                increment: bad,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(crate::Error::InvalidIncrement(n)) if n == bad
            ));
        }
        let err = AppConfig::from_toml("[carousel]\nincrement = 0\n").unwrap_err();
        assert!(matches!(err, crate::Error::InvalidIncrement(0)));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("Frame".parse::<IncrementMode>().unwrap(), IncrementMode::Frame);
        assert_eq!("tile".parse::<IncrementMode>().unwrap(), IncrementMode::Tile);
        assert!("page".parse::<IncrementMode>().is_err());
        assert_eq!(IncrementMode::Frame.toggled(), IncrementMode::Tile);
    }

    #[test]
    fn test_toml_roundtrip_keeps_easing() {
        let mut config = AppConfig::default();
        config.ui.animation.easing = EasingType::EaseOut;
        let text = config.to_toml().unwrap();
        assert!(text.contains("ease_out"));
        let back = AppConfig::from_toml(&text).unwrap();
        assert_eq!(back.ui.animation.easing, EasingType::EaseOut);
    }
}
