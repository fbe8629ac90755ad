use ratatui::style::Color;
use tracing::warn;

/// Runtime colour palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,
    pub accent: Color,
    /// Border of the current tile
    pub focus: Color,
    /// Filler tiles
    pub filler: Color,
    pub disabled: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        gruvbox_dark()
    }
}

pub fn gruvbox_dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x28, 0x28),
        bg1: Color::Rgb(0x32, 0x30, 0x2f),
        bg2: Color::Rgb(0x45, 0x40, 0x3d),
        fg0: Color::Rgb(0xd4, 0xbe, 0x98),
        fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
        grey0: Color::Rgb(0x7c, 0x6f, 0x64),
        grey1: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0x89, 0xb4, 0x82),
        focus: Color::Rgb(0xd8, 0xa6, 0x57),
        filler: Color::Rgb(0x3c, 0x38, 0x36),
        disabled: Color::Rgb(0x5a, 0x52, 0x4c),
        info: Color::Rgb(0x7d, 0xae, 0xa3),
    }
}

pub fn gruvbox_light() -> Theme {
    Theme {
        bg0: Color::Rgb(0xfb, 0xf1, 0xc7),
        bg1: Color::Rgb(0xf4, 0xe8, 0xbe),
        bg2: Color::Rgb(0xeb, 0xdb, 0xb2),
        fg0: Color::Rgb(0x65, 0x47, 0x35),
        fg1: Color::Rgb(0x4f, 0x38, 0x29),
        grey0: Color::Rgb(0xa8, 0x99, 0x84),
        grey1: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0x6c, 0x78, 0x2e),
        focus: Color::Rgb(0xb4, 0x71, 0x09),
        filler: Color::Rgb(0xe5, 0xd5, 0xad),
        disabled: Color::Rgb(0xbd, 0xae, 0x93),
        info: Color::Rgb(0x45, 0x70, 0x7a),
    }
}

pub fn nord() -> Theme {
    Theme {
        bg0: Color::Rgb(0x2e, 0x34, 0x40),
        bg1: Color::Rgb(0x3b, 0x42, 0x52),
        bg2: Color::Rgb(0x43, 0x4c, 0x5e),
        fg0: Color::Rgb(0xd8, 0xde, 0xe9),
        fg1: Color::Rgb(0xe5, 0xe9, 0xf0),
        grey0: Color::Rgb(0x4c, 0x56, 0x6a),
        grey1: Color::Rgb(0x61, 0x6e, 0x88),
        accent: Color::Rgb(0x88, 0xc0, 0xd0),
        focus: Color::Rgb(0xeb, 0xcb, 0x8b),
        filler: Color::Rgb(0x3b, 0x42, 0x52),
        disabled: Color::Rgb(0x4c, 0x56, 0x6a),
        info: Color::Rgb(0x81, 0xa1, 0xc1),
    }
}

/// Look up a theme by name, falling back to gruvbox-dark
pub fn load_theme(name: &str) -> Theme {
    match name.to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" => gruvbox_dark(),
        "gruvbox-light" => gruvbox_light(),
        "nord" => nord(),
        other => {
            warn!("Unknown theme '{}', using gruvbox-dark", other);
            gruvbox_dark()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_known_and_unknown() {
        assert_eq!(load_theme("Nord").bg0, nord().bg0);
        assert_eq!(load_theme("does-not-exist").bg0, gruvbox_dark().bg0);
    }
}
