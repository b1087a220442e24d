//! Terminal color theme
//!
//! Adaptive palettes for dark and light terminal backgrounds. Auto-detects
//! via the COLORFGBG env var, or manual override with --light or
//! VMAP_LIGHT_BG=1.

use ratatui::style::Color;

/// Color theme for the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, key help)
    pub text_dim: Color,
    pub border: Color,
    pub accent: Color,

    // Map terrain
    pub map_player: Color,
    pub map_wall_fg: Color,
    pub map_wall_bg: Color,
    pub map_floor: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::White,
            accent: Color::Cyan,
            map_player: Color::LightGreen,
            map_wall_fg: Color::Indexed(57),
            map_wall_bg: Color::Indexed(234),
            map_floor: Color::Indexed(60),
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            accent: Color::Blue,
            map_player: Color::Green,
            map_wall_fg: Color::Indexed(55),
            map_wall_bg: Color::Indexed(252),
            map_floor: Color::Indexed(102),
        }
    }

    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    fn is_light_background() -> bool {
        if let Ok(val) = std::env::var("VMAP_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is "fg;bg" with color indices (0-15); light backgrounds
        // have bg 7 or 9..=15
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_text_is_white() {
        let theme = Theme::dark();
        assert_eq!(theme.text, Color::White);
    }

    #[test]
    fn test_light_theme_text_is_black() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
    }

    #[test]
    fn test_walls_and_floors_differ() {
        for theme in [Theme::dark(), Theme::light()] {
            assert_ne!(theme.map_wall_fg, theme.map_floor);
            assert_ne!(theme.map_player, theme.map_floor);
        }
    }
}
