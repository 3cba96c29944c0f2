//! Light and dark themes for the Pocketbook TUI.
//!
//! The chosen [`Theme`] is persisted in the config file; every render pulls
//! its colors from the matching [`Palette`].

use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

// ============================================================================
// Theme
// ============================================================================

/// User-selectable color theme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon of the toggle: shows the theme you would switch to.
    #[must_use]
    pub const fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Concrete colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub primary: Color,
    pub border: Color,
    pub income: Color,
    pub expense: Color,
    pub error: Color,
    pub selection: Color,
    /// Base particle color before alpha blending.
    particle_rgb: (u8, u8, u8),
    background_rgb: (u8, u8, u8),
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(248, 250, 252),
    text: Color::Rgb(30, 41, 59),
    muted: Color::Rgb(100, 116, 139),
    primary: Color::Rgb(99, 102, 241),
    border: Color::Rgb(203, 213, 225),
    income: Color::Rgb(16, 185, 129),
    expense: Color::Rgb(244, 63, 94),
    error: Color::Rgb(220, 38, 38),
    selection: Color::Rgb(224, 231, 255),
    particle_rgb: (99, 102, 241),
    background_rgb: (248, 250, 252),
};

const DARK: Palette = Palette {
    background: Color::Rgb(15, 23, 42),
    text: Color::Rgb(226, 232, 240),
    muted: Color::Rgb(148, 163, 184),
    primary: Color::Rgb(147, 197, 253),
    border: Color::Rgb(51, 65, 85),
    income: Color::Rgb(52, 211, 153),
    expense: Color::Rgb(251, 113, 133),
    error: Color::Rgb(248, 113, 113),
    selection: Color::Rgb(30, 41, 59),
    particle_rgb: (147, 197, 253),
    background_rgb: (15, 23, 42),
};

impl Palette {
    /// Particle color blended toward the background by `alpha` (0..=1).
    #[must_use]
    pub fn particle(&self, alpha: f64) -> Color {
        let alpha = alpha.clamp(0.0, 1.0);
        let blend = |fg: u8, bg: u8| -> u8 {
            let (fg, bg) = (f64::from(fg), f64::from(bg));
            (bg + (fg - bg) * alpha).round().clamp(0.0, 255.0) as u8
        };
        let (pr, pg, pb) = self.particle_rgb;
        let (br, bg, bb) = self.background_rgb;
        Color::Rgb(blend(pr, br), blend(pg, bg), blend(pb, bb))
    }

    /// Color for an amount of the given sign.
    #[must_use]
    pub const fn amount(&self, is_income: bool) -> Color {
        if is_income { self.income } else { self.expense }
    }

    // ------------------------------------------------------------------------
    // Styles
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::new().fg(self.text).bg(self.background)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::new().fg(self.border)
    }

    #[must_use]
    pub fn focused_border_style(&self) -> Style {
        Style::new().fg(self.primary)
    }

    #[must_use]
    pub fn focused_title_style(&self) -> Style {
        Style::new().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::new().fg(self.muted)
    }

    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::new().bg(self.selection).add_modifier(Modifier::BOLD)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn toggle_icon_matches_target() {
        assert_eq!(Theme::Light.toggle_icon(), "🌙");
        assert_eq!(Theme::Dark.toggle_icon(), "☀️");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn particle_blend_endpoints() {
        let dark = Theme::Dark.palette();
        assert_eq!(dark.particle(1.0), Color::Rgb(147, 197, 253));
        assert_eq!(dark.particle(0.0), Color::Rgb(15, 23, 42));

        let light = Theme::Light.palette();
        assert_eq!(light.particle(2.0), Color::Rgb(99, 102, 241));
    }
}
