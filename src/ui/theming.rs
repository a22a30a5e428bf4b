// SPDX-License-Identifier: MPL-2.0
//! Theme mode from settings and the Iced theme it resolves to.

use crate::ui::design_tokens::palette;
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// `[general] theme_mode` in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the desktop setting; dark when it cannot be detected.
    #[default]
    System,
}

impl ThemeMode {
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

/// Colors the gallery paints with under one mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub surface_primary: Color,
    /// Behind the grid and the search bar.
    pub surface_secondary: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub brand_primary: Color,
    pub error: Color,
    pub warning: Color,
    pub success: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            brand_primary: palette::PRIMARY_600,
            ..Self::semantic()
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            brand_primary: palette::PRIMARY_400,
            ..Self::semantic()
        }
    }

    /// Status colors shared by both modes.
    fn semantic() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::WHITE,
            text_primary: palette::BLACK,
            text_secondary: palette::BLACK,
            brand_primary: palette::PRIMARY_500,
            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
        }
    }
}

/// Resolved theme for the running app.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    dark: bool,
}

impl AppTheme {
    /// Resolves `mode`, querying the desktop once for [`ThemeMode::System`].
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };
        Self { colors, mode, dark }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        let name = if self.dark { "Gallery Dark" } else { "Gallery Light" };
        Theme::custom(
            name.to_string(),
            Palette {
                background: self.colors.surface_primary,
                text: self.colors.text_primary,
                primary: self.colors.brand_primary,
                success: self.colors.success,
                warning: self.colors.warning,
                danger: self.colors.error,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_without_detection() {
        assert!(!AppTheme::new(ThemeMode::Light).is_dark());
        assert!(AppTheme::new(ThemeMode::Dark).is_dark());
        // Depends on the desktop; only check it resolves.
        let _ = AppTheme::new(ThemeMode::System);
    }

    #[test]
    fn schemes_contrast_text_with_surface() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();
        assert!(light.surface_primary.r > 0.9);
        assert!(dark.surface_primary.r < 0.2);
        assert!(light.text_primary.r < light.surface_primary.r);
        assert!(dark.text_primary.r > dark.surface_primary.r);
    }

    #[test]
    fn status_colors_are_shared() {
        assert_eq!(ColorScheme::light().error, ColorScheme::dark().error);
        assert_eq!(ColorScheme::light().warning, palette::WARNING_500);
    }

    #[test]
    fn iced_theme_follows_mode() {
        assert!(AppTheme::new(ThemeMode::Dark).iced_theme().extended_palette().is_dark);
        assert!(!AppTheme::new(ThemeMode::Light).iced_theme().extended_palette().is_dark);
    }

    #[test]
    fn mode_parses_from_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let parsed: Wrapper = toml::from_str("mode = \"dark\"").expect("valid mode");
        assert_eq!(parsed.mode, ThemeMode::Dark);
    }
}
