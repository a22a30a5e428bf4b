// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (search submit, load more).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let (background, edge, drop) = match status {
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => return disabled(theme),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: drop,
        snap: true,
    }
}

fn disabled(theme: &Theme) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;
    button::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Buttons drawn over the modal backdrop (close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Clickable gallery cell: flat, with a brand outline on hover.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let outline = match status {
        button::Status::Hovered | button::Status::Pressed => Border {
            color: palette::PRIMARY_400,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        _ => Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
    };

    button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: WHITE,
        border: outline,
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::MD
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Borderless icon button (toast dismiss): no fill until hovered.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.extended_palette().background.base.text;
    let fill = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: fill.map(|a| Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: if matches!(status, button::Status::Disabled) {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..text
            }
        } else {
            text
        },
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
