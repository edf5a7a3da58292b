use iced::widget::container;
use iced::{Background, Border, Color, Theme, theme};

/// Warm dark palette for the outfit screen
#[derive(Debug, Clone, Copy)]
pub struct WardrobeTheme;

impl WardrobeTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.07, 0.06, 0.06); // #120F0F
    pub const PANEL: Color = Color::from_rgb(0.12, 0.11, 0.10); // #1F1C1A
    pub const ACCENT: Color = Color::from_rgb(0.91, 0.62, 0.36); // #E89E5C

    // Item discs
    pub const DISC_FILL: Color = Color::from_rgb(0.23, 0.21, 0.20); // #3B3633
    pub const DISC_ACTIVE: Color = Color::from_rgb(0.33, 0.27, 0.22); // #544538
    pub const DISC_STROKE: Color = Color::from_rgb(0.45, 0.42, 0.40); // #736B66

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.96, 0.94, 0.91); // #F5F0E8
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.66, 0.62, 0.58); // #A89E94

    // Badges
    pub const ACCEPTED: Color = Color::from_rgb(0.20, 0.72, 0.40); // #33B866
    pub const REJECTED: Color = Color::from_rgb(0.90, 0.26, 0.24); // #E6423D

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;
        palette.success = Self::ACCEPTED;
        palette.danger = Self::REJECTED;

        Theme::custom("Wardrobe".to_string(), palette)
    }

    pub fn panel(_: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(Self::PANEL)),
            border: Border {
                radius: 12.0.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            ..Default::default()
        }
    }
}
