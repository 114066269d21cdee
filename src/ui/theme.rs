//! UI theme definitions.
//!
//! The console is dark-only, matching the onroad UI it sits next to.

use egui::{Color32, Visuals};

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
        }
    }
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(12, 12, 14);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(26, 26, 30);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(38, 38, 44);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 235, 240);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);
    /// Value text on numeric rows
    pub const VALUE: Color32 = Color32::from_rgb(224, 232, 121);
    /// Accent color
    pub const ACCENT: Color32 = Color32::from_rgb(51, 171, 76);
    /// Destructive action color
    pub const DANGER: Color32 = Color32::from_rgb(226, 44, 44);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(58, 58, 66);
}

/// Create dark theme visuals.
fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkTheme::PANEL_BG;
    visuals.panel_fill = DarkTheme::BACKGROUND;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.extreme_bg_color = DarkTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(52, 52, 60);
    visuals.widgets.active.bg_fill = DarkTheme::ACCENT;

    visuals.selection.bg_fill = DarkTheme::ACCENT.linear_multiply(0.4);
    visuals.selection.stroke.color = DarkTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = DarkTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = DarkTheme::TEXT_PRIMARY;

    visuals.widgets.noninteractive.bg_stroke.color = DarkTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = DarkTheme::BORDER;

    visuals
}
