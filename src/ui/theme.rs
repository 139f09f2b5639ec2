//! UI theme definitions.

use egui::{Color32, Visuals};
use serde::{Deserialize, Serialize};

use crate::trainer::session::PostureRating;
use crate::trainer::signal::FeedbackKind;

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
        }
    }

    /// Detect the operating system theme preference.
    pub fn from_system() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Light => Theme::Light,
            dark_light::Mode::Dark | dark_light::Mode::Default => Theme::Dark,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "Dark"),
            Theme::Light => write!(f, "Light"),
        }
    }
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(17, 24, 39);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(31, 41, 55);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(42, 52, 68);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(243, 244, 246);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(156, 163, 175);
    /// Accent color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Secondary accent (purple)
    pub const ACCENT_ALT: Color32 = Color32::from_rgb(139, 92, 246);
    /// Success color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(74, 222, 128);
    /// Warning color (yellow)
    pub const WARNING: Color32 = Color32::from_rgb(250, 204, 21);
    /// Error color (red)
    pub const ERROR: Color32 = Color32::from_rgb(248, 113, 113);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(55, 65, 81);
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(249, 250, 251);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(243, 244, 246);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(31, 41, 55);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(107, 114, 128);
    /// Accent color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
    /// Secondary accent (purple)
    pub const ACCENT_ALT: Color32 = Color32::from_rgb(124, 58, 237);
    /// Success color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(22, 163, 74);
    /// Warning color (yellow)
    pub const WARNING: Color32 = Color32::from_rgb(202, 138, 4);
    /// Error color (red)
    pub const ERROR: Color32 = Color32::from_rgb(220, 38, 38);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(229, 231, 235);
}

/// Create dark theme visuals.
fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkTheme::PANEL_BG;
    visuals.panel_fill = DarkTheme::PANEL_BG;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.extreme_bg_color = DarkTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(55, 65, 85);
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

/// Create light theme visuals.
fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightTheme::PANEL_BG;
    visuals.panel_fill = LightTheme::PANEL_BG;
    visuals.faint_bg_color = LightTheme::CARD_BG;
    visuals.extreme_bg_color = LightTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(229, 231, 240);
    visuals.widgets.active.bg_fill = LightTheme::ACCENT;

    visuals.selection.bg_fill = LightTheme::ACCENT.linear_multiply(0.2);
    visuals.selection.stroke.color = LightTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke.color = LightTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = LightTheme::BORDER;

    visuals
}

/// Color for a posture rating band.
pub fn posture_rating_color(rating: PostureRating, theme: Theme) -> Color32 {
    match (theme, rating) {
        (Theme::Dark, PostureRating::Excellent) => DarkTheme::SUCCESS,
        (Theme::Dark, PostureRating::Good) => DarkTheme::WARNING,
        (Theme::Dark, PostureRating::NeedsWork) => DarkTheme::ERROR,
        (Theme::Light, PostureRating::Excellent) => LightTheme::SUCCESS,
        (Theme::Light, PostureRating::Good) => LightTheme::WARNING,
        (Theme::Light, PostureRating::NeedsWork) => LightTheme::ERROR,
    }
}

/// Color for a coaching message severity.
pub fn feedback_color(kind: FeedbackKind, theme: Theme) -> Color32 {
    match (theme, kind) {
        (Theme::Dark, FeedbackKind::Success) => DarkTheme::SUCCESS,
        (Theme::Dark, FeedbackKind::Info) => DarkTheme::ACCENT,
        (Theme::Dark, FeedbackKind::Warning) => DarkTheme::WARNING,
        (Theme::Light, FeedbackKind::Success) => LightTheme::SUCCESS,
        (Theme::Light, FeedbackKind::Info) => LightTheme::ACCENT,
        (Theme::Light, FeedbackKind::Warning) => LightTheme::WARNING,
    }
}
