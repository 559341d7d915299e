//! Centralized theming for the sparkreply TUI
//!
//! This module provides a single source of truth for all colors and styles
//! used throughout the application.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use std::sync::RwLock;

use crate::config::ThemeVariant;

/// Global theme variant storage
static THEME_VARIANT: RwLock<ThemeVariant> = RwLock::new(ThemeVariant::Dark);

/// Initialize the theme variant (call once at startup)
pub fn init_theme(variant: ThemeVariant) {
    if let Ok(mut guard) = THEME_VARIANT.write() {
        *guard = variant;
    }
}

/// Get the current theme variant
pub fn current_theme() -> ThemeVariant {
    THEME_VARIANT.read().map(|g| *g).unwrap_or_default()
}

/// Intent badge palette
mod intent {
    use super::Color;

    pub const INQUIRY: Color = Color::Rgb(59, 130, 246); // #3B82F6
    pub const COMPLAINT: Color = Color::Rgb(236, 72, 153); // #EC4899
    pub const OFFER: Color = Color::Rgb(245, 158, 11); // #F59E0B
    pub const INFORMATION: Color = Color::Rgb(234, 179, 8); // #EAB308
}

/// Badge color for a detected intent. Labels are matched exactly; anything
/// the service invents gets the inquiry blue.
pub fn intent_color(intent: &str) -> Color {
    match intent {
        "Inquiry" => intent::INQUIRY,
        "Complaint" => intent::COMPLAINT,
        "Offer" => intent::OFFER,
        "Information" => intent::INFORMATION,
        _ => intent::INQUIRY,
    }
}

/// Border type helpers for different UI contexts
pub mod borders {
    use super::*;

    /// Border type for popups and focused editors
    pub fn popup() -> BorderType {
        match current_theme() {
            ThemeVariant::Dark => BorderType::Rounded,
            ThemeVariant::HighContrast => BorderType::Thick,
        }
    }

    /// Border type for unfocused panels
    pub fn panel() -> BorderType {
        BorderType::Plain
    }
}

/// Color palette - colors that vary by theme
pub mod colors {
    use super::*;

    pub fn bg_status() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(24, 24, 37),
            ThemeVariant::HighContrast => Color::Black,
        }
    }

    pub fn bg_error() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(243, 139, 168),
            ThemeVariant::HighContrast => Color::Red,
        }
    }

    pub fn bg_help() -> Color {
        Color::Reset
    }

    pub fn fg_primary() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(205, 214, 244),
            ThemeVariant::HighContrast => Color::White,
        }
    }

    pub fn fg_secondary() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(186, 194, 222),
            ThemeVariant::HighContrast => Color::White,
        }
    }

    pub fn fg_muted() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(108, 112, 134),
            ThemeVariant::HighContrast => Color::Gray,
        }
    }

    pub fn fg_accent() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(137, 180, 250),
            ThemeVariant::HighContrast => Color::Cyan,
        }
    }

    pub fn fg_warning() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(249, 226, 175),
            ThemeVariant::HighContrast => Color::Yellow,
        }
    }

    pub fn fg_error() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(243, 139, 168),
            ThemeVariant::HighContrast => Color::LightRed,
        }
    }

    pub fn fg_success() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(166, 227, 161),
            ThemeVariant::HighContrast => Color::LightGreen,
        }
    }

    pub fn border() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(69, 71, 90),
            ThemeVariant::HighContrast => Color::Gray,
        }
    }

    pub fn border_focused() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(180, 190, 254),
            ThemeVariant::HighContrast => Color::White,
        }
    }

    pub fn bg_selection() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Rgb(69, 71, 90),
            ThemeVariant::HighContrast => Color::Blue,
        }
    }
}

/// UI symbols - centralized for consistency
pub mod symbols {
    pub const CONNECTED: &str = "●";
}

/// Pre-composed styles for common UI elements
pub struct Theme;

impl Theme {
    // === Text Styles ===

    pub fn text() -> Style {
        Style::default().fg(colors::fg_primary())
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(colors::fg_secondary())
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors::fg_muted())
    }

    pub fn text_accent() -> Style {
        Style::default().fg(colors::fg_accent())
    }

    /// Inline validation or service error under the email input
    pub fn text_error() -> Style {
        Style::default()
            .fg(colors::fg_error())
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_success() -> Style {
        Style::default().fg(colors::fg_success())
    }

    pub fn text_warning() -> Style {
        Style::default().fg(colors::fg_warning())
    }

    // === Status Bar ===

    pub fn status_bar() -> Style {
        Style::default()
            .bg(colors::bg_status())
            .fg(colors::fg_primary())
    }

    pub fn status_title() -> Style {
        Self::status_bar()
            .fg(colors::fg_accent())
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_syncing() -> Style {
        Self::status_bar().fg(colors::fg_warning())
    }

    pub fn status_connected() -> Style {
        Self::status_bar().fg(colors::fg_success())
    }

    pub fn error_bar() -> Style {
        Style::default()
            .bg(colors::bg_error())
            .fg(Color::Black)
    }

    // === Help Bar ===

    pub fn help_key() -> Style {
        Style::default()
            .bg(colors::bg_help())
            .fg(colors::fg_warning())
    }

    pub fn help_desc() -> Style {
        Style::default()
            .bg(colors::bg_help())
            .fg(colors::fg_muted())
    }

    // === Borders ===

    pub fn border() -> Style {
        Style::default().fg(colors::border())
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors::border_focused())
    }

    // === Analysis Result ===

    /// Filled badge for the detected intent
    pub fn intent_badge(intent: &str) -> Style {
        Style::default()
            .bg(intent_color(intent))
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab() -> Style {
        Self::text_muted()
    }

    pub fn tab_selected() -> Style {
        Style::default()
            .bg(colors::bg_selection())
            .fg(colors::fg_primary())
            .add_modifier(Modifier::BOLD)
    }
}
