//! # Theme Configuration
//!
//! Centralized colors for the life calendar. All visual styling should use
//! these constants so the on-screen grid, the progress bar and exported
//! snapshots stay consistent.
//!
//! ## Usage
//! ```rust,ignore
//! use crate::ui::components::theme::CURRENT_THEME;
//!
//! let fill = CURRENT_THEME.grid.lived;
//! ```

use eframe::egui::Color32;

use crate::backend::domain::GridPalette;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Buttons and inputs
    pub interactive: InteractiveColors,
    /// Week cell colors
    pub grid: GridPalette,
    /// Progress bar colors
    pub progress: ProgressColors,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub window_background: Color32,
    /// Card the grid is drawn on (also the snapshot background)
    pub card_background: Color32,
    pub card_shadow: Color32,
    pub card_border: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub heading: Color32,
    pub success: Color32,
    pub error: Color32,
}

/// Colors for interactive elements
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    pub button_fill: Color32,
    pub button_text: Color32,
    pub button_border: Color32,
    pub input_background: Color32,
}

#[derive(Debug, Clone)]
pub struct ProgressColors {
    pub fill: Color32,
    pub track: Color32,
}

/// Default light theme
pub const CURRENT_THEME: Theme = Theme {
    layout: LayoutColors {
        window_background: Color32::from_rgb(245, 243, 250),
        card_background: Color32::from_rgb(255, 255, 255),
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 20),
        card_border: Color32::from_rgb(226, 220, 240),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(40, 36, 56),
        secondary: Color32::from_rgb(110, 104, 130),
        heading: Color32::from_rgb(74, 46, 138),
        success: Color32::from_rgb(34, 139, 84),
        error: Color32::from_rgb(198, 40, 40),
    },
    interactive: InteractiveColors {
        button_fill: Color32::from_rgb(126, 87, 194),
        button_text: Color32::WHITE,
        button_border: Color32::from_rgb(94, 53, 177),
        input_background: Color32::from_rgb(250, 249, 253),
    },
    grid: GridPalette::LIGHT,
    progress: ProgressColors {
        fill: Color32::from_rgb(126, 87, 194),
        track: Color32::from_rgb(230, 226, 240),
    },
};

/// Convenience constants for the most common colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const HEADING: Color32 = CURRENT_THEME.typography.heading;
}
