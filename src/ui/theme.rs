// CsvEdit - ui/theme.rs
//
// Colour scheme, notification colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::app::notify::Level;
use egui::Color32;

/// Toast background for a notification level.
pub fn toast_fill(level: Level, dark_mode: bool) -> Color32 {
    match (level, dark_mode) {
        (Level::Success, true) => Color32::from_rgb(20, 83, 45),   // Green 900
        (Level::Success, false) => Color32::from_rgb(220, 252, 231), // Green 100
        (Level::Failure, true) => Color32::from_rgb(127, 29, 29),  // Red 900
        (Level::Failure, false) => Color32::from_rgb(254, 226, 226), // Red 100
    }
}

/// Toast text colour, chosen for contrast against `toast_fill`.
pub fn toast_text(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(243, 244, 246) // Gray 100
    } else {
        Color32::from_rgb(17, 24, 39) // Gray 900
    }
}

/// Dashed-border colour of the drop zone; brighter while files hover.
pub fn drop_zone_stroke(hovering: bool) -> Color32 {
    if hovering {
        Color32::from_rgb(59, 130, 246) // Blue 500
    } else {
        Color32::from_rgb(156, 163, 175) // Gray 400
    }
}

/// Fill of the per-row Delete button.
pub const DESTRUCTIVE: Color32 = Color32::from_rgb(185, 28, 28); // Red 700

/// Text on destructive buttons.
pub const DESTRUCTIVE_TEXT: Color32 = Color32::WHITE;

/// Layout constants.
pub const CELL_WIDTH: f32 = 140.0;
pub const ROW_HEIGHT: f32 = 24.0;
pub const DROP_ZONE_HEIGHT: f32 = 70.0;
pub const ADD_ROW_FIELD_WIDTH: f32 = 260.0;
pub const TOAST_WIDTH: f32 = 280.0;
pub const TOAST_MARGIN: f32 = 12.0;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;
