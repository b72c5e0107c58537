//! Theme constants for the Breakthru GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(236, 236, 232);
pub const EMPTY_TILE: Color32 = Color32::WHITE;
pub const GRID_LINE: Color32 = Color32::BLACK;
pub const LABEL: Color32 = Color32::from_rgb(60, 60, 60);

// Tile fill by owner
pub const GOLD_TILE: Color32 = Color32::from_rgb(255, 215, 0);
pub const SILVER_TILE: Color32 = Color32::from_rgb(192, 192, 192);

// Destination highlights
pub const CAPTURE_TARGET: Color32 = Color32::from_rgb(199, 242, 59);
pub const MOTION_TARGET: Color32 = Color32::from_rgb(173, 209, 53);

pub fn hover_tile() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 40)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(38, 40, 45);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Result colors
pub const RESULT_WIN: Color32 = Color32::from_rgb(80, 200, 120);
pub const RESULT_LOSS: Color32 = Color32::from_rgb(255, 70, 70);
pub const RESULT_TIE: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 32.0;
pub const TILE_GAP: f32 = 1.0;
pub const PIECE_FONT_RATIO: f32 = 0.55;
pub const LABEL_FONT_SIZE: f32 = 14.0;
