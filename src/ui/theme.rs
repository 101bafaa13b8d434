//! Theme constants and colors for the chess UI.

use gpui::{Rgba, rgb};

// Layout constants
pub const WINDOW_PADDING: f32 = 16.0;
pub const TITLE_SIZE: f32 = 24.0;

// Board colors
pub const LIGHT_SQUARE: u32 = 0xFFFFFF;
pub const DARK_SQUARE: u32 = 0x2E2E2E;
pub const FRAME_BG: u32 = 0x2E2E2E;
pub const LABEL_TEXT: u32 = 0xFFFFFF;

// Window colors
pub const WINDOW_BG: u32 = 0xF2F2F2;
pub const TEXT_PRIMARY: u32 = 0x1E1E1E;
pub const TEXT_SECONDARY: u32 = 0x888888;

/// Get the color for a board square based on its position
pub fn square_color(row: usize, col: usize) -> Rgba {
    if (row + col) % 2 == 0 {
        rgb(LIGHT_SQUARE)
    } else {
        rgb(DARK_SQUARE)
    }
}
