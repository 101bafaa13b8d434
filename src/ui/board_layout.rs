//! Board layout calculations - handles sizing and coordinate transformations.

use crate::domain::DIMENSION;

/// Smallest board we will lay out, in logical pixels
const MIN_BOARD_SIZE: f32 = 160.0;

/// Handles all layout calculations for the chess board
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub board_size: f32,
}

/// Absolute rectangle of a piece sprite inside the board
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieceRect {
    pub left: f32,
    pub top: f32,
    pub size: f32,
}

impl BoardLayout {
    pub fn new(board_size: f32) -> Self {
        Self { board_size }
    }

    /// Fit the preferred size into a window, leaving a sixth of the
    /// width for the frame and labels
    pub fn fit(preferred: f32, window_width: f32) -> Self {
        let available = window_width - window_width / 6.0;
        Self::new(preferred.min(available).max(MIN_BOARD_SIZE))
    }

    pub fn square_size(&self) -> f32 {
        self.board_size / DIMENSION as f32
    }

    /// Thickness of the rank/file label bands
    pub fn label_band(&self) -> f32 {
        self.square_size() / 3.0
    }

    pub fn label_font_size(&self) -> f32 {
        self.square_size() / 4.0
    }

    /// Board plus a label band on each side
    pub fn frame_size(&self) -> f32 {
        self.board_size + self.board_size / 12.0
    }

    pub fn piece_rect(&self, row: usize, col: usize) -> PieceRect {
        let size = self.square_size();
        PieceRect {
            left: size * col as f32,
            top: size * row as f32,
            size,
        }
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(320.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes() {
        let layout = BoardLayout::default();
        assert_eq!(layout.square_size(), 40.0);
        assert_eq!(layout.label_font_size(), 10.0);
        assert!((layout.label_band() - 40.0 / 3.0).abs() < f32::EPSILON);
        assert!((layout.frame_size() - (320.0 + 320.0 / 12.0)).abs() < 1e-3);
    }

    #[test]
    fn test_piece_rect() {
        let layout = BoardLayout::new(400.0);
        assert_eq!(
            layout.piece_rect(0, 0),
            PieceRect {
                left: 0.0,
                top: 0.0,
                size: 50.0
            }
        );
        assert_eq!(
            layout.piece_rect(7, 3),
            PieceRect {
                left: 150.0,
                top: 350.0,
                size: 50.0
            }
        );
    }

    #[test]
    fn test_fit_to_window() {
        assert_eq!(BoardLayout::fit(320.0, 600.0).board_size, 320.0);
        assert_eq!(BoardLayout::fit(800.0, 600.0).board_size, 500.0);
        assert_eq!(BoardLayout::fit(320.0, 60.0).board_size, MIN_BOARD_SIZE);
    }
}
