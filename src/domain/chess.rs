//! Pure chess domain types and utilities.
//! No GPUI dependencies - this is the domain layer.

use shakmaty::{Color as SColor, File, Rank, Role, Square};

/// Number of rows and columns on the board
pub const DIMENSION: usize = 8;

/// Column letters, left to right from white's side
pub const COLUMN_NAMES: [char; DIMENSION] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceColor {
    White,
    Black,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }
}

/// Convert row/col (0-indexed, row 0 = rank 8) to shakmaty Square
pub fn to_square(row: usize, col: usize) -> Square {
    let file = File::new(col as u32);
    let rank = Rank::new((DIMENSION - 1 - row) as u32); // row 0 = rank 8, row 7 = rank 1
    Square::from_coords(file, rank)
}

/// Rank number shown for a row (8 for the top row, 1 for the bottom)
pub fn rank_number(row: usize) -> usize {
    DIMENSION - row
}

/// Position label such as "E4" for a row/col pair
pub fn position_label(row: usize, col: usize) -> String {
    format!("{}{}", COLUMN_NAMES[col], rank_number(row))
}

/// Convert shakmaty piece to our domain Piece
pub fn shakmaty_to_piece(piece: shakmaty::Piece) -> Piece {
    let kind = match piece.role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    };
    Piece::new(kind, shakmaty_to_color(piece.color))
}

pub fn shakmaty_to_color(color: SColor) -> PieceColor {
    match color {
        SColor::White => PieceColor::White,
        SColor::Black => PieceColor::Black,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_square_corners() {
        assert_eq!(to_square(0, 0), Square::A8);
        assert_eq!(to_square(7, 7), Square::H1);
        assert_eq!(to_square(4, 4), Square::E4);
    }

    #[test]
    fn test_position_label() {
        assert_eq!(position_label(0, 0), "A8");
        assert_eq!(position_label(7, 7), "H1");
        assert_eq!(position_label(6, 4), "E2");
    }

    #[test]
    fn test_label_matches_square_name() {
        for row in 0..DIMENSION {
            for col in 0..DIMENSION {
                let expected = to_square(row, col).to_string().to_uppercase();
                assert_eq!(position_label(row, col), expected);
            }
        }
    }

    #[test]
    fn test_shakmaty_to_piece() {
        let piece = shakmaty_to_piece(shakmaty::Piece {
            color: SColor::Black,
            role: Role::Knight,
        });
        assert_eq!(piece, Piece::new(PieceKind::Knight, PieceColor::Black));
    }
}
