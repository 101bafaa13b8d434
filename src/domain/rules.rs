//! Rules engine adapter over shakmaty.
//!
//! All legality decisions are made by shakmaty; this module only translates
//! square pairs into shakmaty moves and exposes the board as a row-major
//! matrix with rank 8 first.

use shakmaty::fen::{Fen, ParseFenError};
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, File, Move, Position, Rank, Role, Square};

use crate::domain::chess::{
    DIMENSION, Piece, PieceColor, PieceKind, shakmaty_to_color, shakmaty_to_piece, to_square,
};

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Occupancy matrix, row 0 = rank 8, column 0 = file a
pub type BoardMatrix = [[Option<Piece>; DIMENSION]; DIMENSION];

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("invalid FEN: {0}")]
    Fen(#[from] ParseFenError),
    #[error("illegal position: {0}")]
    Position(String),
}

/// A move the engine accepted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    #[allow(dead_code)]
    pub piece: Piece,
    #[allow(dead_code)]
    pub captured: Option<PieceKind>,
    pub san: String,
}

/// Holds the authoritative position and the position it started from
#[derive(Clone, Debug)]
pub struct RulesEngine {
    initial: Chess,
    position: Chess,
}

impl RulesEngine {
    /// Create an engine at the given FEN, or the standard start when `None`
    pub fn new(fen: Option<&str>) -> Result<Self, RulesError> {
        let initial = match fen {
            None => Chess::default(),
            Some(fen) => {
                let fen: Fen = fen.trim().parse()?;
                fen.into_position::<Chess>(CastlingMode::Standard)
                    .map_err(|e| RulesError::Position(e.to_string()))?
            }
        };
        Ok(Self {
            position: initial.clone(),
            initial,
        })
    }

    pub fn turn(&self) -> PieceColor {
        shakmaty_to_color(self.position.turn())
    }

    /// Try to play the move from one square to another.
    ///
    /// Returns `None` and leaves the position untouched when no legal move
    /// matches. Castling is addressed by the king's destination square and
    /// pawns reaching the last rank promote to a queen.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<MoveRecord> {
        let mv = self.find_legal_move(from, to)?;
        let turn = self.position.turn();

        let record = MoveRecord {
            from,
            to,
            piece: shakmaty_to_piece(mv.role().of(turn)),
            captured: mv.capture().map(|role| shakmaty_to_piece(role.of(!turn)).kind),
            san: San::from_move(&self.position, mv.clone()).to_string(),
        };

        self.position = self.position.clone().play(mv).ok()?;
        Some(record)
    }

    /// Restore the position the engine was created with
    pub fn reset(&mut self) {
        self.position = self.initial.clone();
    }

    /// Occupancy matrix of the current position
    pub fn board(&self) -> BoardMatrix {
        let board = self.position.board();
        let mut matrix = [[None; DIMENSION]; DIMENSION];
        for (row, cells) in matrix.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = board.piece_at(to_square(row, col)).map(shakmaty_to_piece);
            }
        }
        matrix
    }

    fn find_legal_move(&self, from: Square, to: Square) -> Option<Move> {
        for m in &self.position.legal_moves() {
            let (move_from, move_to) = match m {
                Move::Normal { from, to, .. } => (*from, *to),
                Move::EnPassant { from, to, .. } => (*from, *to),
                Move::Castle { king, rook } => {
                    let king_dest = if rook.file() == File::H {
                        Square::from_coords(File::G, rook.rank())
                    } else {
                        Square::from_coords(File::C, rook.rank())
                    };
                    (*king, king_dest)
                }
                Move::Put { .. } => continue,
            };

            if move_from != from || move_to != to {
                continue;
            }

            let mv = match m {
                Move::Normal {
                    role: Role::Pawn,
                    from,
                    to,
                    capture,
                    promotion: None,
                } if to.rank() == Rank::Eighth || to.rank() == Rank::First => Move::Normal {
                    role: Role::Pawn,
                    from: *from,
                    to: *to,
                    capture: *capture,
                    promotion: Some(Role::Queen),
                },
                _ => m.clone(),
            };
            return Some(mv);
        }
        None
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self {
            initial: Chess::default(),
            position: Chess::default(),
        }
    }
}
