pub mod board_model;
pub mod chess;
pub mod openings;
pub mod rules;

pub use board_model::{CellDescriptor, build_board_model};
pub use chess::{DIMENSION, Piece, PieceColor, PieceKind, rank_number};
pub use openings::{OPENINGS, Opening};
pub use rules::{MoveRecord, RulesEngine, RulesError, START_FEN};
