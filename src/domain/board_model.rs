//! Board model builder - flattens the engine's occupancy matrix into
//! annotated cells ready for rendering.

use crate::domain::chess::{COLUMN_NAMES, Piece, position_label};
use crate::domain::rules::BoardMatrix;

/// One square of the board as seen by the renderer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellDescriptor {
    /// File letter plus rank number, e.g. "E4"
    pub position: String,
    pub column_name: char,
    /// 0 is the rank 8 row
    pub row_index: usize,
    /// 0 is the A file
    pub column_index: usize,
    pub occupant: Option<Piece>,
}

/// Build the 64 cells in row-major order, top row first
pub fn build_board_model(board: &BoardMatrix) -> Vec<CellDescriptor> {
    board
        .iter()
        .enumerate()
        .flat_map(|(row_index, row)| {
            row.iter()
                .enumerate()
                .map(move |(column_index, occupant)| CellDescriptor {
                    position: position_label(row_index, column_index),
                    column_name: COLUMN_NAMES[column_index],
                    row_index,
                    column_index,
                    occupant: *occupant,
                })
        })
        .collect()
}
