mod labels;
mod piece;
mod square;

pub use labels::{render_column_labels, render_row_labels};
pub use piece::render_piece;
pub use square::render_square;
