//! Piece rendering component.

use crate::models::PiecePlacement;
use crate::ui::assets::piece_image;
use crate::ui::board_layout::BoardLayout;
use gpui::{Div, div, img, prelude::*, px};

/// Render a piece sprite absolutely positioned over its square
pub fn render_piece(placement: PiecePlacement, layout: &BoardLayout) -> Div {
    let rect = layout.piece_rect(placement.row_index, placement.column_index);
    div()
        .absolute()
        .left(px(rect.left))
        .top(px(rect.top))
        .size(px(rect.size))
        .child(img(piece_image(placement.piece)).size(px(rect.size)))
}
