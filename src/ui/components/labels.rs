//! File and rank labels drawn around the board.

use crate::domain::{CellDescriptor, DIMENSION, rank_number};
use crate::ui::board_layout::BoardLayout;
use crate::ui::theme::LABEL_TEXT;
use gpui::{Div, FontWeight, div, prelude::*, px, rgb};

/// A row of file letters, one square wide each, taken from a row of cells
pub fn render_column_labels(row: &[CellDescriptor], layout: &BoardLayout) -> Div {
    let square_size = layout.square_size();
    div()
        .flex()
        .flex_row()
        .children(row.iter().map(|cell| {
            div()
                .w(px(square_size))
                .h(px(layout.label_band()))
                .flex()
                .items_center()
                .justify_center()
                .text_size(px(layout.label_font_size()))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(rgb(LABEL_TEXT))
                .child(cell.column_name.to_string())
        }))
}

/// A column of rank numbers 8-1, one square tall each
pub fn render_row_labels(layout: &BoardLayout) -> Div {
    let square_size = layout.square_size();
    div()
        .flex()
        .flex_col()
        .children((0..DIMENSION).map(|row| {
            div()
                .w(px(layout.label_band()))
                .h(px(square_size))
                .flex()
                .items_center()
                .justify_center()
                .text_size(px(layout.label_font_size()))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(rgb(LABEL_TEXT))
                .child(rank_number(row).to_string())
        }))
}
