//! Square rendering component.

use crate::domain::CellDescriptor;
use crate::ui::theme::square_color;
use gpui::{Div, ElementId, Stateful, div, prelude::*, px};

/// Render a single empty board square; pieces are drawn in a separate layer
pub fn render_square(cell: &CellDescriptor, square_size: f32) -> Stateful<Div> {
    div()
        .id(ElementId::Name(cell.position.clone().into()))
        .flex_shrink_0() // never shrink - maintain aspect ratio
        .size(px(square_size))
        .bg(square_color(cell.row_index, cell.column_index))
}
