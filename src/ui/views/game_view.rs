//! Game view - title, framed board, opening name and the control buttons.

use gpui::{
    App, Context, Div, Entity, FocusHandle, Focusable, FontWeight, Subscription, Window, actions,
    div, prelude::*, px, rgb,
};
use gpui_component::button::{Button, ButtonVariants};

use crate::domain::DIMENSION;
use crate::models::GameSession;
use crate::ui::board_layout::BoardLayout;
use crate::ui::components::{render_column_labels, render_piece, render_row_labels, render_square};
use crate::ui::theme::{
    FRAME_BG, TEXT_PRIMARY, TEXT_SECONDARY, TITLE_SIZE, WINDOW_BG, WINDOW_PADDING,
};

actions!(chessboard, [ResetBoard, ShowRandomOpening]);

/// The main view that observes a GameSession
pub struct GameView {
    model: Entity<GameSession>,
    /// Configured board size before fitting to the window
    preferred_board_size: f32,
    focus_handle: FocusHandle,
    _subscription: Subscription,
}

impl GameView {
    pub fn new(
        model: Entity<GameSession>,
        preferred_board_size: f32,
        cx: &mut Context<Self>,
    ) -> Self {
        let _subscription = cx.observe(&model, |_, _, cx| cx.notify());
        Self {
            model,
            preferred_board_size,
            focus_handle: cx.focus_handle(),
            _subscription,
        }
    }

    fn reset_board(&mut self, _: &ResetBoard, _window: &mut Window, cx: &mut Context<Self>) {
        self.model.update(cx, |game, cx| {
            game.reset();
            cx.notify();
        });
    }

    fn show_random_opening(
        &mut self,
        _: &ShowRandomOpening,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.model.update(cx, |game, cx| {
            game.pick_random_opening();
            cx.notify();
        });
    }

    fn render_board(&self, layout: &BoardLayout, cx: &App) -> Div {
        let game = self.model.read(cx);
        let square_size = layout.square_size();
        let board_size = layout.board_size;

        let board = div()
            .relative()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(board_size))
            .h(px(board_size))
            .children(game.cells().chunks(DIMENSION).map(|row| {
                div()
                    .flex()
                    .flex_row()
                    .flex_shrink_0()
                    .children(row.iter().map(|cell| render_square(cell, square_size)))
            }))
            .children(
                game.piece_placements()
                    .into_iter()
                    .map(|placement| render_piece(placement, layout)),
            );

        let band = layout.label_band();
        let top_row = &game.cells()[..DIMENSION];
        let label_row = || {
            div()
                .flex()
                .flex_row()
                .child(div().w(px(band)).h(px(band)))
                .child(render_column_labels(top_row, layout))
                .child(div().w(px(band)).h(px(band)))
        };

        div()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(layout.frame_size()))
            .h(px(layout.frame_size()))
            .bg(rgb(FRAME_BG))
            .child(label_row())
            .child(
                div()
                    .flex()
                    .flex_row()
                    .child(render_row_labels(layout))
                    .child(board)
                    .child(render_row_labels(layout)),
            )
            .child(label_row())
    }
}

impl Focusable for GameView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for GameView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let window_width: f32 = window.viewport_size().width.into();
        let layout = BoardLayout::fit(self.preferred_board_size, window_width);

        let opening_label = match self.model.read(cx).current_opening_name() {
            Some(name) => div().text_color(rgb(TEXT_PRIMARY)).child(name),
            None => div()
                .text_color(rgb(TEXT_SECONDARY))
                .child("No opening shown"),
        };

        let model_reset = self.model.clone();
        let model_random = self.model.clone();

        let buttons = div()
            .flex()
            .flex_row()
            .justify_between()
            .items_center()
            .w(px(layout.frame_size()))
            .child(
                Button::new("reset-board")
                    .label("Reset Board")
                    .on_click(move |_, _, cx| {
                        model_reset.update(cx, |game, cx| {
                            game.reset();
                            cx.notify();
                        });
                    }),
            )
            .child(
                Button::new("random-opening")
                    .label("Show Random Opening")
                    .primary()
                    .on_click(move |_, _, cx| {
                        model_random.update(cx, |game, cx| {
                            game.pick_random_opening();
                            cx.notify();
                        });
                    }),
            );

        div()
            .track_focus(&self.focus_handle)
            .key_context("GameView")
            .on_action(cx.listener(Self::reset_board))
            .on_action(cx.listener(Self::show_random_opening))
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_4()
            .p(px(WINDOW_PADDING))
            .bg(rgb(WINDOW_BG))
            .child(
                div()
                    .text_size(px(TITLE_SIZE))
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(rgb(TEXT_PRIMARY))
                    .child("Chess"),
            )
            .child(opening_label)
            .child(self.render_board(&layout, cx))
            .child(buttons)
    }
}
