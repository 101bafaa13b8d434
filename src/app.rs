//! Application setup and window creation.

use anyhow::{Context as _, Result};
use gpui::{App, Bounds, Focusable, KeyBinding, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;

use crate::config::AppConfig;
use crate::domain::RulesEngine;
use crate::models::GameSession;
use crate::ui::views::{GameView, ResetBoard, ShowRandomOpening};

const KEY_CONTEXT: &str = "GameView";

/// Initialize and run the chess application
pub fn run(cx: &mut App, config: &AppConfig, engine: RulesEngine) -> Result<()> {
    gpui_component::init(cx);

    cx.bind_keys([
        KeyBinding::new("cmd-r", ResetBoard, Some(KEY_CONTEXT)),
        KeyBinding::new("ctrl-r", ResetBoard, Some(KEY_CONTEXT)),
        KeyBinding::new("space", ShowRandomOpening, Some(KEY_CONTEXT)),
    ]);

    // Create the game session
    let model = cx.new(|_| GameSession::new(engine));
    let board_size = config.board_size;

    let bounds = Bounds::centered(
        None,
        size(px(config.window_width), px(config.window_height)),
        cx,
    );
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| GameView::new(model, board_size, cx));
            let focus_handle = view.read(cx).focus_handle(cx);
            window.focus(&focus_handle);
            cx.new(|cx| Root::new(view, window, cx))
        },
    )
    .context("Failed to open window")?;

    Ok(())
}
