mod app;
mod config;
mod domain;
mod models;
mod ui;

use anyhow::{Context, Result};
use gpui::Application;

use config::AppConfig;
use domain::{RulesEngine, START_FEN};
use ui::FileAssets;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load()?;
    let engine = RulesEngine::new(config.starting_fen.as_deref())
        .context("Invalid starting position")?;
    log::info!(
        "Starting session at {}",
        config.starting_fen.as_deref().unwrap_or(START_FEN)
    );

    Application::new()
        .with_assets(FileAssets::new())
        .run(move |cx| {
            if let Err(e) = app::run(cx, &config, engine) {
                log::error!("{e:#}");
                cx.quit();
            }
        });

    Ok(())
}
