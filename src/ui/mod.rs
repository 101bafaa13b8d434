pub mod assets;
pub mod board_layout;
pub mod components;
pub mod theme;
pub mod views;

pub use assets::FileAssets;
