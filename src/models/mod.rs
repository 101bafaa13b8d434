pub mod game;

pub use game::{GameSession, PiecePlacement};
