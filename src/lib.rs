pub mod core;
pub mod theme;
pub mod ui;
pub mod config;
pub mod utils;

pub use crate::core::{Card, CardId, GameSession, GameStatus};
pub use crate::theme::{ThemeService, TOKENS_PER_BOARD};
pub use crate::ui::GameInterface;
pub use crate::config::Config;

// Re-export commonly used types
pub type Result<T> = anyhow::Result<T>;

// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
