pub mod library;
pub mod provider;

pub use library::{CuratedSource, DEFAULT_THEME};
pub use provider::{
    ProviderError, ThemeResponse, ThemeService, ThemeSource, TOKENS_PER_BOARD,
};
