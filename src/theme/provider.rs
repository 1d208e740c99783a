use futures::future::BoxFuture;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::theme::library;

/// Every board is built from exactly this many content tokens.
pub const TOKENS_PER_BOARD: usize = 8;

/// Wire shape of a theme generation response: `{"items": ["🦁", ...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeResponse {
    pub items: Vec<String>,
}

impl ThemeResponse {
    pub fn from_json(raw: &str) -> Result<Self, ProviderError> {
        let response: ThemeResponse = serde_json::from_str(raw)?;
        if response.items.is_empty() {
            return Err(ProviderError::Empty);
        }
        Ok(response)
    }
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("empty response")]
    Empty,
}

/// The external content-generation boundary. Implementations may fail in any
/// way they like; `ThemeService` absorbs every failure mode.
pub trait ThemeSource: Send + Sync {
    fn fetch(&self, theme: &str) -> BoxFuture<'_, Result<ThemeResponse, ProviderError>>;
}

/// Wraps a `ThemeSource` and guarantees the caller always receives exactly
/// `TOKENS_PER_BOARD` tokens: short responses are padded from a fixed set,
/// long ones truncated, failures replaced wholesale by a fallback set. The
/// game is never blocked by provider failure.
pub struct ThemeService {
    source: Box<dyn ThemeSource>,
}

impl ThemeService {
    pub fn new(source: Box<dyn ThemeSource>) -> Self {
        Self { source }
    }

    /// Service backed by the built-in curated theme library.
    pub fn curated() -> Self {
        Self::new(Box::new(library::CuratedSource))
    }

    pub async fn generate(&self, theme: &str) -> Vec<String> {
        let items = match self.source.fetch(theme).await {
            Ok(response) => response.items,
            Err(err) => {
                warn!("Theme generation failed for '{}': {}", theme, err);
                return library::failure_fallback();
            }
        };

        debug!("Provider returned {} items for '{}'", items.len(), theme);
        normalize(items)
    }
}

fn normalize(mut items: Vec<String>) -> Vec<String> {
    items.truncate(TOKENS_PER_BOARD);

    if items.len() < TOKENS_PER_BOARD {
        let missing = TOKENS_PER_BOARD - items.len();
        items.extend(library::pad_set().into_iter().take(missing));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future;

    struct FailingSource;

    impl ThemeSource for FailingSource {
        fn fetch(&self, _theme: &str) -> BoxFuture<'_, Result<ThemeResponse, ProviderError>> {
            Box::pin(future::ready(Err(ProviderError::Transport(
                "connection refused".to_string(),
            ))))
        }
    }

    struct FixedSource(Vec<String>);

    impl ThemeSource for FixedSource {
        fn fetch(&self, _theme: &str) -> BoxFuture<'_, Result<ThemeResponse, ProviderError>> {
            let items = self.0.clone();
            Box::pin(future::ready(Ok(ThemeResponse { items })))
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_transport_failure_yields_fallback() {
        let service = ThemeService::new(Box::new(FailingSource));
        let tokens = service.generate("Space").await;

        assert_eq!(tokens.len(), TOKENS_PER_BOARD);
        assert_eq!(tokens, library::failure_fallback());
    }

    #[tokio::test]
    async fn test_short_response_is_padded() {
        let service = ThemeService::new(Box::new(FixedSource(strings(&["🚀", "🪐"]))));
        let tokens = service.generate("Space").await;

        assert_eq!(tokens.len(), TOKENS_PER_BOARD);
        assert_eq!(tokens[0], "🚀");
        assert_eq!(tokens[1], "🪐");
    }

    #[tokio::test]
    async fn test_long_response_is_truncated() {
        let many: Vec<String> = (0..20).map(|i| format!("t{}", i)).collect();
        let service = ThemeService::new(Box::new(FixedSource(many)));
        let tokens = service.generate("numbers").await;

        assert_eq!(tokens.len(), TOKENS_PER_BOARD);
        assert_eq!(tokens[7], "t7");
    }

    #[test]
    fn test_malformed_payload() {
        let err = ThemeResponse::from_json("not json at all").unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }

    #[test]
    fn test_empty_payload() {
        let err = ThemeResponse::from_json(r#"{"items": []}"#).unwrap_err();
        assert!(matches!(err, ProviderError::Empty));
    }

    #[test]
    fn test_valid_payload() {
        let response = ThemeResponse::from_json(r#"{"items": ["🍎", "🍌"]}"#).unwrap();
        assert_eq!(response.items, strings(&["🍎", "🍌"]));
    }
}
