use futures::future;
use futures::future::BoxFuture;
use mind_match::theme::{
    CuratedSource, ProviderError, ThemeResponse, ThemeService, ThemeSource, TOKENS_PER_BOARD,
};
use pretty_assertions::assert_eq;

struct FailingSource;

impl ThemeSource for FailingSource {
    fn fetch(&self, _theme: &str) -> BoxFuture<'_, Result<ThemeResponse, ProviderError>> {
        Box::pin(future::ready(Err(ProviderError::Transport(
            "network unreachable".to_string(),
        ))))
    }
}

/// Simulates a provider replying with raw JSON that has to be parsed.
struct RawJsonSource(&'static str);

impl ThemeSource for RawJsonSource {
    fn fetch(&self, _theme: &str) -> BoxFuture<'_, Result<ThemeResponse, ProviderError>> {
        Box::pin(future::ready(ThemeResponse::from_json(self.0)))
    }
}

#[tokio::test]
async fn curated_service_always_returns_a_full_board() {
    let service = ThemeService::curated();

    for theme in ["Animals", "space", "OCEAN", "pizza night", "", "🤷", "zzz"] {
        let tokens = service.generate(theme).await;
        assert_eq!(
            tokens.len(),
            TOKENS_PER_BOARD,
            "theme '{}' did not yield a full board",
            theme
        );
        assert!(tokens.iter().all(|t| !t.is_empty()));
    }
}

#[tokio::test]
async fn curated_service_is_deterministic() {
    let service = ThemeService::curated();
    let first = service.generate("space").await;
    let second = service.generate("space").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn transport_failure_never_surfaces() {
    let service = ThemeService::new(Box::new(FailingSource));
    let tokens = service.generate("anything").await;
    assert_eq!(tokens.len(), TOKENS_PER_BOARD);
}

#[tokio::test]
async fn malformed_response_never_surfaces() {
    let service = ThemeService::new(Box::new(RawJsonSource("{\"items\": 42}")));
    let tokens = service.generate("anything").await;
    assert_eq!(tokens.len(), TOKENS_PER_BOARD);
}

#[tokio::test]
async fn partial_response_is_padded_to_a_full_board() {
    let service = ThemeService::new(Box::new(RawJsonSource(
        r#"{"items": ["🚀", "🪐", "🌟"]}"#,
    )));
    let tokens = service.generate("space").await;

    assert_eq!(tokens.len(), TOKENS_PER_BOARD);
    assert_eq!(&tokens[..3], ["🚀", "🪐", "🌟"]);
}

#[tokio::test]
async fn oversized_response_is_truncated() {
    let service = ThemeService::new(Box::new(RawJsonSource(
        r#"{"items": ["1","2","3","4","5","6","7","8","9","10"]}"#,
    )));
    let tokens = service.generate("numbers").await;

    assert_eq!(tokens.len(), TOKENS_PER_BOARD);
    assert_eq!(tokens[7], "8");
}

#[tokio::test]
async fn curated_source_honors_the_wire_contract() {
    let source = CuratedSource;
    let response = source.fetch("music").await.unwrap();
    assert_eq!(response.items.len(), TOKENS_PER_BOARD);
}
