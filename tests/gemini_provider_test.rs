use serde_json::json;

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use paperlens::config::GeminiConfig;
use paperlens::providers::{GeminiProvider, Provider};

/// Point a provider at a mock server, with the API key supplied via env
fn provider_for(server: &MockServer) -> GeminiProvider {
    std::env::set_var("PAPERLENS_GEMINI_API_KEY", "test-key");

    let config = GeminiConfig {
        api_base: Some(server.uri()),
        ..Default::default()
    };
    GeminiProvider::new(config).unwrap()
}

fn generate_path() -> String {
    "/v1beta/models/gemini-1.5-flash:generateContent".to_string()
}

#[tokio::test]
async fn test_generate_returns_candidate_text() {
    let server = MockServer::start().await;

    let body = json!({
        "candidates": [
            {"content": {"parts": [{"text": "{\"title\": \"Mock Paper\"}"}], "role": "model"}}
        ]
    });

    Mock::given(method("POST"))
        .and(path(generate_path()))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [{"text": "analyze this"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let text = provider.generate("analyze this").await.unwrap();
    assert_eq!(text, "{\"title\": \"Mock Paper\"}");
}

#[tokio::test]
async fn test_generate_concatenates_multiple_parts() {
    let server = MockServer::start().await;

    let body = json!({
        "candidates": [
            {"content": {"parts": [{"text": "first "}, {"text": "second"}]}}
        ]
    });

    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let text = provider.generate("prompt").await.unwrap();
    assert_eq!(text, "first second");
}

#[tokio::test]
async fn test_generate_maps_server_error_to_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider.generate("prompt").await;
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("Provider error"), "got: {}", message);
}

#[tokio::test]
async fn test_generate_maps_unauthorized_to_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider.generate("prompt").await;
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("Authentication error"), "got: {}", message);
}

#[tokio::test]
async fn test_generate_rejects_empty_candidates() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider.generate("prompt").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_generate_rejects_unparseable_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider.generate("prompt").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_list_models_strips_name_prefix() {
    let server = MockServer::start().await;

    let body = json!({
        "models": [
            {
                "name": "models/gemini-1.5-flash",
                "displayName": "Gemini 1.5 Flash",
                "inputTokenLimit": 1000000
            },
            {
                "name": "models/gemini-1.5-pro",
                "displayName": "Gemini 1.5 Pro",
                "inputTokenLimit": 2000000
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let models = provider.list_models().await.unwrap();

    assert_eq!(models.len(), 2);
    assert_eq!(models[0].name, "gemini-1.5-flash");
    assert_eq!(models[0].context_window, 1_000_000);
    assert_eq!(models[1].display_name, "Gemini 1.5 Pro");
}
