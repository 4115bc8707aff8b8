//! Wire-contract tests for the model gateway against a local mock server

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use clearloop::config::Config;
use clearloop::events::ConversationTurn;
use clearloop::gateway::{
    CONNECTION_FALLBACK, CompletionGateway, ModelGateway, NO_CONTENT_FALLBACK,
};
use clearloop::prompts::SYSTEM_PROMPT;

fn test_config(base_url: String) -> Config {
    Config {
        api_key: Some("test-key".to_string()),
        base_url,
        ..Config::default()
    }
}

#[tokio::test]
async fn sends_the_captured_request_shape() {
    let server = MockServer::start().await;

    let expected_body = json!({
        "model": "claude-sonnet-4-20250514",
        "max_tokens": 1000,
        "system": SYSTEM_PROMPT,
        "messages": [
            {"role": "user", "content": "I keep replaying the meeting"}
        ]
    });

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": "That sounds heavy."}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = ModelGateway::new(test_config(server.uri()));
    let turns = [ConversationTurn::user("I keep replaying the meeting")];
    let reply = gateway.complete(SYSTEM_PROMPT, &turns).await;

    assert_eq!(reply, "That sounds heavy.");
    server.verify().await;
}

#[tokio::test]
async fn extracts_the_first_text_block_only() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                {"type": "thinking", "thinking": "considering"},
                {"type": "text", "text": "first text block"},
                {"type": "text", "text": "second text block"}
            ]
        })))
        .mount(&server)
        .await;

    let gateway = ModelGateway::new(test_config(server.uri()));
    let turns = [ConversationTurn::user("hello")];

    assert_eq!(
        gateway.complete(SYSTEM_PROMPT, &turns).await,
        "first text block"
    );
}

#[tokio::test]
async fn error_status_degrades_to_connection_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"type": "api_error", "message": "overloaded"}
        })))
        .mount(&server)
        .await;

    let gateway = ModelGateway::new(test_config(server.uri()));
    let turns = [ConversationTurn::user("hello")];

    assert_eq!(
        gateway.complete(SYSTEM_PROMPT, &turns).await,
        CONNECTION_FALLBACK
    );
}

#[tokio::test]
async fn non_json_body_degrades_to_connection_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway timeout</html>"))
        .mount(&server)
        .await;

    let gateway = ModelGateway::new(test_config(server.uri()));
    let turns = [ConversationTurn::user("hello")];

    assert_eq!(
        gateway.complete(SYSTEM_PROMPT, &turns).await,
        CONNECTION_FALLBACK
    );
}

#[tokio::test]
async fn missing_content_field_degrades_to_no_content_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg_01", "role": "assistant"
        })))
        .mount(&server)
        .await;

    let gateway = ModelGateway::new(test_config(server.uri()));
    let turns = [ConversationTurn::user("hello")];

    assert_eq!(
        gateway.complete(SYSTEM_PROMPT, &turns).await,
        NO_CONTENT_FALLBACK
    );
}

#[tokio::test]
async fn unreachable_endpoint_degrades_to_connection_fallback() {
    // Discard port; nothing listens there
    let gateway = ModelGateway::new(test_config("http://127.0.0.1:9".to_string()));
    let turns = [ConversationTurn::user("hello")];

    assert_eq!(
        gateway.complete(SYSTEM_PROMPT, &turns).await,
        CONNECTION_FALLBACK
    );
}

#[tokio::test]
async fn history_limit_bounds_the_outbound_window() {
    let server = MockServer::start().await;

    // Only the two most recent turns may go out
    let expected_body = json!({
        "model": "claude-sonnet-4-20250514",
        "max_tokens": 1000,
        "system": SYSTEM_PROMPT,
        "messages": [
            {"role": "user", "content": "third"},
            {"role": "assistant", "content": "reply three"}
        ]
    });

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": "ok"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        history_limit: Some(2),
        ..test_config(server.uri())
    };
    let gateway = ModelGateway::new(config);

    let turns = [
        ConversationTurn::user("first"),
        ConversationTurn::assistant("reply one"),
        ConversationTurn::user("second"),
        ConversationTurn::assistant("reply two"),
        ConversationTurn::user("third"),
        ConversationTurn::assistant("reply three"),
    ];

    assert_eq!(gateway.complete(SYSTEM_PROMPT, &turns).await, "ok");
    server.verify().await;
}
