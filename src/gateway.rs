use crate::config::Config;
use crate::events::ConversationTurn;
use serde_json::Value;
use tokio::time::Duration;
use tracing::warn;

/// Shown when the call never produced a parseable response
pub const CONNECTION_FALLBACK: &str =
    "I am having trouble connecting. But I am still here to listen.";

/// Shown when the response parsed but carried no text block
pub const NO_CONTENT_FALLBACK: &str = "I am here. Keep going.";

/// The single outbound boundary of the system. Implementations must settle
/// with usable text for every call: failures are absorbed into fixed fallback
/// strings, never surfaced to the caller as distinguishable error states.
#[allow(async_fn_in_trait)]
pub trait CompletionGateway {
    async fn complete(&self, system: &str, turns: &[ConversationTurn]) -> String;
}

/// Gateway to the Anthropic Messages API, non-streaming
#[derive(Clone)]
pub struct ModelGateway {
    config: Config,
    client: reqwest::Client,
}

impl ModelGateway {
    pub fn new(config: Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_default();

        Self { config, client }
    }

    async fn post_messages(&self, system: &str, turns: &[ConversationTurn]) -> Option<Value> {
        let url = format!("{}/v1/messages", self.config.base_url);

        let window = match self.config.history_limit {
            Some(limit) if turns.len() > limit => &turns[turns.len() - limit..],
            _ => turns,
        };

        let payload = serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "system": system,
            "messages": window,
        });

        let api_key = self.config.get_api_key().unwrap_or_default();

        let response = match self
            .client
            .post(&url)
            .header("x-api-key", api_key)
            .header("Content-Type", "application/json")
            .header("anthropic-version", "2023-06-01")
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "model request failed to send");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body, "model endpoint returned an error status");
            return None;
        }

        match response.json::<Value>().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(error = %e, "model response body was not valid JSON");
                None
            }
        }
    }
}

impl CompletionGateway for ModelGateway {
    async fn complete(&self, system: &str, turns: &[ConversationTurn]) -> String {
        let Some(body) = self.post_messages(system, turns).await else {
            return CONNECTION_FALLBACK.to_string();
        };

        match extract_reply(&body) {
            Some(text) => text,
            None => {
                warn!("model response carried no text block");
                NO_CONTENT_FALLBACK.to_string()
            }
        }
    }
}

/// Pull the first `type == "text"` block out of a Messages API response body
fn extract_reply(body: &Value) -> Option<String> {
    body.get("content")?
        .as_array()?
        .iter()
        .find(|block| block.get("type").and_then(Value::as_str) == Some("text"))
        .and_then(|block| block.get("text").and_then(Value::as_str))
        .map(str::to_string)
}
