use crate::config::RelayConfig;
use crate::error::{FarmOpsError, Result};
use serde::Serialize;
use serde_json::Value;
use std::future::Future;

/// Opaque text conversation with an external support bot.
pub trait ChatRelay: Send + Sync {
    fn send_text(
        &self,
        session_id: &str,
        text: &str,
    ) -> impl Future<Output = Result<Value>> + Send;
}

pub struct BotRelayClient {
    client: reqwest::Client,
    config: RelayConfig,
}

#[derive(Debug, Serialize)]
struct TextMessage<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

impl BotRelayClient {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn session_url(&self, session_id: &str) -> String {
        format!("{}/{}", self.config.url.trim_end_matches('/'), session_id)
    }

    pub async fn test_connection(&self) -> Result<bool> {
        let response = self
            .client
            .get(&self.config.url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}

impl ChatRelay for BotRelayClient {
    async fn send_text(&self, session_id: &str, text: &str) -> Result<Value> {
        let session_id = session_id.trim();
        if session_id.is_empty() {
            return Err(FarmOpsError::validation("session_id", "must not be blank"));
        }
        if text.trim().is_empty() {
            return Err(FarmOpsError::validation("text", "must not be blank"));
        }

        let response = self
            .client
            .post(self.session_url(session_id))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&TextMessage { kind: "text", text })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Relay request failed: {}", e);
                FarmOpsError::RelayUnavailable(e.to_string())
            })?;

        if !response.status().is_success() {
            tracing::warn!("Relay returned {}", response.status());
            return Err(FarmOpsError::RelayUnavailable(format!(
                "relay returned {}",
                response.status()
            )));
        }

        response.json::<Value>().await.map_err(|e| {
            tracing::warn!("Failed to parse relay response: {}", e);
            FarmOpsError::RelayUnavailable(format!("unreadable relay response: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> BotRelayClient {
        BotRelayClient::new(RelayConfig {
            url: format!("{}/converse", server.uri()),
            api_key: "test-key".into(),
            enabled: true,
        })
    }

    #[tokio::test]
    async fn forwards_text_and_returns_upstream_json() {
        let server = MockServer::start().await;
        let reply = json!({"messages": [{"type": "text", "text": "Namaste!"}]});
        Mock::given(method("POST"))
            .and(path("/converse/farmer-42"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_json(json!({"type": "text", "text": "hello"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let value = client(&server).send_text("farmer-42", "hello").await.unwrap();
        assert_eq!(value, reply);
    }

    #[tokio::test]
    async fn upstream_error_status_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client(&server).send_text("s1", "hello").await.unwrap_err();
        assert!(matches!(err, FarmOpsError::RelayUnavailable(_)));
    }

    #[tokio::test]
    async fn unparseable_body_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client(&server).send_text("s1", "hello").await.unwrap_err();
        assert!(matches!(err, FarmOpsError::RelayUnavailable(_)));
    }

    #[tokio::test]
    async fn blank_input_never_reaches_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let relay = client(&server);
        assert!(matches!(
            relay.send_text(" ", "hello").await,
            Err(FarmOpsError::Validation { ref field, .. }) if field == "session_id"
        ));
        assert!(matches!(
            relay.send_text("s1", "").await,
            Err(FarmOpsError::Validation { ref field, .. }) if field == "text"
        ));
    }

    #[tokio::test]
    async fn connection_check_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/converse"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        assert!(!client(&server).test_connection().await.unwrap());
    }

    #[tokio::test]
    async fn connection_check_transport_error_is_http() {
        let relay = BotRelayClient::new(RelayConfig {
            url: "http://127.0.0.1:9".into(),
            api_key: "k".into(),
            enabled: true,
        });
        assert!(matches!(
            relay.test_connection().await,
            Err(FarmOpsError::Http(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_relay_is_unavailable() {
        let relay = BotRelayClient::new(RelayConfig {
            url: "http://127.0.0.1:9".into(),
            api_key: "k".into(),
            enabled: true,
        });
        let err = relay.send_text("s1", "hello").await.unwrap_err();
        assert!(matches!(err, FarmOpsError::RelayUnavailable(_)));
    }
}
