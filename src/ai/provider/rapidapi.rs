//! RapidAPI Aggregator Provider
//!
//! Raw JSON-over-HTTPS adapter for a proxy service on RapidAPI. Sends
//! `{"query": .., "sysMsg": ..}` and reads one named field from the reply.
//! A non-200 status and an unparseable 200 body are reported differently.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::{CompletionProvider, ProviderConfig};
use crate::types::{ProviderError, Result};

const PROVIDER_NAME: &str = "rapidapi";

pub struct RapidApiProvider {
    api_key: SecretString,
    url: String,
    host: String,
    response_field: String,
    model: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for RapidApiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RapidApiProvider")
            .field("api_key", &"[REDACTED]")
            .field("url", &self.url)
            .field("host", &self.host)
            .field("response_field", &self.response_field)
            .finish()
    }
}

impl RapidApiProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let api_key = config.resolve_api_key()?;
        let base = config.api_base_or_default()?;
        let path = &config.rapidapi.path;
        let url = if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        };

        Ok(Self {
            api_key,
            url,
            host: config.rapidapi.host.clone(),
            response_field: config.rapidapi.response_field.clone(),
            model: config.model_or_default(),
            client: config.http_client()?,
        })
    }
}

/// Map a raw status/body pair to the generated text.
///
/// Anything other than 200 is a status error; a 200 whose body is not JSON
/// or lacks the field is a parse error.
pub(crate) fn interpret_response(status: u16, body: &str, field: &str) -> Result<String> {
    if status != 200 {
        return Err(ProviderError::status(PROVIDER_NAME, status, body).into());
    }

    let json: Value =
        serde_json::from_str(body).map_err(|e| ProviderError::parse(PROVIDER_NAME, e))?;

    let text = match json.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => {
            return Err(ProviderError::parse(
                PROVIDER_NAME,
                format!("missing field '{}'", field),
            )
            .into());
        }
        Some(other) => other.to_string(),
    };

    if text.trim().is_empty() {
        return Err(ProviderError::empty(PROVIDER_NAME).into());
    }
    Ok(text)
}

#[async_trait]
impl CompletionProvider for RapidApiProvider {
    async fn complete(&self, system_instruction: &str, prompt: &str) -> Result<String> {
        info!("Generating with RapidAPI ({})", self.host);

        let payload = AggregatorRequest {
            query: prompt,
            sys_msg: system_instruction,
        };

        debug!("Sending request to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .header("x-rapidapi-key", self.api_key.expose_secret())
            .header("x-rapidapi-host", &self.host)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ProviderError::request(PROVIDER_NAME, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::request(PROVIDER_NAME, e))?;

        interpret_response(status, &body, &self.response_field)
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AggregatorRequest<'a> {
    query: &'a str,
    sys_msg: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::provider::{ProviderKind, RapidApiConfig, test_server};
    use crate::types::CareerError;

    fn local_config(base: &str) -> ProviderConfig {
        ProviderConfig {
            api_key: Some("rapid-key".to_string()),
            api_base: Some(base.to_string()),
            rapidapi: RapidApiConfig {
                host: "chat.example.p.rapidapi.com".to_string(),
                path: "/gpt4".to_string(),
                response_field: "result".to_string(),
            },
            ..ProviderConfig::for_kind(ProviderKind::RapidApi)
        }
    }

    #[test]
    fn test_extracts_named_field() {
        let text = interpret_response(200, r#"{"result":"Job roles: SRE","status":true}"#, "result")
            .unwrap();
        assert_eq!(text, "Job roles: SRE");
    }

    #[test]
    fn test_status_error_differs_from_parse_error() {
        let status_err = interpret_response(500, "upstream exploded", "result").unwrap_err();
        let parse_err = interpret_response(200, "<html>not json</html>", "result").unwrap_err();

        let status_msg = status_err.to_string();
        let parse_msg = parse_err.to_string();
        assert!(status_msg.contains("500"), "{}", status_msg);
        assert!(parse_msg.contains("could not parse"), "{}", parse_msg);
        assert_ne!(status_msg, parse_msg);
    }

    #[test]
    fn test_status_error_even_with_valid_json_body() {
        let err = interpret_response(429, r#"{"result":"ignored"}"#, "result").unwrap_err();
        match err {
            CareerError::Provider(e) => assert_eq!(e.status_code(), Some(429)),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let err = interpret_response(200, r#"{"answer":"wrong field"}"#, "result").unwrap_err();
        assert!(matches!(
            err,
            CareerError::Provider(ProviderError::Parse { .. })
        ));
        assert!(err.to_string().contains("missing field 'result'"));
    }

    #[test]
    fn test_payload_field_names() {
        let payload = AggregatorRequest {
            query: "q",
            sys_msg: "s",
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"query": "q", "sysMsg": "s"}));
    }

    #[tokio::test]
    async fn test_complete_sends_auth_headers() {
        let (base, request) =
            test_server::respond_once(200, r#"{"result":"Skills to learn: Kubernetes"}"#).await;
        let provider = RapidApiProvider::new(&local_config(&base)).unwrap();

        let text = provider.complete("sys", "prompt").await.unwrap();
        assert_eq!(text, "Skills to learn: Kubernetes");

        let raw = request.await.unwrap().to_lowercase();
        assert!(raw.starts_with("post /gpt4"));
        assert!(raw.contains("x-rapidapi-key: rapid-key"));
        assert!(raw.contains("x-rapidapi-host: chat.example.p.rapidapi.com"));
        assert!(raw.contains(r#""sysmsg":"sys""#));
    }

    #[tokio::test]
    async fn test_complete_reports_server_error_status() {
        let (base, _request) = test_server::respond_once(500, "oops").await;
        let provider = RapidApiProvider::new(&local_config(&base)).unwrap();

        let err = provider.complete("sys", "prompt").await.unwrap_err();
        assert!(err.to_string().contains("status 500"));
    }
}
