//! Chat completion client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, CompletionConfig};
use crate::ports::{CompletionClient, CompletionRequest};

const DEFAULT_STATUS_MESSAGE: &str = "Completion request failed";

/// HTTP transport for an OpenAI-compatible chat completion endpoint.
///
/// Performs exactly one request per call. There is no retry.
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client with an explicit API key.
    pub fn new(api_key: String, config: &CompletionConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::CompletionApiError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_key, api_url: config.api_url.clone(), client })
    }

    /// Resolve the API key from the environment variable named in `config`.
    pub fn from_env_with_config(config: &CompletionConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::EnvironmentVariableMissing(config.api_key_env.clone()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, request: &ApiRequest<'_>) -> Result<String, AppError> {
        tracing::debug!(url = %self.api_url, model = request.model, "Sending completion request");

        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(transport_error)?;

        let status = response.status();
        let body_text = response.text().map_err(transport_error)?;

        if status.is_success() {
            let api_response: ApiResponse = serde_json::from_str(&body_text)
                .map_err(|e| AppError::MalformedCompletion(e.to_string()))?;

            return api_response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .filter(|content| !content.trim().is_empty())
                .ok_or(AppError::EmptyCompletion);
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 401 || status.as_u16() == 403 {
                "Authentication failed".to_string()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        tracing::warn!(status = status.as_u16(), %message, "Completion request rejected");
        Err(AppError::CompletionApiError { message, status: Some(status.as_u16()) })
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

fn transport_error(e: reqwest::Error) -> AppError {
    let message = if e.is_timeout() {
        format!("Request timed out: {}", e)
    } else {
        format!("HTTP request failed: {}", e)
    };
    AppError::CompletionApiError { message, status: None }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        let api_request = ApiRequest {
            model: &request.model,
            messages: vec![ApiMessage { role: "user", content: &request.prompt }],
            temperature: request.temperature,
        };

        self.send_request(&api_request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serial_test::serial;
    use std::io::Write;

    fn config_for(server: &mockito::Server) -> CompletionConfig {
        CompletionConfig {
            api_url: Url::parse(&server.url()).unwrap(),
            timeout_secs: 1,
            ..Default::default()
        }
    }

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "gpt-4".to_string(),
            prompt: "Scenario: Tax Reform".to_string(),
            temperature: 0.6,
        }
    }

    #[test]
    fn complete_returns_first_choice_verbatim() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .match_header("authorization", "Bearer fake-key")
            .match_body(Matcher::Json(serde_json::json!({
                "model": "gpt-4",
                "messages": [{"role": "user", "content": "Scenario: Tax Reform"}],
                "temperature": 0.6
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices":[{"message":{"role":"assistant","content":"  First.\n"}},{"message":{"content":"Second"}}]}"#,
            )
            .expect(1)
            .create();

        let client = HttpCompletionClient::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let text = client.complete(&request()).unwrap();
        assert_eq!(text, "  First.\n");
        mock.assert();
    }

    #[test]
    fn complete_surfaces_auth_failure_with_status() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"message":"Incorrect API key provided"}}"#)
            .expect(1)
            .create();

        let client = HttpCompletionClient::new("bad".to_string(), &config_for(&server)).unwrap();
        let err = client.complete(&request()).unwrap_err();
        match err {
            AppError::CompletionApiError { message, status } => {
                assert_eq!(status, Some(401));
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("unexpected error variant: {}", other),
        }
        mock.assert();
    }

    #[test]
    fn complete_does_not_retry_rate_limit() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", "/").with_status(429).expect(1).create();

        let client = HttpCompletionClient::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let err = client.complete(&request()).unwrap_err();
        assert!(matches!(
            err,
            AppError::CompletionApiError { ref message, status: Some(429) } if message == "Rate limited"
        ));
        mock.assert();
    }

    #[test]
    fn complete_reports_server_error() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("POST", "/").with_status(503).create();

        let client = HttpCompletionClient::new("fake-key".to_string(), &config_for(&server)).unwrap();
        let err = client.complete(&request()).unwrap_err();
        assert!(matches!(err, AppError::CompletionApiError { status: Some(503), .. }));
    }

    #[test]
    fn complete_rejects_empty_choices() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("POST", "/").with_status(200).with_body(r#"{"choices":[]}"#).create();

        let client = HttpCompletionClient::new("fake-key".to_string(), &config_for(&server)).unwrap();
        assert!(matches!(client.complete(&request()), Err(AppError::EmptyCompletion)));
    }

    #[test]
    fn complete_rejects_null_content() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":null}}]}"#)
            .create();

        let client = HttpCompletionClient::new("fake-key".to_string(), &config_for(&server)).unwrap();
        assert!(matches!(client.complete(&request()), Err(AppError::EmptyCompletion)));
    }

    #[test]
    fn complete_rejects_malformed_body() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("POST", "/").with_status(200).with_body("not json").create();

        let client = HttpCompletionClient::new("fake-key".to_string(), &config_for(&server)).unwrap();
        assert!(matches!(client.complete(&request()), Err(AppError::MalformedCompletion(_))));
    }

    #[test]
    fn unreachable_endpoint_is_a_transport_error() {
        let config = CompletionConfig {
            api_url: Url::parse("http://127.0.0.1:9/v1/chat/completions").unwrap(),
            timeout_secs: 1,
            ..Default::default()
        };
        let client = HttpCompletionClient::new("fake-key".to_string(), &config).unwrap();
        assert!(matches!(
            client.complete(&request()),
            Err(AppError::CompletionApiError { status: None, .. })
        ));
    }

    #[test]
    fn body_read_timeout_is_a_transport_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_chunked_body(|w| {
                w.write_all(br#"{"choices":["#)?;
                w.flush()?;
                std::thread::sleep(std::time::Duration::from_secs(3));
                w.write_all(br#"{"message":{"content":"late"}}]}"#)
            })
            .create();

        let client = HttpCompletionClient::new("fake-key".to_string(), &config_for(&server)).unwrap();
        match client.complete(&request()).unwrap_err() {
            AppError::CompletionApiError { message, status } => {
                assert_eq!(status, None);
                assert!(message.starts_with("Request timed out"), "unexpected message: {}", message);
            }
            other => panic!("unexpected error variant: {}", other),
        }
    }

    #[test]
    fn debug_output_redacts_key() {
        let client =
            HttpCompletionClient::new("sk-secret".to_string(), &CompletionConfig::default()).unwrap();
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    #[serial]
    fn from_env_fails_clearly_when_key_missing() {
        let config = CompletionConfig {
            api_key_env: "CIVLAB_TEST_MISSING_KEY".to_string(),
            ..Default::default()
        };
        unsafe { std::env::remove_var(&config.api_key_env) };

        let err = HttpCompletionClient::from_env_with_config(&config).unwrap_err();
        assert!(
            matches!(err, AppError::EnvironmentVariableMissing(ref name) if name == "CIVLAB_TEST_MISSING_KEY")
        );
    }

    #[test]
    #[serial]
    fn from_env_reads_named_variable() {
        let config = CompletionConfig {
            api_key_env: "CIVLAB_TEST_PRESENT_KEY".to_string(),
            ..Default::default()
        };
        unsafe { std::env::set_var(&config.api_key_env, "sk-test") };

        let client = HttpCompletionClient::from_env_with_config(&config);
        unsafe { std::env::remove_var(&config.api_key_env) };
        assert_eq!(client.unwrap().api_key, "sk-test");
    }
}
