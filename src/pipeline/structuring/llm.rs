use serde::{Deserialize, Serialize};

use super::StructuringError;

/// Text-completion backend used for extraction. Implemented by the
/// OpenAI-compatible HTTP client and by mocks in tests.
pub trait CompletionClient: Send + Sync {
    fn complete(
        &self,
        model: &str,
        system: &str,
        prompt: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, StructuringError>;
}

/// Blocking HTTP client for an OpenAI-compatible chat completions API.
pub struct OpenAiClient {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OpenAiClient {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, StructuringError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| StructuringError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
            timeout_secs,
        })
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl CompletionClient for OpenAiClient {
    fn complete(
        &self,
        model: &str,
        system: &str,
        prompt: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, StructuringError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature,
            max_tokens,
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().map_err(|e| {
            if e.is_connect() {
                StructuringError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                StructuringError::HttpClient(format!(
                    "request timed out after {}s",
                    self.timeout_secs
                ))
            } else {
                StructuringError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(StructuringError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .map_err(|e| StructuringError::ResponseParsing(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| {
                StructuringError::MalformedResponse("completion returned no choices".into())
            })
    }
}

/// Mock completion client for tests, returning a canned response.
pub struct MockCompletionClient {
    response: String,
}

impl MockCompletionClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
        }
    }
}

impl CompletionClient for MockCompletionClient {
    fn complete(
        &self,
        _model: &str,
        _system: &str,
        _prompt: &str,
        _temperature: f32,
        _max_tokens: u32,
    ) -> Result<String, StructuringError> {
        Ok(self.response.clone())
    }
}
