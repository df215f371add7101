use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use shared::{
    error::GenerationError,
    protocol::{response_error_message, GenerationRequest, GENERATE_PATH},
};
use tracing::{info, warn};

pub mod config;
pub mod form;

pub use config::{load_settings, Settings};
pub use form::FormState;

/// Anything that can turn a [`GenerationRequest`] into the service's JSON answer.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, GenerationError>;
}

/// Talks to the external generation service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpGenerationClient {
    http: Client,
    endpoint: String,
}

impl HttpGenerationClient {
    pub fn new(api_base_url: &str) -> Self {
        Self::with_client(Client::new(), api_base_url)
    }

    pub fn with_client(http: Client, api_base_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}{GENERATE_PATH}", api_base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenerationBackend for HttpGenerationClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, GenerationError> {
        info!(
            endpoint = %self.endpoint,
            template_id = %request.template_id,
            prompt_len = request.user_prompt.len(),
            "submitting generation request"
        );
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|err| GenerationError::transport(err.to_string()))?;

        let status = response.status();
        let raw = response
            .bytes()
            .await
            .map_err(|err| GenerationError::transport(err.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&raw)
                .ok()
                .as_ref()
                .and_then(response_error_message);
            warn!(status = status.as_u16(), ?message, "generation service returned failure");
            return Err(GenerationError::service(status.as_u16(), message));
        }

        let body: Value = serde_json::from_slice(&raw).map_err(|err| {
            warn!(status = status.as_u16(), "generation response was not valid JSON: {err}");
            GenerationError::decode(err.to_string())
        })?;
        if let Some(message) = response_error_message(&body) {
            warn!(status = status.as_u16(), %message, "generation response carried an error field");
            return Err(GenerationError::service(status.as_u16(), Some(message)));
        }
        Ok(body)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
