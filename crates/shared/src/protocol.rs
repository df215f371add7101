use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Template the generation service applies to every landing-page request.
pub const TEMPLATE_ID: &str = "auto-market";

/// Path of the generation endpoint, relative to the configured base URL.
pub const GENERATE_PATH: &str = "/api/generate";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub user_prompt: String,
    pub template_id: String,
}

impl GenerationRequest {
    pub fn new(user_prompt: impl Into<String>) -> Self {
        Self {
            user_prompt: user_prompt.into(),
            template_id: TEMPLATE_ID.to_string(),
        }
    }
}

/// Reads the optional `error` string a generation response may carry.
///
/// Blank strings and non-string values are treated as absent.
pub fn response_error_message(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string)
}

/// Formats a response the way the page shows and copies it: JSON with a 2-space indent.
pub fn pretty_response(body: &Value) -> String {
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}
