//! Events flowing from the backend worker back to the UI thread.

use serde_json::Value;
use shared::error::GenerationError;

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    GenerationSettled(Result<Value, GenerationError>),
    BackendFailed(String),
}
