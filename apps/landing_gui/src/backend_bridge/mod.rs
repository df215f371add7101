//! Backend worker: owns the tokio runtime and the HTTP client, fed by the UI command queue.

pub mod commands;
pub mod runtime;
