//! Errors raised while loading timer options

use std::io;

use thiserror::Error;

/// Errors that can occur while reading or parsing [`TimerOptions`](crate::TimerOptions)
#[derive(Error, Debug)]
pub enum OptionsError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed document or invalid field value
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
