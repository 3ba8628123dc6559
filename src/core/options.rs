//! Timer options and their JSON representation
//!
//! Options can be built in code or loaded from a settings document such as
//!
//! ```json
//! { "Label": "load data", "Width": 25 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Default alignment width of the label column
pub const DEFAULT_WIDTH: usize = 25;

/// Label and alignment width of a timed scope
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimerOptions {
    #[serde(rename = "Label", default)]
    pub label: String,
    /// A width of 0 disables padding. Settings documents must use a positive width.
    /// Widths above [`MAX_WIDTH`](crate::MAX_WIDTH) pad to `MAX_WIDTH` columns.
    #[serde(
        rename = "Width",
        default = "default_width",
        deserialize_with = "validate_positive_usize"
    )]
    pub width: usize,
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

fn validate_positive_usize<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = usize::deserialize(deserializer)?;
    if value > 0 {
        Ok(value)
    } else {
        Err(serde::de::Error::custom("Width must be positive"))
    }
}

impl Default for TimerOptions {
    fn default() -> Self {
        Self {
            label: String::new(),
            width: DEFAULT_WIDTH,
        }
    }
}

impl TimerOptions {
    /// Options with the given label and width
    pub fn new(label: impl Into<String>, width: usize) -> Self {
        Self {
            label: label.into(),
            width,
        }
    }

    /// Options with the given label and the default width
    pub fn labeled(label: impl Into<String>) -> Self {
        Self::new(label, DEFAULT_WIDTH)
    }

    /// Replace the width, keeping the label
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Parse options from a JSON settings document
    pub fn from_json_str(content: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a JSON settings file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Render as a pretty-printed JSON settings document
    pub fn to_json_pretty(&self) -> Result<String, OptionsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
