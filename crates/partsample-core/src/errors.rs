//! Structured error types raised by the sampling and weighting protocol.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`SamplingError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (particle counts, type names, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type for sampling and weighting.
///
/// Every error is fatal to the single call that raised it. The weight
/// pipeline never substitutes a default weight for a failed sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", content = "detail")]
pub enum SamplingError {
    /// The sample's structure does not match what the distribution produces.
    #[error("invalid input type: {0}")]
    InvalidInputType(ErrorInfo),
    /// The sample is well formed but violates a constraint of the distribution.
    #[error("invalid input: {0}")]
    InvalidInput(ErrorInfo),
    /// A capability required by the call was never supplied.
    #[error("missing capability: {0}")]
    MissingCapability(ErrorInfo),
    /// Batch configuration could not be parsed or is inconsistent.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl SamplingError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SamplingError::InvalidInputType(info)
            | SamplingError::InvalidInput(info)
            | SamplingError::MissingCapability(info)
            | SamplingError::Config(info) => info,
        }
    }

    /// Short label of the error family, used in log records.
    pub fn kind(&self) -> &'static str {
        match self {
            SamplingError::InvalidInputType(_) => "invalid-input-type",
            SamplingError::InvalidInput(_) => "invalid-input",
            SamplingError::MissingCapability(_) => "missing-capability",
            SamplingError::Config(_) => "config",
        }
    }
}
