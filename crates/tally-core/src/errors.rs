//! Structured error types shared across tally crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`TallyError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (node names, amounts, currencies, etc.).
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
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for every tally crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum TallyError {
    /// The weight list is empty or sums to zero.
    #[error("invalid weights: {0}")]
    InvalidWeights(ErrorInfo),
    /// An allocated tree does not satisfy parent == sum(children).
    #[error("conservation violated: {0}")]
    Conservation(ErrorInfo),
    /// Two amounts tagged with different currencies were combined.
    #[error("currency mismatch: {0}")]
    CurrencyMismatch(ErrorInfo),
    /// A result does not fit in the minor-unit amount type.
    #[error("overflow: {0}")]
    Overflow(ErrorInfo),
    /// A currency code failed validation.
    #[error("invalid currency: {0}")]
    InvalidCurrency(ErrorInfo),
    /// Rate parsing or rate domain errors.
    #[error("rate error: {0}")]
    Rate(ErrorInfo),
    /// Graduated pricing errors.
    #[error("pricing error: {0}")]
    Pricing(ErrorInfo),
    /// Business calendar errors.
    #[error("calendar error: {0}")]
    Calendar(ErrorInfo),
    /// Refund validation errors.
    #[error("refund error: {0}")]
    Refund(ErrorInfo),
    /// Ledger validation errors.
    #[error("ledger error: {0}")]
    Ledger(ErrorInfo),
    /// Serialization and job file errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
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

impl TallyError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            TallyError::InvalidWeights(info)
            | TallyError::Conservation(info)
            | TallyError::CurrencyMismatch(info)
            | TallyError::Overflow(info)
            | TallyError::InvalidCurrency(info)
            | TallyError::Rate(info)
            | TallyError::Pricing(info)
            | TallyError::Calendar(info)
            | TallyError::Refund(info)
            | TallyError::Ledger(info)
            | TallyError::Serde(info) => info,
        }
    }

    /// Returns the stable machine readable code of the error.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Rewrites the payload while keeping the error family.
    pub fn map_info(self, f: impl FnOnce(ErrorInfo) -> ErrorInfo) -> Self {
        match self {
            TallyError::InvalidWeights(info) => TallyError::InvalidWeights(f(info)),
            TallyError::Conservation(info) => TallyError::Conservation(f(info)),
            TallyError::CurrencyMismatch(info) => TallyError::CurrencyMismatch(f(info)),
            TallyError::Overflow(info) => TallyError::Overflow(f(info)),
            TallyError::InvalidCurrency(info) => TallyError::InvalidCurrency(f(info)),
            TallyError::Rate(info) => TallyError::Rate(f(info)),
            TallyError::Pricing(info) => TallyError::Pricing(f(info)),
            TallyError::Calendar(info) => TallyError::Calendar(f(info)),
            TallyError::Refund(info) => TallyError::Refund(f(info)),
            TallyError::Ledger(info) => TallyError::Ledger(f(info)),
            TallyError::Serde(info) => TallyError::Serde(f(info)),
        }
    }

    /// Returns whether this is an [`TallyError::InvalidWeights`] error.
    pub fn is_invalid_weights(&self) -> bool {
        matches!(self, TallyError::InvalidWeights(_))
    }
}
