use thiserror::Error;

/// Errors that can occur while building, validating or serializing a quote.
///
/// The calculation functions themselves never fail; these errors come from
/// the opt-in validation layer, the builders and the submission payload.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuoteError {
    /// One or more line items failed validation.
    #[error("invalid line item: {0}")]
    InvalidLineItem(String),

    /// The tax configuration failed validation.
    #[error("invalid tax configuration: {0}")]
    InvalidTaxConfiguration(String),

    /// Approval thresholds are inconsistent.
    #[error("invalid approval policy: {0}")]
    InvalidApprovalPolicy(String),

    /// A computed amount does not fit in a `Decimal`.
    #[error("amount out of range: {0}")]
    AmountOutOfRange(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Quote number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// Submission payload could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "line_items[0].quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Rule identifier if applicable (e.g. "LI-02").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a validation error without a rule ID.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a validation error with a rule ID.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}

/// Join validation errors into one message for a [`QuoteError`] variant.
pub(crate) fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
