//! Error types for PIX field validation.

/// Domain-level errors (field validation failures).
///
/// All variants are local, synchronous and non-retryable: the core performs
/// no IO, so there is no transient-failure class. Each variant carries enough
/// context to render a user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Cannot infer PIX key kind from {0:?}; pass the kind explicitly")]
    InvalidKeyKind(String),

    #[error("Invalid PIX key: {0}")]
    InvalidKeyFormat(String),

    #[error("Required field is empty after normalization: {0}")]
    MissingRequiredField(&'static str),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
