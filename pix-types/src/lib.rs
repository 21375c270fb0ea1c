//! # PIX Types
//!
//! Domain types and field normalization for PIX BR Code generation.
//! This crate has ZERO external IO dependencies - only data structures,
//! normalization rules, and validation.
//!
//! ## Architecture
//!
//! This crate is the innermost core:
//! - `domain/` - Validated value objects (PixKey, Amount, MerchantName...)
//! - `text/` - Pure text normalization (diacritic folding, truncation)
//! - `error/` - Domain error types
//!
//! Everything here is deterministic and side-effect free; callers can run
//! any number of constructions in parallel with no coordination.

pub mod domain;
pub mod error;
pub mod text;

// Re-export commonly used types
pub use domain::{Amount, KeyKind, MerchantCity, MerchantName, PaymentRequest, PixKey};
pub use error::DomainError;
