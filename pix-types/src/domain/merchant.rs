//! Merchant name and city: normalized, length-capped text fields.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::text::{normalize_text, truncate_bytes};

/// Maximum encoded length of the merchant name (tag 59).
pub const MAX_NAME_LEN: usize = 25;

/// Maximum encoded length of the merchant city (tag 60).
pub const MAX_CITY_LEN: usize = 15;

/// Merchant display name, normalized and truncated to 25 bytes.
///
/// Truncation is silent; an empty result after normalization is an error
/// because the field is mandatory in the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MerchantName(String);

impl MerchantName {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let normalized = normalize_text(raw);
        if normalized.is_empty() {
            return Err(DomainError::MissingRequiredField("merchant name"));
        }
        Ok(Self(truncate_bytes(&normalized, MAX_NAME_LEN).to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MerchantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Merchant city, normalized and truncated to 15 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MerchantCity(String);

impl MerchantCity {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let normalized = normalize_text(raw);
        if normalized.is_empty() {
            return Err(DomainError::MissingRequiredField("merchant city"));
        }
        Ok(Self(truncate_bytes(&normalized, MAX_CITY_LEN).to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MerchantCity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
