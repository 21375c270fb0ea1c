//! Payment request value object.

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::key::{KeyKind, PixKey};
use super::merchant::{MerchantCity, MerchantName};
use crate::error::DomainError;

/// Everything the encoder needs to build one BR Code.
///
/// Immutable once constructed: the constructor normalizes and validates,
/// so a `PaymentRequest` in hand always encodes. `txid` and `description`
/// stay raw here; the encoder applies the `"***"` sentinel and description
/// normalization at emit time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Normalized PIX key
    pub key: PixKey,
    /// Receiver name (tag 59), already truncated to 25 bytes
    pub merchant_name: MerchantName,
    /// Receiver city (tag 60), already truncated to 15 bytes
    pub merchant_city: MerchantCity,
    /// Fixed amount; `None` lets the payer type the amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// Transaction reference; `None` encodes as the `"***"` sentinel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
    /// Optional free-text description shown by the payer's bank app
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PaymentRequest {
    /// Builds a request from raw field values, inferring the key kind.
    pub fn new(
        raw_key: &str,
        name: &str,
        city: &str,
        amount: Option<Amount>,
        txid: Option<String>,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::with_key(PixKey::parse(raw_key)?, name, city, amount, txid, description)
    }

    /// Builds a request with an explicitly classified key.
    pub fn new_with_kind(
        raw_key: &str,
        kind: KeyKind,
        name: &str,
        city: &str,
        amount: Option<Amount>,
        txid: Option<String>,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::with_key(PixKey::new(raw_key, kind)?, name, city, amount, txid, description)
    }

    fn with_key(
        key: PixKey,
        name: &str,
        city: &str,
        amount: Option<Amount>,
        txid: Option<String>,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            key,
            merchant_name: MerchantName::new(name)?,
            merchant_city: MerchantCity::new(city)?,
            amount,
            txid,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_normalizes_all_fields() {
        let request = PaymentRequest::new(
            "Joao@Example.com",
            "José da Silva",
            "São Paulo",
            Some(Amount::from_centavos(1000).unwrap()),
            Some("ABC123".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(request.key.as_str(), "joao@example.com");
        assert_eq!(request.key.kind(), KeyKind::Email);
        assert_eq!(request.merchant_name.as_str(), "JOSE DA SILVA");
        assert_eq!(request.merchant_city.as_str(), "SAO PAULO");
    }

    #[test]
    fn test_explicit_kind_overrides_heuristic() {
        // Bare 11 digits would classify as phone; the caller knows better.
        let request = PaymentRequest::new_with_kind(
            "01234567890",
            KeyKind::Cpf,
            "LOJA",
            "RIO DE JANEIRO",
            None,
            None,
            None,
        )
        .unwrap();
        assert_eq!(request.key.kind(), KeyKind::Cpf);
        assert_eq!(request.key.as_str(), "01234567890");
    }

    #[test]
    fn test_empty_city_rejected() {
        let result = PaymentRequest::new("a@b.com", "LOJA", "", None, None, None);
        assert!(matches!(
            result,
            Err(DomainError::MissingRequiredField("merchant city"))
        ));
    }
}
