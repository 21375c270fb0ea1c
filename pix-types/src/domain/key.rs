//! PIX key domain model: classification and normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::text::digits_only;

/// Maximum encoded length of a PIX key, per the BR Code standard.
pub const MAX_KEY_LEN: usize = 77;

/// Country calling code prepended to phone keys given without one.
const COUNTRY_PREFIX: &str = "55";

/// The kind of a PIX key.
///
/// Kind determines normalization, nothing else: the key travels in the same
/// sub-field of the payload regardless of kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    /// E-mail address.
    Email,
    /// Phone number in international form (`+55...`).
    Phone,
    /// Individual tax id (CPF, 11 digits).
    Cpf,
    /// Company tax id (CNPJ, 14 digits).
    Cnpj,
    /// Random key (EVP): an opaque UUID-shaped token issued by the bank.
    Evp,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            KeyKind::Email => "email",
            KeyKind::Phone => "phone",
            KeyKind::Cpf => "cpf",
            KeyKind::Cnpj => "cnpj",
            KeyKind::Evp => "evp",
        };
        write!(f, "{}", s)
    }
}

/// A normalized PIX key plus its kind.
///
/// Construction always normalizes; a `PixKey` value is ready to be placed
/// into the merchant-account-information group as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixKey {
    key: String,
    kind: KeyKind,
}

impl PixKey {
    /// Normalizes `raw` according to the explicitly given kind.
    ///
    /// - email: trimmed and lowercased
    /// - phone: non-digits stripped, `55` prepended when missing, `+` added
    /// - cpf/cnpj: punctuation stripped, digit count untouched (leading
    ///   zeros preserved; check-digit validation is out of scope)
    /// - evp: trimmed only
    pub fn new(raw: &str, kind: KeyKind) -> Result<Self, DomainError> {
        let key = match kind {
            KeyKind::Email => raw.trim().to_lowercase(),
            KeyKind::Phone => normalize_phone(raw),
            KeyKind::Cpf | KeyKind::Cnpj => digits_only(raw),
            KeyKind::Evp => raw.trim().to_string(),
        };
        if key.is_empty() {
            return Err(DomainError::InvalidKeyFormat(
                "key is empty after normalization".into(),
            ));
        }
        if key.len() > MAX_KEY_LEN {
            return Err(DomainError::InvalidKeyFormat(format!(
                "key is {} bytes, maximum is {}",
                key.len(),
                MAX_KEY_LEN
            )));
        }
        Ok(Self { key, kind })
    }

    /// Classifies `raw` heuristically, then normalizes it.
    ///
    /// Use [`PixKey::new`] when the caller knows the kind; classification is
    /// advisory and exists for interfaces (CLI flags, web forms) where asking
    /// the user for the kind is unfriendly.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let kind = classify_key(raw)?;
        Self::new(raw, kind)
    }

    /// The normalized key text.
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// The key kind.
    pub fn kind(&self) -> KeyKind {
        self.kind
    }
}

impl fmt::Display for PixKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

fn normalize_phone(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.is_empty() {
        return digits;
    }
    // A local number is at most 11 digits (2-digit area code + 9-digit
    // subscriber); anything longer already carries a country code.
    let with_country = if digits.len() <= 11 && !raw.trim_start().starts_with('+') {
        format!("{COUNTRY_PREFIX}{digits}")
    } else {
        digits
    };
    format!("+{with_country}")
}

/// Heuristic key classification, used only when the kind is not explicit.
///
/// Rules, first match wins:
/// - contains `@` -> email
/// - UUID-shaped (8-4-4-4-12 hex) -> evp
/// - digits (after stripping phone/tax punctuation): 14 -> cnpj; 11 with
///   CPF punctuation in the raw form -> cpf, 11 bare -> phone (matches how
///   people type mobile numbers); 10-13 -> phone
/// - any other non-empty token -> evp
pub fn classify_key(raw: &str) -> Result<KeyKind, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidKeyKind(raw.to_string()));
    }
    if trimmed.contains('@') {
        return Ok(KeyKind::Email);
    }
    if is_uuid_shaped(trimmed) {
        return Ok(KeyKind::Evp);
    }

    let stripped: String = trimmed
        .chars()
        .filter(|&c| !matches!(c, '+' | '(' | ')' | '-' | '.' | '/' | ' '))
        .collect();
    if !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit()) {
        return match stripped.len() {
            14 => Ok(KeyKind::Cnpj),
            11 if trimmed.contains('.') => Ok(KeyKind::Cpf),
            10..=13 => Ok(KeyKind::Phone),
            _ => Err(DomainError::InvalidKeyKind(raw.to_string())),
        };
    }

    Ok(KeyKind::Evp)
}

fn is_uuid_shaped(s: &str) -> bool {
    let parts: Vec<&str> = s.split('-').collect();
    parts.len() == 5
        && [8, 4, 4, 4, 12]
            .iter()
            .zip(&parts)
            .all(|(len, part)| part.len() == *len && part.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_normalization() {
        let key = PixKey::new("  Joao@Example.COM ", KeyKind::Email).unwrap();
        assert_eq!(key.as_str(), "joao@example.com");
        assert_eq!(key.kind(), KeyKind::Email);
    }

    #[test]
    fn test_phone_gets_country_prefix() {
        let key = PixKey::new("(11) 99999-9999", KeyKind::Phone).unwrap();
        assert_eq!(key.as_str(), "+5511999999999");
    }

    #[test]
    fn test_phone_with_existing_prefix() {
        let key = PixKey::new("+55 11 99999-9999", KeyKind::Phone).unwrap();
        assert_eq!(key.as_str(), "+5511999999999");
    }

    #[test]
    fn test_cpf_strips_punctuation_keeps_zeros() {
        let key = PixKey::new("012.345.678-90", KeyKind::Cpf).unwrap();
        assert_eq!(key.as_str(), "01234567890");
    }

    #[test]
    fn test_cnpj_strips_punctuation() {
        let key = PixKey::new("12.345.678/0001-95", KeyKind::Cnpj).unwrap();
        assert_eq!(key.as_str(), "12345678000195");
    }

    #[test]
    fn test_evp_trim_only() {
        let raw = " 123e4567-e89b-12d3-a456-426614174000 ";
        let key = PixKey::new(raw, KeyKind::Evp).unwrap();
        assert_eq!(key.as_str(), raw.trim());
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = PixKey::new("  ", KeyKind::Email);
        assert!(matches!(result, Err(DomainError::InvalidKeyFormat(_))));
    }

    #[test]
    fn test_oversized_key_rejected() {
        let long = format!("{}@example.com", "a".repeat(80));
        let result = PixKey::new(&long, KeyKind::Email);
        assert!(matches!(result, Err(DomainError::InvalidKeyFormat(_))));
    }

    #[test]
    fn test_classify_email() {
        assert_eq!(classify_key("a@b.com").unwrap(), KeyKind::Email);
    }

    #[test]
    fn test_classify_bare_eleven_digits_as_phone() {
        assert_eq!(classify_key("11999999999").unwrap(), KeyKind::Phone);
    }

    #[test]
    fn test_classify_punctuated_cpf() {
        assert_eq!(classify_key("123.456.789-09").unwrap(), KeyKind::Cpf);
    }

    #[test]
    fn test_classify_cnpj() {
        assert_eq!(classify_key("12.345.678/0001-95").unwrap(), KeyKind::Cnpj);
        assert_eq!(classify_key("12345678000195").unwrap(), KeyKind::Cnpj);
    }

    #[test]
    fn test_classify_uuid_as_evp() {
        let kind = classify_key("123e4567-e89b-12d3-a456-426614174000").unwrap();
        assert_eq!(kind, KeyKind::Evp);
    }

    #[test]
    fn test_classify_empty_fails() {
        assert!(matches!(classify_key(""), Err(DomainError::InvalidKeyKind(_))));
    }

    #[test]
    fn test_parse_roundtrips_classification() {
        let key = PixKey::parse("11 99999-9999").unwrap();
        assert_eq!(key.kind(), KeyKind::Phone);
        assert_eq!(key.as_str(), "+5511999999999");
    }
}
