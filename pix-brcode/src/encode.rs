//! BR Code payload assembly.

use std::fmt::Write;

use pix_types::PaymentRequest;
use pix_types::text::{normalize_text, truncate_bytes};

use crate::crc::crc16_ccitt_false;
use crate::error::PayloadError;
use crate::tags;
use crate::tlv;

/// Global unique identifier of the PIX scheme (merchant-account sub-field 00).
pub const PIX_GUI: &str = "BR.GOV.BCB.PIX";

/// Reference label emitted when the caller supplies no transaction id.
/// `"***"` is itself a valid label per the standard, never omitted.
pub const REFERENCE_SENTINEL: &str = "***";

/// Payload format indicator (tag 00), fixed by the EMV standard.
const PAYLOAD_FORMAT_VERSION: &str = "01";

/// Point-of-initiation values: `11` = payer types the amount (reusable
/// code), `12` = amount fixed in the payload (single-use code). The wire
/// structure is otherwise identical.
const INITIATION_STATIC: &str = "11";
const INITIATION_DYNAMIC: &str = "12";

/// Merchant category code for "uncategorized" (tag 52).
const MCC_UNCATEGORIZED: &str = "0000";

/// ISO 4217 numeric code for BRL (tag 53).
const CURRENCY_BRL: &str = "986";

/// ISO 3166-1 country code (tag 58).
const COUNTRY_BR: &str = "BR";

/// Maximum length of the reference label (additional-data sub-field 05).
const MAX_TXID_LEN: usize = 25;

/// Description cap inside the merchant-account group, after normalization.
const MAX_DESCRIPTION_LEN: usize = 50;

/// Builds the complete BR Code payload for `request`.
///
/// Deterministic and pure; field order is mandated by the standard, so the
/// same request always yields byte-identical output. On error nothing is
/// returned - never a truncated payload.
pub fn encode(request: &PaymentRequest) -> Result<String, PayloadError> {
    let mut payload = String::with_capacity(160);

    payload += &tlv::field(tags::PAYLOAD_FORMAT, PAYLOAD_FORMAT_VERSION)?;

    let initiation = if request.amount.is_some() {
        INITIATION_DYNAMIC
    } else {
        INITIATION_STATIC
    };
    payload += &tlv::field(tags::INITIATION_METHOD, initiation)?;

    payload += &tlv::field(tags::MERCHANT_ACCOUNT_INFO, &merchant_account_info(request)?)?;
    payload += &tlv::field(tags::MERCHANT_CATEGORY, MCC_UNCATEGORIZED)?;
    payload += &tlv::field(tags::CURRENCY, CURRENCY_BRL)?;

    // Omitted entirely when absent; the payer then chooses the amount.
    if let Some(amount) = request.amount {
        payload += &tlv::field(tags::AMOUNT, &amount.to_string())?;
    }

    payload += &tlv::field(tags::COUNTRY, COUNTRY_BR)?;
    payload += &tlv::field(tags::MERCHANT_NAME, request.merchant_name.as_str())?;
    payload += &tlv::field(tags::MERCHANT_CITY, request.merchant_city.as_str())?;
    payload += &tlv::field(tags::ADDITIONAL_DATA, &additional_data(request)?)?;

    // The checksum covers everything so far plus its own tag and length.
    payload += tags::CRC;
    payload += "04";
    let crc = crc16_ccitt_false(payload.as_bytes());
    let _ = write!(payload, "{crc:04X}");

    Ok(payload)
}

/// Merchant-account-information group (tag 26): scheme GUI, the normalized
/// key, and - when present - the normalized description as sub-field 02.
fn merchant_account_info(request: &PaymentRequest) -> Result<String, PayloadError> {
    let mut mai = tlv::field(tags::MAI_GUI, PIX_GUI)?;
    mai += &tlv::field(tags::MAI_KEY, request.key.as_str())?;
    if let Some(raw) = &request.description {
        let normalized = normalize_text(raw);
        let truncated = truncate_bytes(&normalized, MAX_DESCRIPTION_LEN);
        if !truncated.is_empty() {
            mai += &tlv::field(tags::MAI_DESCRIPTION, truncated)?;
        }
    }
    Ok(mai)
}

/// Additional-data group (tag 62) nesting the reference label (05).
fn additional_data(request: &PaymentRequest) -> Result<String, PayloadError> {
    let reference = match request.txid.as_deref().map(str::trim) {
        Some("") | None => REFERENCE_SENTINEL,
        Some(txid) => txid,
    };
    if reference.len() > MAX_TXID_LEN {
        return Err(PayloadError::FieldTooLong {
            tag: tags::ADF_REFERENCE.to_string(),
            len: reference.len(),
        });
    }
    tlv::field(tags::ADF_REFERENCE, reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pix_types::Amount;

    fn request(amount: Option<&str>) -> PaymentRequest {
        PaymentRequest::new(
            "joao@example.com",
            "Joao Silva",
            "Sao Paulo",
            amount.map(|a| a.parse::<Amount>().unwrap()),
            Some("ABC123".to_string()),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_fixed_prefix_and_initiation() {
        let payload = encode(&request(Some("10.00"))).unwrap();
        assert!(payload.starts_with("000201"));
        assert!(payload.contains("010212"));

        let open_amount = encode(&request(None)).unwrap();
        assert!(open_amount.contains("010211"));
    }

    #[test]
    fn test_amount_group_frames_value() {
        let payload = encode(&request(Some("10.00"))).unwrap();
        assert!(payload.contains("540510.00"));
    }

    #[test]
    fn test_city_group() {
        let payload = encode(&request(Some("10.00"))).unwrap();
        assert!(payload.contains("6009SAO PAULO"));
    }

    #[test]
    fn test_missing_txid_uses_sentinel() {
        let mut req = request(None);
        req.txid = None;
        let payload = encode(&req).unwrap();
        assert!(payload.contains("62070503***"));
    }

    #[test]
    fn test_blank_txid_uses_sentinel() {
        let mut req = request(None);
        req.txid = Some("   ".to_string());
        let payload = encode(&req).unwrap();
        assert!(payload.contains("62070503***"));
    }

    #[test]
    fn test_oversized_txid_rejected() {
        let mut req = request(None);
        req.txid = Some("X".repeat(26));
        assert!(encode(&req).is_err());
    }

    #[test]
    fn test_description_lands_in_merchant_account_group() {
        let mut req = request(Some("10.00"));
        req.description = Some("Pagamento nº 123".to_string());
        let payload = encode(&req).unwrap();
        assert!(payload.contains("PAGAMENTO N 123"));
    }

    #[test]
    fn test_trailing_checksum_matches_recomputation() {
        let payload = encode(&request(Some("10.00"))).unwrap();
        let (body, crc_text) = payload.split_at(payload.len() - 4);
        let recomputed = format!("{:04X}", crc16_ccitt_false(body.as_bytes()));
        assert_eq!(crc_text, recomputed);
        assert!(crc_text.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
