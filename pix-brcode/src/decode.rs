//! Structural decoding of a BR Code payload.
//!
//! Greedy TLV parse plus checksum verification. This is verification
//! tooling: it checks structure and integrity, not Banco Central business
//! rules, and it trusts that the caller already extracted the payload text
//! from a QR symbol.

use serde::Serialize;

use pix_types::Amount;

use crate::crc::crc16_ccitt_false;
use crate::error::PayloadError;
use crate::tags;
use crate::tlv::TlvReader;

/// The fields recovered from a structurally valid payload.
///
/// String-typed on purpose: decoding reports what is on the wire, it does
/// not re-validate against the domain rules used at encode time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DecodedPayload {
    /// Payload format indicator (tag 00)
    pub payload_format: String,
    /// Point-of-initiation method (tag 01): `11` reusable, `12` fixed amount
    pub initiation_method: String,
    /// Scheme global unique identifier (26-00)
    pub gui: String,
    /// PIX key (26-01)
    pub key: String,
    /// Description (26-02), when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Transaction amount (tag 54), absent when the payer types it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// Merchant name (tag 59)
    pub merchant_name: String,
    /// Merchant city (tag 60)
    pub merchant_city: String,
    /// Reference label (62-05); `"***"` means "no reference"
    pub txid: String,
    /// Trailing checksum as it appears in the payload
    pub crc: String,
    /// Top-level tags in stream order, for structural assertions
    pub top_level_tags: Vec<String>,
}

/// Parses `payload` and verifies its trailing checksum.
///
/// The checksum is recomputed over every byte up to and including the
/// literal `6304` marker and compared against the last four characters.
pub fn decode(payload: &str) -> Result<DecodedPayload, PayloadError> {
    verify_checksum(payload)?;

    let mut decoded = DecodedPayload::default();
    let mut reader = TlvReader::new(payload);
    while let Some((tag, value)) = reader.next_field()? {
        decoded.top_level_tags.push(tag.to_string());
        match tag {
            tags::PAYLOAD_FORMAT => decoded.payload_format = value.to_string(),
            tags::INITIATION_METHOD => decoded.initiation_method = value.to_string(),
            tags::MERCHANT_ACCOUNT_INFO => decode_merchant_account(value, &mut decoded)?,
            tags::AMOUNT => {
                let amount = value.parse::<Amount>().map_err(|_| {
                    PayloadError::MalformedTlv {
                        offset: reader.offset(),
                        reason: format!("amount {:?} is not a two-decimal value", value),
                    }
                })?;
                decoded.amount = Some(amount);
            }
            tags::MERCHANT_NAME => decoded.merchant_name = value.to_string(),
            tags::MERCHANT_CITY => decoded.merchant_city = value.to_string(),
            tags::ADDITIONAL_DATA => decode_additional_data(value, &mut decoded)?,
            tags::CRC => decoded.crc = value.to_string(),
            // Unknown tags are legal EMV; structure was already consumed
            _ => {}
        }
    }

    for (present, name) in [
        (!decoded.payload_format.is_empty(), "00 payload format"),
        (!decoded.key.is_empty(), "26-01 pix key"),
        (!decoded.merchant_name.is_empty(), "59 merchant name"),
        (!decoded.merchant_city.is_empty(), "60 merchant city"),
    ] {
        if !present {
            return Err(PayloadError::MalformedTlv {
                offset: payload.len(),
                reason: format!("mandatory group {} is missing", name),
            });
        }
    }

    Ok(decoded)
}

fn decode_merchant_account(
    group: &str,
    decoded: &mut DecodedPayload,
) -> Result<(), PayloadError> {
    let mut reader = TlvReader::new(group);
    while let Some((tag, value)) = reader.next_field()? {
        match tag {
            tags::MAI_GUI => decoded.gui = value.to_string(),
            tags::MAI_KEY => decoded.key = value.to_string(),
            tags::MAI_DESCRIPTION => decoded.description = Some(value.to_string()),
            _ => {}
        }
    }
    Ok(())
}

fn decode_additional_data(
    group: &str,
    decoded: &mut DecodedPayload,
) -> Result<(), PayloadError> {
    let mut reader = TlvReader::new(group);
    while let Some((tag, value)) = reader.next_field()? {
        if tag == tags::ADF_REFERENCE {
            decoded.txid = value.to_string();
        }
    }
    Ok(())
}

/// Checks that the payload ends in `6304` + 4 hex digits whose value equals
/// the CRC recomputed over everything before them.
fn verify_checksum(payload: &str) -> Result<(), PayloadError> {
    const TRAILER_LEN: usize = 8; // "6304" + 4 hex digits

    if payload.len() < TRAILER_LEN || !payload.is_char_boundary(payload.len() - 4) {
        return Err(PayloadError::MalformedTlv {
            offset: 0,
            reason: "payload is too short to carry a checksum group".to_string(),
        });
    }
    let (body, found) = payload.split_at(payload.len() - 4);
    if !body.ends_with("6304") {
        return Err(PayloadError::MalformedTlv {
            offset: payload.len() - TRAILER_LEN,
            reason: "payload does not end with a checksum group (6304)".to_string(),
        });
    }
    let computed = format!("{:04X}", crc16_ccitt_false(body.as_bytes()));
    if !found.eq_ignore_ascii_case(&computed) {
        return Err(PayloadError::ChecksumMismatch {
            found: found.to_string(),
            computed,
        });
    }
    Ok(())
}
