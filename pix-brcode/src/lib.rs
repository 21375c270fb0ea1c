//! # PIX BR Code
//!
//! Encoder and structural decoder for the BR Code: the TLV-encoded EMV
//! merchant-presented QR payload used by the Brazilian instant-payment
//! network.
//!
//! The encoder is a pure function from a validated [`PaymentRequest`] to
//! the final ASCII payload string, terminated by a CRC-16/CCITT-FALSE
//! checksum group. The decoder re-parses a payload and verifies that
//! checksum; it exists for verification tooling and round-trip tests,
//! production use is encode-only.
//!
//! Callers hand the payload string to a QR-symbol renderer unchanged;
//! nothing here touches images, files or the network.
//!
//! ```
//! use pix_brcode::encode;
//! use pix_types::PaymentRequest;
//!
//! let request = PaymentRequest::new(
//!     "joao@example.com",
//!     "Joao Silva",
//!     "Sao Paulo",
//!     Some("10.00".parse().unwrap()),
//!     Some("ABC123".to_string()),
//!     None,
//! ).unwrap();
//! let payload = encode(&request).unwrap();
//! assert!(payload.starts_with("000201"));
//! ```

mod crc;
mod decode;
mod encode;
mod error;
mod tlv;

pub use crc::crc16_ccitt_false;
pub use decode::{DecodedPayload, decode};
pub use encode::{PIX_GUI, REFERENCE_SENTINEL, encode};
pub use error::PayloadError;

/// EMV tag identifiers used in a PIX BR Code.
pub(crate) mod tags {
    pub const PAYLOAD_FORMAT: &str = "00";
    pub const INITIATION_METHOD: &str = "01";
    pub const MERCHANT_ACCOUNT_INFO: &str = "26";
    pub const MERCHANT_CATEGORY: &str = "52";
    pub const CURRENCY: &str = "53";
    pub const AMOUNT: &str = "54";
    pub const COUNTRY: &str = "58";
    pub const MERCHANT_NAME: &str = "59";
    pub const MERCHANT_CITY: &str = "60";
    pub const ADDITIONAL_DATA: &str = "62";
    pub const CRC: &str = "63";

    // Sub-fields of the merchant-account-information group (26)
    pub const MAI_GUI: &str = "00";
    pub const MAI_KEY: &str = "01";
    pub const MAI_DESCRIPTION: &str = "02";

    // Sub-fields of the additional-data group (62)
    pub const ADF_REFERENCE: &str = "05";
}
