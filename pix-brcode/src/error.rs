//! Error types for payload encoding and decoding.

use pix_types::DomainError;

/// Payload-level errors.
///
/// Encoding either fully succeeds or fails with one of these; a partial or
/// best-effort payload is never returned.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Field {tag} is {len} bytes after encoding; TLV values are capped at 99")]
    FieldTooLong { tag: String, len: usize },

    #[error("Malformed TLV at byte {offset}: {reason}")]
    MalformedTlv { offset: usize, reason: String },

    #[error("Checksum mismatch: payload carries {found}, recomputed {computed}")]
    ChecksumMismatch { found: String, computed: String },
}
