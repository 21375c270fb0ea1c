//! TLV framing: `tag (2 digits) + length (2 decimal digits) + value`.
//!
//! Lengths count value bytes, not characters, and fit in two digits; a
//! value longer than 99 bytes is a construction error, never clamped.
//! Composite groups (26, 62) nest fully-encoded fields, so their lengths
//! fall out bottom-up: encode the innermost fields first, concatenate, and
//! the concatenation's byte length is the outer value length.

use crate::error::PayloadError;

/// Maximum encoded value length for a single TLV field.
pub(crate) const MAX_VALUE_LEN: usize = 99;

/// Encodes one TLV field.
pub(crate) fn field(tag: &str, value: &str) -> Result<String, PayloadError> {
    debug_assert_eq!(tag.len(), 2);
    let len = value.len();
    if len > MAX_VALUE_LEN {
        return Err(PayloadError::FieldTooLong {
            tag: tag.to_string(),
            len,
        });
    }
    Ok(format!("{tag}{len:02}{value}"))
}

/// Greedy reader over a TLV stream.
///
/// Yields `(tag, value)` pairs in stream order. Offsets in errors are byte
/// positions into the original input, so a caller reading a nested group
/// should report against the group's own slice.
pub(crate) struct TlvReader<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TlvReader<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset into the input.
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    /// Parses the next field, or `None` at end of input.
    pub(crate) fn next_field(&mut self) -> Result<Option<(&'a str, &'a str)>, PayloadError> {
        if self.pos == self.input.len() {
            return Ok(None);
        }
        let tag = self.take(2, "tag")?;
        if !tag.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.malformed(format!("tag {:?} is not two digits", tag)));
        }
        let len_text = self.take(2, "length")?;
        if !len_text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.malformed(format!("length {:?} is not two digits", len_text)));
        }
        let digits = len_text.as_bytes();
        let len = ((digits[0] - b'0') * 10 + (digits[1] - b'0')) as usize;
        let value = self.take(len, "value")?;
        Ok(Some((tag, value)))
    }

    fn take(&mut self, n: usize, what: &str) -> Result<&'a str, PayloadError> {
        let end = self.pos + n;
        match self.input.get(self.pos..end) {
            Some(slice) => {
                self.pos = end;
                Ok(slice)
            }
            None => Err(self.malformed(format!(
                "{} needs {} bytes but only {} remain",
                what,
                n,
                self.input.len() - self.pos
            ))),
        }
    }

    fn malformed(&self, reason: String) -> PayloadError {
        PayloadError::MalformedTlv {
            offset: self.pos,
            reason,
        }
    }
}
