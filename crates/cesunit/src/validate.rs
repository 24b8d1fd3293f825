//! Whole-buffer validation.
//!
//! This is the gate between untrusted bytes and the cursor: a buffer that
//! passes may be traversed freely with every precondition trusted. The rules
//! differ from strict UTF-8 in both directions. Stricter: a leading byte may
//! declare at most three bytes, so genuine four-byte UTF-8 never validates.
//! Looser: encoded surrogate halves are fine, isolated or paired, in any
//! order — pairing discipline is a concern of layers above the storage
//! format.

use crate::codec::{THREE_BYTE_MIN, TWO_BYTE_MIN, is_continuation, lead_payload_mask};
use crate::error::{ValidationError, ValidationErrorKind};

/// Checks that `bytes` is a well-formed encoded string, reporting the first
/// offending sequence on failure.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the broken rule and the byte offset
/// of the sequence that broke it.
pub fn validate(bytes: &[u8]) -> Result<(), ValidationError> {
    let mut offset = 0;
    while offset < bytes.len() {
        let lead = bytes[offset];
        let len = match lead.leading_ones() {
            0 => 1,
            1 => {
                return Err(ValidationError::new(
                    offset,
                    ValidationErrorKind::UnexpectedContinuation(lead),
                ));
            }
            2 => 2,
            3 => 3,
            _ => {
                return Err(ValidationError::new(
                    offset,
                    ValidationErrorKind::SequenceTooLong(lead),
                ));
            }
        };
        if offset + len > bytes.len() {
            return Err(ValidationError::new(offset, ValidationErrorKind::Truncated));
        }

        let mut value = u32::from(lead & lead_payload_mask(len));
        for &byte in &bytes[offset + 1..offset + len] {
            if !is_continuation(byte) {
                return Err(ValidationError::new(
                    offset,
                    ValidationErrorKind::BadContinuation(byte),
                ));
            }
            value = (value << 6) | u32::from(byte & 0x3F);
        }

        let shortest_min = match len {
            1 => 0,
            2 => u32::from(TWO_BYTE_MIN),
            _ => u32::from(THREE_BYTE_MIN),
        };
        if value < shortest_min {
            #[allow(clippy::cast_possible_truncation)]
            return Err(ValidationError::new(
                offset,
                ValidationErrorKind::Overlong(value as u16),
            ));
        }

        offset += len;
    }
    Ok(())
}

/// Boolean form of [`validate`] for callers that only need the gate.
#[must_use]
pub fn is_well_formed(bytes: &[u8]) -> bool {
    validate(bytes).is_ok()
}
