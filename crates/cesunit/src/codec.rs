//! Single code-unit encode/decode primitives.
//!
//! The encoding is a UTF-8 lookalike restricted to 16-bit code units: every
//! unit occupies one to three bytes, chosen purely by its numeric value.
//! Surrogate halves (`0xD800..=0xDFFF`) encode like any other value, so a
//! supplementary character is stored as two independent three-byte sequences
//! rather than one four-byte sequence. The encoder never emits four bytes.

use alloc::vec::Vec;

/// Maximum number of bytes a single encoded code unit occupies.
///
/// Callers can size per-unit scratch buffers with this.
pub const MAX_BYTES_PER_CODE_UNIT: usize = 3;

/// Largest code unit that encodes as a single byte.
pub const ONE_BYTE_MAX: u16 = 0x7F;
/// Smallest code unit that needs two bytes.
pub const TWO_BYTE_MIN: u16 = 0x80;
/// Largest code unit that fits in two bytes.
pub const TWO_BYTE_MAX: u16 = 0x7FF;
/// Smallest code unit that needs the full three bytes.
pub const THREE_BYTE_MIN: u16 = 0x800;

/// First code unit of the high-surrogate range.
pub const HIGH_SURROGATE_MIN: u16 = 0xD800;
/// Last code unit of the high-surrogate range.
pub const HIGH_SURROGATE_MAX: u16 = 0xDBFF;
/// First code unit of the low-surrogate range.
pub const LOW_SURROGATE_MIN: u16 = 0xDC00;
/// Last code unit of the low-surrogate range.
pub const LOW_SURROGATE_MAX: u16 = 0xDFFF;

/// First supplementary-plane code point; everything at or above this is
/// stored as a surrogate pair.
pub const FIRST_SUPPLEMENTARY: u32 = 0x1_0000;
/// Largest valid Unicode code point.
pub const CODE_POINT_MAX: u32 = 0x10_FFFF;

const LEAD_2_BYTE: u8 = 0b1100_0000;
const LEAD_3_BYTE: u8 = 0b1110_0000;
const CONTINUATION: u8 = 0b1000_0000;
const CONTINUATION_MASK: u8 = 0b1100_0000;
const LOW_SIX_BITS: u16 = 0x3F;

/// Number of bytes `unit` occupies once encoded.
#[must_use]
pub const fn encoded_size(unit: u16) -> usize {
    if unit <= ONE_BYTE_MAX {
        1
    } else if unit <= TWO_BYTE_MAX {
        2
    } else {
        3
    }
}

/// Encodes one code unit into `buf`, returning the number of bytes written.
#[allow(clippy::cast_possible_truncation)]
pub fn encode_code_unit(unit: u16, buf: &mut [u8; MAX_BYTES_PER_CODE_UNIT]) -> usize {
    if unit <= ONE_BYTE_MAX {
        buf[0] = unit as u8;
        1
    } else if unit <= TWO_BYTE_MAX {
        buf[0] = LEAD_2_BYTE | (unit >> 6) as u8;
        buf[1] = CONTINUATION | (unit & LOW_SIX_BITS) as u8;
        2
    } else {
        buf[0] = LEAD_3_BYTE | (unit >> 12) as u8;
        buf[1] = CONTINUATION | ((unit >> 6) & LOW_SIX_BITS) as u8;
        buf[2] = CONTINUATION | (unit & LOW_SIX_BITS) as u8;
        3
    }
}

/// Sequence length declared by a leading byte, from its run of high `1` bits.
///
/// Continuation bytes are not leading bytes; handing one in is a caller bug
/// and the answer for it (1) is meaningless. Lengths above three only occur
/// in buffers this format would not itself produce; the cursor tolerates
/// them, the validator rejects them.
#[must_use]
pub const fn sequence_len(lead: u8) -> usize {
    match lead.leading_ones() {
        0 | 1 => 1,
        2 => 2,
        3 => 3,
        _ => 4,
    }
}

/// Whether `byte` has the continuation shape `10xxxxxx`.
#[must_use]
pub const fn is_continuation(byte: u8) -> bool {
    byte & CONTINUATION_MASK == CONTINUATION
}

pub(crate) const fn lead_payload_mask(len: usize) -> u8 {
    match len {
        1 => 0x7F,
        2 => 0x1F,
        3 => 0x0F,
        _ => 0x07,
    }
}

/// Decodes the sequence starting at `bytes[0]`, returning the assembled
/// value and its byte length. Trusts the buffer; malformed shapes trip
/// debug assertions rather than being reported.
pub(crate) fn decode_sequence(bytes: &[u8]) -> (u32, usize) {
    let lead = bytes[0];
    debug_assert!(!is_continuation(lead), "decode started on a continuation byte");
    let len = sequence_len(lead);
    debug_assert!(bytes.len() >= len, "truncated sequence handed to the decoder");
    let mut value = u32::from(lead & lead_payload_mask(len));
    for &byte in &bytes[1..len] {
        debug_assert!(is_continuation(byte), "malformed continuation byte");
        value = (value << 6) | u32::from(byte & 0x3F);
    }
    (value, len)
}

/// Whether `unit` lies in the high-surrogate range.
#[must_use]
pub const fn is_high_surrogate(unit: u16) -> bool {
    unit >= HIGH_SURROGATE_MIN && unit <= HIGH_SURROGATE_MAX
}

/// Whether `unit` lies in the low-surrogate range.
#[must_use]
pub const fn is_low_surrogate(unit: u16) -> bool {
    unit >= LOW_SURROGATE_MIN && unit <= LOW_SURROGATE_MAX
}

/// Whether `unit` is a surrogate half of either kind.
#[must_use]
pub const fn is_surrogate(unit: u16) -> bool {
    unit >= HIGH_SURROGATE_MIN && unit <= LOW_SURROGATE_MAX
}

/// How a code point is stored as 16-bit code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePointUnits {
    /// Basic-plane code points map to a single unit.
    Single(u16),
    /// Supplementary code points split into a high/low surrogate pair.
    Pair {
        /// The high (leading) surrogate half.
        high: u16,
        /// The low (trailing) surrogate half.
        low: u16,
    },
}

/// Splits a code point into its storage units.
///
/// # Panics
///
/// Panics if `code_point` exceeds [`CODE_POINT_MAX`].
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn code_point_to_units(code_point: u32) -> CodePointUnits {
    assert!(
        code_point <= CODE_POINT_MAX,
        "code point out of range: {code_point:#X}"
    );
    if code_point < FIRST_SUPPLEMENTARY {
        CodePointUnits::Single(code_point as u16)
    } else {
        let bits = code_point - FIRST_SUPPLEMENTARY;
        CodePointUnits::Pair {
            high: HIGH_SURROGATE_MIN + (bits >> 10) as u16,
            low: LOW_SURROGATE_MIN + (bits & 0x3FF) as u16,
        }
    }
}

/// Recombines a surrogate pair into the supplementary code point it names.
///
/// # Panics
///
/// Panics if `high` is not a high surrogate or `low` is not a low surrogate.
#[must_use]
pub fn surrogate_pair_to_code_point(high: u16, low: u16) -> u32 {
    assert!(is_high_surrogate(high), "not a high surrogate: {high:#06X}");
    assert!(is_low_surrogate(low), "not a low surrogate: {low:#06X}");
    FIRST_SUPPLEMENTARY
        + (u32::from(high - HIGH_SURROGATE_MIN) << 10)
        + u32::from(low - LOW_SURROGATE_MIN)
}

/// Appends the encoding of `code_point` to `out`: one unit for basic-plane
/// values, two independently encoded surrogate halves otherwise.
///
/// # Panics
///
/// Panics if `code_point` exceeds [`CODE_POINT_MAX`].
pub fn encode_code_point(code_point: u32, out: &mut Vec<u8>) {
    let mut scratch = [0u8; MAX_BYTES_PER_CODE_UNIT];
    match code_point_to_units(code_point) {
        CodePointUnits::Single(unit) => {
            let n = encode_code_unit(unit, &mut scratch);
            out.extend_from_slice(&scratch[..n]);
        }
        CodePointUnits::Pair { high, low } => {
            for unit in [high, low] {
                let n = encode_code_unit(unit, &mut scratch);
                out.extend_from_slice(&scratch[..n]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{
        CodePointUnits, MAX_BYTES_PER_CODE_UNIT, code_point_to_units, encode_code_point,
        encode_code_unit, encoded_size, sequence_len, surrogate_pair_to_code_point,
    };

    #[test]
    fn boundary_sizes() {
        assert_eq!(encoded_size(0x00), 1);
        assert_eq!(encoded_size(0x7F), 1);
        assert_eq!(encoded_size(0x80), 2);
        assert_eq!(encoded_size(0x7FF), 2);
        assert_eq!(encoded_size(0x800), 3);
        assert_eq!(encoded_size(0xFFFF), 3);
    }

    #[test]
    fn known_encodings() {
        let mut buf = [0u8; MAX_BYTES_PER_CODE_UNIT];

        assert_eq!(encode_code_unit(0x73, &mut buf), 1);
        assert_eq!(buf[0], 0x73);

        assert_eq!(encode_code_unit(0x41A, &mut buf), 2);
        assert_eq!(&buf[..2], &[0xD0, 0x9A]);

        assert_eq!(encode_code_unit(0xD7FF, &mut buf), 3);
        assert_eq!(&buf[..3], &[0xED, 0x9F, 0xBF]);
    }

    #[test]
    fn lead_byte_classification() {
        assert_eq!(sequence_len(0x00), 1);
        assert_eq!(sequence_len(0x7F), 1);
        assert_eq!(sequence_len(0xC2), 2);
        assert_eq!(sequence_len(0xDF), 2);
        assert_eq!(sequence_len(0xE0), 3);
        assert_eq!(sequence_len(0xEF), 3);
        assert_eq!(sequence_len(0xF0), 4);
    }

    #[test]
    fn surrogate_split_and_join() {
        match code_point_to_units(0x10348) {
            CodePointUnits::Pair { high, low } => {
                assert_eq!(high, 0xD800);
                assert_eq!(low, 0xDF48);
                assert_eq!(surrogate_pair_to_code_point(high, low), 0x10348);
            }
            CodePointUnits::Single(unit) => panic!("expected a pair, got {unit:#06X}"),
        }
        assert_eq!(code_point_to_units(0xFFFF), CodePointUnits::Single(0xFFFF));
    }

    #[test]
    fn supplementary_point_becomes_two_sequences() {
        let mut out = Vec::new();
        encode_code_point(0x507F0, &mut out);
        // 0xD901 0xDFF0
        assert_eq!(out, [0xED, 0xA4, 0x81, 0xED, 0xBF, 0xB0]);
    }
}
