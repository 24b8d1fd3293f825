//! Length and size helpers built on the codec and cursor.

use alloc::vec::Vec;

use crate::codec::{self, MAX_BYTES_PER_CODE_UNIT};
use crate::cursor::Cursor;

/// Number of code units stored in `bytes`.
///
/// Single pass over the buffer; agrees exactly with the number of reads a
/// full forward (or backward) traversal performs.
#[must_use]
pub fn code_unit_length(bytes: &[u8]) -> usize {
    let mut cursor = Cursor::new(bytes);
    let mut count = 0;
    while !cursor.is_at_end() {
        cursor.advance();
        count += 1;
    }
    count
}

/// Encoded size in bytes of a sequence of code units.
#[must_use]
pub fn encoded_size_of_units(units: &[u16]) -> usize {
    units.iter().map(|&unit| codec::encoded_size(unit)).sum()
}

/// Encodes a sequence of code units into a fresh buffer.
///
/// The result is well formed by construction; no unit is rejected, surrogate
/// halves included.
#[must_use]
pub fn encode_units(units: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_size_of_units(units));
    let mut scratch = [0u8; MAX_BYTES_PER_CODE_UNIT];
    for &unit in units {
        let n = codec::encode_code_unit(unit, &mut scratch);
        out.extend_from_slice(&scratch[..n]);
    }
    out
}
