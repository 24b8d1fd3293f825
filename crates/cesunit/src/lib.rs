//! A compact codec, cursor, and validator for 16-bit code units packed into
//! a CESU-8-style byte encoding.
//!
//! Each code unit — surrogate halves included — encodes independently as one
//! to three bytes; a supplementary character is stored as two three-byte
//! surrogate encodings, never as one four-byte UTF-8 sequence. The crate
//! splits into four pieces:
//!
//! - the codec: stateless per-unit encode/decode and leading-byte
//!   classification ([`encode_code_unit`], [`sequence_len`], and friends);
//! - the cursor: bidirectional, code-unit-granular movement over a borrowed
//!   buffer ([`Cursor`], [`Position`], [`CodeUnits`]);
//! - the validator: the gate between untrusted bytes and the cursor
//!   ([`validate()`], [`is_well_formed`], [`CesuStr`]);
//! - length helpers ([`code_unit_length`], [`encode_units`]).
//!
//! The crate allocates only when asked to build a buffer; traversal and
//! validation borrow and never write.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cesu_str;
mod codec;
mod cursor;
mod error;
mod length;
mod validate;

#[cfg(test)]
mod tests;

pub use cesu_str::CesuStr;
pub use codec::{
    CODE_POINT_MAX, CodePointUnits, FIRST_SUPPLEMENTARY, HIGH_SURROGATE_MAX, HIGH_SURROGATE_MIN,
    LOW_SURROGATE_MAX, LOW_SURROGATE_MIN, MAX_BYTES_PER_CODE_UNIT, ONE_BYTE_MAX, THREE_BYTE_MIN,
    TWO_BYTE_MAX, TWO_BYTE_MIN, code_point_to_units, encode_code_point, encode_code_unit,
    encoded_size, is_continuation, is_high_surrogate, is_low_surrogate, is_surrogate, sequence_len,
    surrogate_pair_to_code_point,
};
pub use cursor::{CodeUnits, Cursor, Position};
pub use error::{ValidationError, ValidationErrorKind};
pub use length::{code_unit_length, encode_units, encoded_size_of_units};
pub use validate::{is_well_formed, validate};
