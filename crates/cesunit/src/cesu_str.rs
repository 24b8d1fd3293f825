//! A validated-buffer wrapper.
//!
//! [`CesuStr`] marks the trust boundary in the type system: the only safe
//! way in is [`CesuStr::from_bytes`], which runs the validator, so holding
//! one means the bytes may be traversed with every precondition trusted.
//! Buffers produced inside the engine (whose well-formedness is structural)
//! can skip the re-check with [`CesuStr::from_bytes_unchecked`].

use core::fmt;

use bstr::BStr;

use crate::cursor::{CodeUnits, Cursor};
use crate::error::ValidationError;
use crate::length::code_unit_length;
use crate::validate;

/// A borrowed byte buffer known to hold a well-formed encoded string.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CesuStr<'a> {
    bytes: &'a [u8],
}

impl<'a> CesuStr<'a> {
    /// Validates `bytes` and wraps them.
    ///
    /// # Errors
    ///
    /// Returns the validator's diagnosis if the buffer is malformed.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, ValidationError> {
        validate::validate(bytes)?;
        Ok(Self { bytes })
    }

    /// Wraps `bytes` without validating.
    ///
    /// Not memory-unsafe, but the caller vouches for well-formedness:
    /// traversal over a malformed buffer panics instead of producing units.
    /// Debug builds still check.
    #[must_use]
    pub fn from_bytes_unchecked(bytes: &'a [u8]) -> Self {
        debug_assert!(
            validate::is_well_formed(bytes),
            "malformed buffer passed to from_bytes_unchecked"
        );
        Self { bytes }
    }

    /// The underlying bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Size of the buffer in bytes.
    #[must_use]
    pub fn len_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the string holds no code units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of code units in the string. O(n) in bytes.
    #[must_use]
    pub fn len_units(&self) -> usize {
        code_unit_length(self.bytes)
    }

    /// Iterates the code units in storage order.
    #[must_use]
    pub fn code_units(&self) -> CodeUnits<'a> {
        CodeUnits::new(self.bytes)
    }

    /// A cursor positioned at the start of the string.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor::new(self.bytes)
    }
}

// Encoded surrogate halves are not valid UTF-8, so rendering goes through
// BStr, which substitutes rather than refusing.
impl fmt::Debug for CesuStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CesuStr({:?})", BStr::new(self.bytes))
    }
}

impl fmt::Display for CesuStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(BStr::new(self.bytes), f)
    }
}
