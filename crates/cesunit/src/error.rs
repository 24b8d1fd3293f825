use thiserror::Error;

/// Why a buffer failed validation, and where.
///
/// The offset points at the leading byte of the first bad sequence; every
/// byte before it forms a well-formed prefix.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind} at byte offset {offset}")]
pub struct ValidationError {
    pub(crate) offset: usize,
    pub(crate) kind: ValidationErrorKind,
}

impl ValidationError {
    pub(crate) fn new(offset: usize, kind: ValidationErrorKind) -> Self {
        Self { offset, kind }
    }

    /// Byte offset of the first invalid sequence.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// What was wrong with the sequence at [`offset`](ValidationError::offset).
    #[must_use]
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }
}

/// The specific rule a sequence broke.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ValidationErrorKind {
    /// A continuation byte appeared where a leading byte was expected.
    #[error("unexpected continuation byte {0:#04X}")]
    UnexpectedContinuation(u8),
    /// The leading byte declares more than three bytes.
    #[error("leading byte {0:#04X} declares a sequence longer than three bytes")]
    SequenceTooLong(u8),
    /// The buffer ends in the middle of a multi-byte sequence.
    #[error("truncated sequence at end of buffer")]
    Truncated,
    /// A byte inside a multi-byte sequence is not of the form `10xxxxxx`.
    #[error("byte {0:#04X} is not a continuation byte")]
    BadContinuation(u8),
    /// The value would fit in a shorter sequence.
    #[error("overlong encoding of {0:#06X}")]
    Overlong(u16),
}
