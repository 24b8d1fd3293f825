//! Bidirectional code-unit cursor over an encoded byte buffer.
//!
//! A [`Cursor`] borrows an immutable buffer and steps through it one code
//! unit at a time, in either direction, without ever re-scanning from the
//! start. The buffer is trusted: run it through [`crate::validate()`] first
//! if it came from outside. Misusing the cursor (stepping past either end,
//! restoring a position that is not a unit boundary) is a caller bug and
//! panics rather than yielding a wrong unit.
//!
//! One deliberate relaxation: buffers produced by legacy UTF-8 writers may
//! contain genuine four-byte sequences. The cursor does not reject these; it
//! surfaces the supplementary code point as two consecutive reads, high
//! surrogate then low surrogate, so consumers always see 16-bit units. A
//! [`Position`] therefore records whether it sits on the trailing half of
//! such a sequence. On well-formed buffers that flag is never set and the
//! position is just a byte offset.

use crate::codec::{
    self, FIRST_SUPPLEMENTARY, HIGH_SURROGATE_MIN, LOW_SURROGATE_MIN, MAX_BYTES_PER_CODE_UNIT,
    is_continuation, sequence_len,
};

/// A saved cursor state, restorable with [`Cursor::set_position`].
///
/// Positions compare equal exactly when they denote the same code-unit
/// boundary, so a position saved after a read and revisited later peeks the
/// same unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    offset: usize,
    pair_tail: bool,
}

impl Position {
    /// The start of any buffer.
    pub const START: Position = Position {
        offset: 0,
        pair_tail: false,
    };

    /// Byte offset into the buffer. For pair-tail positions this is the
    /// offset of the four-byte sequence's leading byte.
    #[must_use]
    pub fn byte_offset(self) -> usize {
        self.offset
    }
}

/// A position within an encoded buffer, movable by whole code units.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: Position,
}

impl<'a> Cursor<'a> {
    /// Cursor positioned at the start of `bytes`.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: Position::START,
        }
    }

    /// Cursor positioned at the end-of-sequence state of `bytes`.
    #[must_use]
    pub fn at_end(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: Position {
                offset: bytes.len(),
                pair_tail: false,
            },
        }
    }

    /// The current position, suitable for saving and re-entry.
    #[must_use]
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Current byte offset.
    #[must_use]
    pub fn byte_offset(&self) -> usize {
        self.pos.offset
    }

    /// Restores a previously saved position.
    ///
    /// # Panics
    ///
    /// Panics if the offset lies outside the buffer; debug builds also check
    /// that it lands on a code-unit boundary.
    pub fn set_position(&mut self, pos: Position) {
        assert!(pos.offset <= self.bytes.len(), "position outside the buffer");
        debug_assert!(
            pos.offset == self.bytes.len() || !is_continuation(self.bytes[pos.offset]),
            "position does not address a leading byte"
        );
        debug_assert!(
            !pos.pair_tail
                || (pos.offset < self.bytes.len()
                    && sequence_len(self.bytes[pos.offset]) > MAX_BYTES_PER_CODE_UNIT),
            "pair-tail position without a four-byte sequence"
        );
        self.pos = pos;
    }

    /// Whether the cursor sits before the first code unit.
    #[must_use]
    pub fn is_at_start(&self) -> bool {
        self.pos == Position::START
    }

    /// Whether the cursor has reached the end-of-sequence state.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos.offset == self.bytes.len()
    }

    /// Decodes the code unit at the cursor without moving.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end of the buffer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn peek_next(&self) -> u16 {
        assert!(!self.is_at_end(), "peek past the end of the buffer");
        let (value, len) = codec::decode_sequence(&self.bytes[self.pos.offset..]);
        if len <= MAX_BYTES_PER_CODE_UNIT {
            value as u16
        } else {
            debug_assert!(
                value >= FIRST_SUPPLEMENTARY,
                "overlong four-byte sequence"
            );
            let bits = value - FIRST_SUPPLEMENTARY;
            if self.pos.pair_tail {
                LOW_SURROGATE_MIN + (bits & 0x3FF) as u16
            } else {
                HIGH_SURROGATE_MIN + (bits >> 10) as u16
            }
        }
    }

    /// Decodes the code unit ending at the cursor without moving: the unit a
    /// [`read_next`](Cursor::read_next) arriving here would have returned
    /// last. Scans backward to the previous leading byte, then decodes
    /// forward from it.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the start of the buffer.
    #[must_use]
    pub fn peek_prev(&self) -> u16 {
        let mut probe = self.clone();
        probe.read_prev()
    }

    /// Moves forward over one code unit.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end of the buffer.
    pub fn advance(&mut self) {
        assert!(!self.is_at_end(), "advance past the end of the buffer");
        let len = sequence_len(self.bytes[self.pos.offset]);
        if len > MAX_BYTES_PER_CODE_UNIT && !self.pos.pair_tail {
            // First half of a legacy four-byte sequence consumed; stay on its
            // leading byte until the low surrogate is consumed too.
            self.pos.pair_tail = true;
        } else {
            self.pos.offset += len;
            self.pos.pair_tail = false;
        }
    }

    /// Moves backward to the start of the preceding code unit.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the start of the buffer.
    pub fn retreat(&mut self) {
        assert!(!self.is_at_start(), "retreat past the start of the buffer");
        if self.pos.pair_tail {
            self.pos.pair_tail = false;
            return;
        }
        let mut offset = self.pos.offset - 1;
        while is_continuation(self.bytes[offset]) {
            assert!(offset > 0, "no leading byte before the position");
            offset -= 1;
        }
        self.pos.offset = offset;
        self.pos.pair_tail = sequence_len(self.bytes[offset]) > MAX_BYTES_PER_CODE_UNIT;
    }

    /// Reads the code unit at the cursor and moves past it.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end of the buffer.
    pub fn read_next(&mut self) -> u16 {
        let unit = self.peek_next();
        self.advance();
        unit
    }

    /// Moves back over the preceding code unit and reads it, leaving the
    /// cursor at that unit's start.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the start of the buffer.
    pub fn read_prev(&mut self) -> u16 {
        self.retreat();
        self.peek_next()
    }
}

/// Forward iterator over the code units of an encoded buffer.
#[derive(Debug, Clone)]
pub struct CodeUnits<'a> {
    cursor: Cursor<'a>,
}

impl<'a> CodeUnits<'a> {
    /// Iterates the code units of `bytes` in storage order.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(bytes),
        }
    }
}

impl Iterator for CodeUnits<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        if self.cursor.is_at_end() {
            None
        } else {
            Some(self.cursor.read_next())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CodeUnits, Cursor};

    // "s", U+041A, U+D7FF
    const SAMPLE: &[u8] = &[0x73, 0xD0, 0x9A, 0xED, 0x9F, 0xBF];

    #[test]
    fn forward_and_back() {
        let mut cursor = Cursor::new(SAMPLE);
        assert!(cursor.is_at_start());
        assert_eq!(cursor.read_next(), 0x73);
        assert_eq!(cursor.read_next(), 0x41A);
        assert_eq!(cursor.peek_prev(), 0x41A);
        assert_eq!(cursor.read_next(), 0xD7FF);
        assert!(cursor.is_at_end());

        assert_eq!(cursor.read_prev(), 0xD7FF);
        assert_eq!(cursor.read_prev(), 0x41A);
        assert_eq!(cursor.read_prev(), 0x73);
        assert!(cursor.is_at_start());
    }

    #[test]
    fn peek_does_not_move() {
        let mut cursor = Cursor::new(SAMPLE);
        assert_eq!(cursor.peek_next(), 0x73);
        assert_eq!(cursor.peek_next(), 0x73);
        cursor.advance();
        assert_eq!(cursor.byte_offset(), 1);
        assert_eq!(cursor.peek_next(), 0x41A);
    }

    #[test]
    fn saved_position_reenters() {
        let mut cursor = Cursor::new(SAMPLE);
        cursor.advance();
        let saved = cursor.position();
        let unit = cursor.read_next();
        cursor.read_next();
        assert!(cursor.is_at_end());

        cursor.set_position(saved);
        assert_eq!(cursor.peek_next(), unit);
    }

    #[test]
    fn iterator_visits_each_unit_once() {
        let units: alloc::vec::Vec<u16> = CodeUnits::new(SAMPLE).collect();
        assert_eq!(units, [0x73, 0x41A, 0xD7FF]);
    }

    #[test]
    #[should_panic(expected = "advance past the end")]
    fn advance_at_end_is_a_bug() {
        let mut cursor = Cursor::new(&[]);
        cursor.advance();
    }

    #[test]
    #[should_panic(expected = "retreat past the start")]
    fn retreat_at_start_is_a_bug() {
        let mut cursor = Cursor::new(SAMPLE);
        cursor.retreat();
    }
}
