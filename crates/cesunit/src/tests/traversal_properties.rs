//! Randomized traversal properties over generated buffers, covering the same
//! ground as the engine's historical string unit test: generated strings
//! validate, lengths agree between counting and both traversal directions,
//! and saved positions re-enter idempotently.

use alloc::vec::Vec;

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{
    Cursor, code_unit_length, encode_units, encoded_size_of_units, is_well_formed, validate,
};

fn traversal_prop(units: Vec<u16>, picks: Vec<usize>) -> bool {
    let bytes = encode_units(&units);
    if bytes.len() != encoded_size_of_units(&units) {
        return false;
    }
    // Anything the encoder produces must pass the gate.
    if !is_well_formed(&bytes) {
        return false;
    }

    // Forward traversal: collect units and positions, and check that every
    // read is immediately visible to peek_prev at the new position.
    let mut cursor = Cursor::new(&bytes);
    let mut seen = Vec::new();
    let mut saved = Vec::new();
    while !cursor.is_at_end() {
        saved.push(cursor.position());
        let unit = cursor.read_next();
        if cursor.peek_prev() != unit {
            return false;
        }
        seen.push(unit);
    }
    if seen != units {
        return false;
    }
    if code_unit_length(&bytes) != units.len() {
        return false;
    }

    // Random re-entry at saved positions.
    if !units.is_empty() {
        for pick in picks {
            let index = pick % units.len();
            let mut revisit = Cursor::new(&bytes);
            revisit.set_position(saved[index]);
            if revisit.peek_next() != units[index] {
                return false;
            }
        }
    }

    // Backward traversal visits the same units in reverse.
    let mut cursor = Cursor::at_end(&bytes);
    let mut backward = Vec::new();
    while !cursor.is_at_start() {
        backward.push(cursor.read_prev());
    }
    backward.reverse();
    backward == units
}

#[test]
fn generated_buffers_traverse_symmetrically() {
    QuickCheck::new().quickcheck(traversal_prop as fn(Vec<u16>, Vec<usize>) -> bool);
}

/// For arbitrary bytes, a validation failure always names an in-bounds
/// offset whose prefix is itself well formed; a success means the cursor can
/// walk the whole buffer and the two directions agree.
#[quickcheck]
fn validation_splits_buffers_cleanly(bytes: Vec<u8>) -> bool {
    match validate(&bytes) {
        Ok(()) => {
            let mut cursor = Cursor::new(&bytes);
            let mut forward = Vec::new();
            while !cursor.is_at_end() {
                forward.push(cursor.read_next());
            }
            if forward.len() != code_unit_length(&bytes) {
                return false;
            }
            let mut cursor = Cursor::at_end(&bytes);
            let mut backward = Vec::new();
            while !cursor.is_at_start() {
                backward.push(cursor.read_prev());
            }
            backward.reverse();
            forward == backward
        }
        Err(err) => err.offset() <= bytes.len() && is_well_formed(&bytes[..err.offset()]),
    }
}

/// Re-encoding a decoded buffer reproduces it byte for byte.
#[quickcheck]
fn decode_encode_is_identity_on_valid_buffers(bytes: Vec<u8>) -> bool {
    if !is_well_formed(&bytes) {
        return true;
    }
    let units: Vec<u16> = crate::CodeUnits::new(&bytes).collect();
    encode_units(&units) == bytes
}
