#![no_main]
use arbitrary::Arbitrary;
use cesunit::{CodeUnits, Cursor, code_unit_length, encode_units, is_well_formed, validate};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    raw: &'a [u8],
    units: Vec<u16>,
}

fuzz_target!(|input: Input| {
    // Raw bytes: the validator's verdict must match what traversal can do.
    match validate(input.raw) {
        Ok(()) => {
            let mut cursor = Cursor::new(input.raw);
            let mut forward = Vec::new();
            while !cursor.is_at_end() {
                let saved = cursor.position();
                let unit = cursor.read_next();
                assert_eq!(cursor.peek_prev(), unit);
                forward.push((saved, unit));
            }
            assert_eq!(code_unit_length(input.raw), forward.len());

            let mut cursor = Cursor::at_end(input.raw);
            for &(saved, unit) in forward.iter().rev() {
                assert_eq!(cursor.read_prev(), unit);
                assert_eq!(cursor.position(), saved);
            }
            assert!(cursor.is_at_start());
        }
        Err(err) => {
            assert!(err.offset() <= input.raw.len());
            // The reported offset splits off a clean prefix.
            assert!(is_well_formed(&input.raw[..err.offset()]));
        }
    }

    // Unit vectors: encoding is total and round-trips through the gate.
    let bytes = encode_units(&input.units);
    assert!(is_well_formed(&bytes));
    let decoded: Vec<u16> = CodeUnits::new(&bytes).collect();
    assert_eq!(decoded, input.units);
});
