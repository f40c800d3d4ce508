//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences to the disassembler
//! to find edge cases and crashes in instruction decoding.

#![no_main]

use arbitrary::Arbitrary;
use libavr::disassembler::formatter::{format_instruction, format_listing_line};
use libavr::{disassemble, DisassemblyOptions, TrailingBytePolicy};
use libfuzzer_sys::fuzz_target;

/// Disassembly options for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzOptions {
    start_address: u16,
    ignore_trailing_byte: bool,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    options: FuzzOptions,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let options = DisassemblyOptions {
        start_address: input.options.start_address,
        trailing_byte: if input.options.ignore_trailing_byte {
            TrailingBytePolicy::Ignore
        } else {
            TrailingBytePolicy::Reject
        },
    };

    let odd = input.bytes.len() % 2 == 1;
    let instructions = match disassemble(&input.bytes, options) {
        Ok(instructions) => instructions,
        Err(_) => {
            // Only an odd image under the reject policy may fail
            assert!(odd && !input.options.ignore_trailing_byte);
            return;
        }
    };
    assert!(!odd || input.options.ignore_trailing_byte);

    // One record per complete word
    assert_eq!(instructions.len(), input.bytes.len() / 2);

    let mut expected_address = input.options.start_address;

    for (index, instr) in instructions.iter().enumerate() {
        // Each instruction should have correct address
        assert_eq!(instr.address, expected_address);

        // The raw word is read little-endian
        let word = u16::from_le_bytes([input.bytes[2 * index], input.bytes[2 * index + 1]]);
        assert_eq!(instr.word, word);

        // Unrecognized words carry no operands
        assert!(instr.is_recognized() || instr.operands.is_empty());

        let text = format_instruction(instr);
        assert!(!text.is_empty());
        assert!(format_listing_line(instr).contains(&text));

        expected_address = expected_address.wrapping_add(2);
    }
});
