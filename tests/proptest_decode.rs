//! Property-based tests for instruction decoding.
//!
//! These tests verify that:
//! - decoding is idempotent and independent of the word's address
//! - decoded operands stay inside the ranges each form can address
//! - branch displacements render with the correct sign and magnitude
//! - whole images decode word by word, in order

use libavr::disassembler::decoder::decode_word;
use libavr::disassembler::formatter::format_instruction;
use libavr::{disassemble, disassemble_words, DisassemblyOptions, Opcode, Operand};
use proptest::prelude::*;

/// Encode BRNE with a raw 7-bit displacement field
fn encode_brne(k7: u8) -> u16 {
    0xF401 | (((k7 & 0x7F) as u16) << 3)
}

proptest! {
    /// Property: decoding the same word twice yields identical output
    #[test]
    fn prop_decode_idempotent(word in any::<u16>(), address in any::<u16>()) {
        let first = decode_word(word, address);
        let second = decode_word(word, address);

        prop_assert_eq!(format_instruction(&first), format_instruction(&second));
        prop_assert_eq!(first, second);
    }

    /// Property: the rendered text does not depend on where the word sits
    #[test]
    fn prop_text_independent_of_address(word in any::<u16>(), a in any::<u16>(), b in any::<u16>()) {
        prop_assert_eq!(
            format_instruction(&decode_word(word, a)),
            format_instruction(&decode_word(word, b))
        );
    }

    /// Property: register operands are valid indices for their form
    #[test]
    fn prop_register_ranges(word in any::<u16>()) {
        let instr = decode_word(word, 0);

        for operand in &instr.operands {
            if let Operand::Register(index) = *operand {
                prop_assert!(index <= 31, "R{} out of range for 0x{:04X}", index, word);

                match instr.opcode {
                    Some(Opcode::Ldi) | Some(Opcode::Cpi) => {
                        prop_assert!(index >= 16, "R{} below upper half for 0x{:04X}", index, word);
                    }
                    Some(Opcode::Sbiw) => {
                        prop_assert!([24, 26, 28, 30].contains(&index));
                    }
                    _ => {}
                }
            }
        }
    }

    /// Property: SBIW immediates fit in six bits
    #[test]
    fn prop_sbiw_immediate_range(low in 0u16..=0xFF) {
        let instr = decode_word(0x9700 | low, 0);

        prop_assert_eq!(instr.opcode, Some(Opcode::Sbiw));
        match instr.operands[1] {
            Operand::Immediate(k) => prop_assert!(k <= 0x3F),
            other => prop_assert!(false, "unexpected operand {:?}", other),
        }
    }

    /// Property: LDI reassembles its split immediate and upper register
    #[test]
    fn prop_ldi_fields(d in 0u16..16, k in any::<u8>()) {
        let word = 0xE000 | ((k as u16 & 0xF0) << 4) | (d << 4) | (k as u16 & 0x0F);
        let text = format_instruction(&decode_word(word, 0));

        prop_assert_eq!(text, format!("LDI R{},0x{:02X}", d + 16, k));
    }

    /// Property: MOV reassembles both five-bit registers
    #[test]
    fn prop_mov_fields(d in 0u16..32, r in 0u16..32) {
        let word = 0x2C00 | ((r & 0x10) << 5) | (d << 4) | (r & 0x0F);
        let text = format_instruction(&decode_word(word, 0));

        prop_assert_eq!(text, format!("MOV R{},R{}", d, r));
    }

    /// Property: BRNE renders the sign-extended displacement plus one
    #[test]
    fn prop_brne_displacement(k7 in 0u8..128) {
        let signed = if k7 >= 64 { k7 as i16 - 128 } else { k7 as i16 };
        let offset = signed + 1;

        let text = format_instruction(&decode_word(encode_brne(k7), 0));

        let expected = if offset >= 0 {
            format!("BRNE PC+0x{:02X}", offset)
        } else {
            format!("BRNE PC-0x{:02X}", -offset)
        };
        prop_assert_eq!(text, expected);
    }

    /// Property: a byte image decodes to the same records as its words
    #[test]
    fn prop_image_decodes_word_by_word(words in prop::collection::vec(any::<u16>(), 0..64), start in any::<u16>()) {
        let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        let options = DisassemblyOptions { start_address: start, ..Default::default() };

        let from_bytes = disassemble(&bytes, options).unwrap();
        let from_words = disassemble_words(words.iter().copied(), start);

        prop_assert_eq!(from_bytes.len(), words.len());
        prop_assert_eq!(&from_bytes, &from_words);
        for (index, instr) in from_bytes.iter().enumerate() {
            prop_assert_eq!(instr.word, words[index]);
            prop_assert_eq!(instr.address, start.wrapping_add((index as u16) * 2));
        }
    }

    /// Property: odd-length images are always rejected under the default policy
    #[test]
    fn prop_odd_length_rejected(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let result = disassemble(&bytes, DisassemblyOptions::default());
        prop_assert_eq!(result.is_err(), bytes.len() % 2 == 1);
    }
}
