//! Instruction catalog validation tests
//!
//! Verifies that the catalog is complete, unambiguous and that decoding is a
//! total function over every 16-bit word.

use libavr::disassembler::decoder::{decode_word, match_entry};
use libavr::disassembler::formatter::format_instruction;
use libavr::{Opcode, OperandLayout, INSTRUCTION_CATALOG};

#[test]
fn test_catalog_completeness() {
    assert_eq!(
        INSTRUCTION_CATALOG.len(),
        13,
        "Catalog must describe exactly 13 instruction forms"
    );

    for entry in INSTRUCTION_CATALOG.iter() {
        assert!(!entry.mnemonic.is_empty(), "{:?} has empty mnemonic", entry.opcode);
        assert!(
            !entry.description.is_empty(),
            "{} has empty description",
            entry.mnemonic
        );
        assert_ne!(entry.mask, 0, "{} has an empty mask", entry.mnemonic);
    }
}

#[test]
fn test_catalog_priority_order() {
    let order: Vec<Opcode> = INSTRUCTION_CATALOG.iter().map(|e| e.opcode).collect();

    assert_eq!(
        order,
        vec![
            Opcode::Nop,
            Opcode::Clr,
            Opcode::Ldi,
            Opcode::Cpi,
            Opcode::Sbiw,
            Opcode::LdXPostIncrement,
            Opcode::LdYPostIncrement,
            Opcode::LdXPreDecrement,
            Opcode::Inc,
            Opcode::Dec,
            Opcode::Mov,
            Opcode::Cp,
            Opcode::Brne,
        ]
    );
}

#[test]
fn test_no_two_entries_match_the_same_word() {
    for word in 0..=u16::MAX {
        let matching: Vec<&str> = INSTRUCTION_CATALOG
            .iter()
            .filter(|entry| entry.matches(word))
            .map(|entry| entry.mnemonic)
            .collect();

        assert!(
            matching.len() <= 1,
            "Word 0x{:04X} matches several forms: {:?}",
            word,
            matching
        );
    }
}

#[test]
fn test_decoding_is_total_and_deterministic() {
    let mut recognized = 0;

    for word in 0..=u16::MAX {
        let first = decode_word(word, 0x0000);
        let second = decode_word(word, 0x0000);

        assert_eq!(first, second, "Word 0x{:04X} decoded differently twice", word);
        assert_eq!(
            first.opcode,
            match_entry(word).map(|entry| entry.opcode),
            "Word 0x{:04X} decoded to the wrong form",
            word
        );

        if first.opcode.is_some() {
            recognized += 1;
        } else {
            assert_eq!(format_instruction(&first), format!("Unknown 0x{:04X}", word));
        }
    }

    // NOP 1 + CLR 512 + LDI/CPI 2*4096 + SBIW 256 + five unary forms 5*32
    // + MOV/CP 2*1024 + BRNE 128
    assert_eq!(recognized, 1 + 512 + 8192 + 256 + 160 + 2048 + 128);
}

#[test]
fn test_clr_register_from_low_five_bits() {
    let mut count = 0;

    for word in 0x2400..=0x25FFu16 {
        let instr = decode_word(word, 0x0000);

        assert_eq!(instr.opcode, Some(Opcode::Clr), "Word 0x{:04X}", word);
        assert_eq!(
            format_instruction(&instr),
            format!("CLR R{}", word & 0x1F),
            "Word 0x{:04X}",
            word
        );
        count += 1;
    }

    assert_eq!(count, 512);
}

#[test]
fn test_layouts_match_mnemonics() {
    for entry in INSTRUCTION_CATALOG.iter() {
        let expected = match entry.mnemonic {
            "NOP" => OperandLayout::Implicit,
            "CLR" => OperandLayout::ClearRegister,
            "INC" | "DEC" => OperandLayout::Register,
            "LDI" | "CPI" => OperandLayout::UpperRegisterImmediate,
            "SBIW" => OperandLayout::RegisterPairImmediate,
            "MOV" | "CP" => OperandLayout::TwoRegisters,
            "BRNE" => OperandLayout::Relative,
            "LD" => {
                assert!(matches!(entry.layout, OperandLayout::Indirect(_)));
                continue;
            }
            other => panic!("Unexpected mnemonic {}", other),
        };
        assert_eq!(entry.layout, expected, "{} has the wrong layout", entry.mnemonic);
    }
}

#[test]
fn test_reference_encodings() {
    let cases = [
        (0x0000, "NOP"),
        (0x2400, "CLR R0"),
        (0xE0A0, "LDI R26,0x00"),
        (0x910D, "LD R16,X+"),
        (0x3000, "CPI R16,0x00"),
        (0xF7E9, "BRNE PC-0x02"),
        (0x9711, "SBIW R26,0x01"),
        (0x9109, "LD R16,Y+"),
        (0x911E, "LD R17,-X"),
        (0x1701, "CP R16,R17"),
        (0xF451, "BRNE PC+0x0B"),
        (0x2F0A, "MOV R16,R26"),
        (0x950A, "DEC R16"),
        (0x9403, "INC R0"),
        (0xFFFF, "Unknown 0xFFFF"),
    ];

    for (word, expected) in cases {
        assert_eq!(
            format_instruction(&decode_word(word, 0x0000)),
            expected,
            "Word 0x{:04X}",
            word
        );
    }
}
