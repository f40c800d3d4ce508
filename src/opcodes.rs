//! # Instruction Catalog
//!
//! This module contains the ordered instruction catalog that serves as the
//! single source of truth for every recognized AVR instruction form.
//!
//! Each entry includes:
//! - Opcode tag and mnemonic
//! - Mask and pattern used to classify a 16-bit word
//! - Operand field layout
//! - Human-readable description
//!
//! ## Priority
//!
//! Entries are tried top to bottom and the first match wins. The table is
//! ordered from the narrowest semantic meaning to the broadest:
//!
//! 1. Exact full-word match (NOP)
//! 2. Single-register form with a 7-bit opcode (CLR)
//! 3. 4-bit opcode immediate loads/compares (LDI, CPI)
//! 4. 8-bit opcode word-immediate forms (SBIW)
//! 5. 7-bit opcode + 4-bit selector unary forms (LD X+, LD Y+, LD -X, INC, DEC)
//! 6. 6-bit opcode two-register forms (MOV, CP)
//! 7. 6-bit opcode + 3-bit selector relative branch (BRNE)

use crate::operands::{OperandLayout, Pointer};
use std::fmt;

/// Tag for one recognized instruction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Nop,
    Clr,
    Ldi,
    Cpi,
    Sbiw,
    LdXPostIncrement,
    LdYPostIncrement,
    LdXPreDecrement,
    Inc,
    Dec,
    Mov,
    Cp,
    Brne,
}

impl Opcode {
    /// Catalog entry describing this form.
    pub fn entry(self) -> &'static CatalogEntry {
        // Every variant has exactly one catalog row.
        &INSTRUCTION_CATALOG[self as usize]
    }

    /// Instruction mnemonic (e.g. "LDI").
    pub fn mnemonic(self) -> &'static str {
        self.entry().mnemonic
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// One recognized instruction form.
///
/// A word belongs to this form iff `(word & mask) == (pattern & mask)`.
///
/// # Examples
///
/// ```
/// use libavr::{Opcode, OperandLayout, INSTRUCTION_CATALOG};
///
/// let ldi = Opcode::Ldi.entry();
/// assert_eq!(ldi.mnemonic, "LDI");
/// assert_eq!(ldi.layout, OperandLayout::UpperRegisterImmediate);
/// assert!(ldi.matches(0xE0A0));
/// assert!(!ldi.matches(0x3000));
/// assert_eq!(INSTRUCTION_CATALOG.len(), 13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Tag identifying this form.
    pub opcode: Opcode,

    /// Instruction mnemonic (e.g., "LD", "BRNE").
    pub mnemonic: &'static str,

    /// Bits that participate in opcode identification.
    pub mask: u16,

    /// Reference encoding; only the bits under `mask` are compared.
    pub pattern: u16,

    /// How operand fields are laid out in the word.
    pub layout: OperandLayout,

    /// Short description shown in listings.
    pub description: &'static str,
}

impl CatalogEntry {
    /// Whether `word` is an encoding of this form.
    pub const fn matches(&self, word: u16) -> bool {
        (word & self.mask) == (self.pattern & self.mask)
    }
}

/// Recognized instruction forms, in match priority order.
///
/// Rows are indexed by `Opcode as usize`, so the variant order of [`Opcode`]
/// and the row order here must agree.
pub static INSTRUCTION_CATALOG: [CatalogEntry; 13] = [
    // 0000 0000 0000 0000
    CatalogEntry {
        opcode: Opcode::Nop,
        mnemonic: "NOP",
        mask: 0xFFFF,
        pattern: 0x0000,
        layout: OperandLayout::Implicit,
        description: "No operation",
    },
    // 0010 01rd dddd rrrr  (EOR Rd,Rd)
    CatalogEntry {
        opcode: Opcode::Clr,
        mnemonic: "CLR",
        mask: 0xFE00,
        pattern: 0x2400,
        layout: OperandLayout::ClearRegister,
        description: "Clear Register",
    },
    // 1110 KKKK dddd KKKK
    CatalogEntry {
        opcode: Opcode::Ldi,
        mnemonic: "LDI",
        mask: 0xF000,
        pattern: 0xE000,
        layout: OperandLayout::UpperRegisterImmediate,
        description: "Load immediate",
    },
    // 0011 KKKK dddd KKKK
    CatalogEntry {
        opcode: Opcode::Cpi,
        mnemonic: "CPI",
        mask: 0xF000,
        pattern: 0x3000,
        layout: OperandLayout::UpperRegisterImmediate,
        description: "Compare with immediate",
    },
    // 1001 0111 KKdd KKKK
    CatalogEntry {
        opcode: Opcode::Sbiw,
        mnemonic: "SBIW",
        mask: 0xFF00,
        pattern: 0x9700,
        layout: OperandLayout::RegisterPairImmediate,
        description: "Subtract immediate from word",
    },
    // 1001 000d dddd 1101
    CatalogEntry {
        opcode: Opcode::LdXPostIncrement,
        mnemonic: "LD",
        mask: 0xFE0F,
        pattern: 0x900D,
        layout: OperandLayout::Indirect(Pointer::XPostIncrement),
        description: "Load indirect and postincrement",
    },
    // 1001 000d dddd 1001
    CatalogEntry {
        opcode: Opcode::LdYPostIncrement,
        mnemonic: "LD",
        mask: 0xFE0F,
        pattern: 0x9009,
        layout: OperandLayout::Indirect(Pointer::YPostIncrement),
        description: "Load indirect and postincrement",
    },
    // 1001 000d dddd 1110
    CatalogEntry {
        opcode: Opcode::LdXPreDecrement,
        mnemonic: "LD",
        mask: 0xFE0F,
        pattern: 0x900E,
        layout: OperandLayout::Indirect(Pointer::XPreDecrement),
        description: "Load indirect and predecrement",
    },
    // 1001 010d dddd 0011
    CatalogEntry {
        opcode: Opcode::Inc,
        mnemonic: "INC",
        mask: 0xFE0F,
        pattern: 0x9403,
        layout: OperandLayout::Register,
        description: "Increment",
    },
    // 1001 010d dddd 1010
    CatalogEntry {
        opcode: Opcode::Dec,
        mnemonic: "DEC",
        mask: 0xFE0F,
        pattern: 0x940A,
        layout: OperandLayout::Register,
        description: "Decrement",
    },
    // 0010 11rd dddd rrrr
    CatalogEntry {
        opcode: Opcode::Mov,
        mnemonic: "MOV",
        mask: 0xFC00,
        pattern: 0x2C00,
        layout: OperandLayout::TwoRegisters,
        description: "Copy register",
    },
    // 0001 01rd dddd rrrr
    CatalogEntry {
        opcode: Opcode::Cp,
        mnemonic: "CP",
        mask: 0xFC00,
        pattern: 0x1400,
        layout: OperandLayout::TwoRegisters,
        description: "Compare",
    },
    // 1111 01kk kkkk k001
    CatalogEntry {
        opcode: Opcode::Brne,
        mnemonic: "BRNE",
        mask: 0xFC07,
        pattern: 0xF401,
        layout: OperandLayout::Relative,
        description: "Branch if not equal",
    },
];
