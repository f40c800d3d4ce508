//! # Operand Fields
//!
//! This module defines how operand subfields are pulled out of a 16-bit AVR
//! instruction word and the typed operands they decode into.
//!
//! Every field is described by a [`BitField`] (bit offset + width) and read with
//! plain mask/shift arithmetic, so each extractor can be tested on its own.
//! Composite operands (split immediates, the five-bit source register, register
//! pairs, branch displacements) are assembled from several fields.

use std::fmt;

/// A contiguous run of bits inside an instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    /// Position of the least significant bit of the field.
    pub offset: u8,

    /// Number of bits in the field (1-16).
    pub width: u8,
}

impl BitField {
    /// Create a field starting at `offset` spanning `width` bits.
    pub const fn new(offset: u8, width: u8) -> Self {
        Self { offset, width }
    }

    /// Mask selecting the field's bits once shifted down to bit 0.
    pub const fn mask(self) -> u16 {
        if self.width >= 16 {
            u16::MAX
        } else {
            (1u16 << self.width) - 1
        }
    }

    /// Read this field from `word`, right-aligned.
    pub const fn extract(self, word: u16) -> u16 {
        (word >> self.offset) & self.mask()
    }
}

/// `.... ...d dddd ....` - five-bit destination register.
pub const DEST_REGISTER: BitField = BitField::new(4, 5);

/// `.... .... ...d dddd` - destination register of the clear form.
pub const CLEAR_REGISTER: BitField = BitField::new(0, 5);

/// `.... .... dddd ....` - four-bit destination in the upper register half.
pub const UPPER_DEST_REGISTER: BitField = BitField::new(4, 4);

/// `.... ..r. .... ....` - high bit of the source register.
pub const SOURCE_REGISTER_HIGH: BitField = BitField::new(9, 1);

/// `.... .... .... rrrr` - low nibble of the source register.
pub const SOURCE_REGISTER_LOW: BitField = BitField::new(0, 4);

/// `.... KKKK .... ....` - high nibble of an 8-bit immediate.
pub const IMMEDIATE_HIGH: BitField = BitField::new(8, 4);

/// `.... .... .... KKKK` - low nibble of an 8-bit immediate.
pub const IMMEDIATE_LOW: BitField = BitField::new(0, 4);

/// `.... .... ..dd ....` - register pair selector.
pub const PAIR_SELECTOR: BitField = BitField::new(4, 2);

/// `.... .... KK.. ....` - high two bits of a 6-bit word immediate.
pub const PAIR_IMMEDIATE_HIGH: BitField = BitField::new(6, 2);

/// `.... ..kk kkkk k...` - 7-bit signed branch displacement.
pub const BRANCH_DISPLACEMENT: BitField = BitField::new(3, 7);

/// Register index added to [`UPPER_DEST_REGISTER`] (forms that only address R16-R31).
pub const UPPER_REGISTER_BASE: u8 = 16;

/// Register index of the first pair addressable by word-immediate forms (R24).
pub const PAIR_REGISTER_BASE: u8 = 24;

/// Five-bit destination register, R0-R31.
pub fn destination_register(word: u16) -> u8 {
    DEST_REGISTER.extract(word) as u8
}

/// Destination register of CLR, R0-R31.
pub fn clear_register(word: u16) -> u8 {
    CLEAR_REGISTER.extract(word) as u8
}

/// Destination register of immediate forms, R16-R31.
pub fn upper_register(word: u16) -> u8 {
    UPPER_REGISTER_BASE + UPPER_DEST_REGISTER.extract(word) as u8
}

/// Five-bit source register, concatenated as `(high_bit << 4) | low_nibble`.
pub fn source_register(word: u16) -> u8 {
    let high = SOURCE_REGISTER_HIGH.extract(word) as u8;
    let low = SOURCE_REGISTER_LOW.extract(word) as u8;
    (high << 4) | low
}

/// 8-bit immediate split across two nibbles, `(high_nibble << 4) | low_nibble`.
pub fn immediate_byte(word: u16) -> u8 {
    let high = IMMEDIATE_HIGH.extract(word) as u8;
    let low = IMMEDIATE_LOW.extract(word) as u8;
    (high << 4) | low
}

/// Low register of the addressed pair: R24, R26, R28 or R30.
pub fn pair_register(word: u16) -> u8 {
    PAIR_REGISTER_BASE + PAIR_SELECTOR.extract(word) as u8 * 2
}

/// 6-bit word immediate, 0x00-0x3F.
pub fn pair_immediate(word: u16) -> u8 {
    let high = PAIR_IMMEDIATE_HIGH.extract(word) as u8;
    let low = IMMEDIATE_LOW.extract(word) as u8;
    (high << 4) | low
}

/// Sign-extend a 7-bit two's complement value to `i8`.
///
/// The field is shifted so its sign bit lands on bit 7, reinterpreted as
/// signed, then arithmetic-shifted back down.
pub fn sign_extend_7(value: u8) -> i8 {
    (((value & 0x7F) << 1) as i8) >> 1
}

/// Branch displacement in words, including the +1 for the already-advanced
/// program counter. Always in the range -63..=64.
pub fn branch_offset(word: u16) -> i8 {
    sign_extend_7(BRANCH_DISPLACEMENT.extract(word) as u8) + 1
}

/// Pointer register and addressing mode of an indirect load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pointer {
    /// `X+` - load through X, then increment X.
    XPostIncrement,

    /// `Y+` - load through Y, then increment Y.
    YPostIncrement,

    /// `-X` - decrement X, then load through it.
    XPreDecrement,
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Pointer::XPostIncrement => "X+",
            Pointer::YPostIncrement => "Y+",
            Pointer::XPreDecrement => "-X",
        };
        f.write_str(text)
    }
}

/// Field layout of a catalog entry.
///
/// The layout determines which operand fields are extracted from a matched
/// word and how the formatter arranges them.
///
/// # Operands
///
/// - **none**: Implicit
/// - **one register**: Register, ClearRegister, Indirect
/// - **register + immediate**: UpperRegisterImmediate, RegisterPairImmediate
/// - **two registers**: TwoRegisters
/// - **displacement**: Relative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandLayout {
    /// No operands.
    ///
    /// Example: NOP
    Implicit,

    /// Five-bit destination register.
    ///
    /// Examples: INC R0, DEC R16
    Register,

    /// Register taken from the low five bits of the word.
    ///
    /// Example: CLR R0
    ClearRegister,

    /// Five-bit destination register loaded through a pointer register.
    ///
    /// Example: LD R16,X+
    Indirect(Pointer),

    /// Four-bit destination offset into R16-R31 and a split 8-bit immediate.
    ///
    /// Examples: LDI R26,0x00, CPI R16,0x00
    UpperRegisterImmediate,

    /// Register pair R24-R30 and a 6-bit immediate.
    ///
    /// Example: SBIW R26,0x01
    RegisterPairImmediate,

    /// Five-bit destination and five-bit source registers.
    ///
    /// Examples: MOV R16,R26, CP R16,R17
    TwoRegisters,

    /// 7-bit signed program-counter displacement.
    ///
    /// Example: BRNE PC-0x02
    Relative,
}

impl OperandLayout {
    /// Extract this layout's operands from `word`, in display order.
    pub fn extract(self, word: u16) -> Vec<Operand> {
        use OperandLayout::*;

        match self {
            Implicit => Vec::new(),
            Register => vec![Operand::Register(destination_register(word))],
            ClearRegister => vec![Operand::Register(clear_register(word))],
            Indirect(pointer) => vec![
                Operand::Register(destination_register(word)),
                Operand::Pointer(pointer),
            ],
            UpperRegisterImmediate => vec![
                Operand::Register(upper_register(word)),
                Operand::Immediate(immediate_byte(word)),
            ],
            RegisterPairImmediate => vec![
                Operand::Register(pair_register(word)),
                Operand::Immediate(pair_immediate(word)),
            ],
            TwoRegisters => vec![
                Operand::Register(destination_register(word)),
                Operand::Register(source_register(word)),
            ],
            Relative => vec![Operand::Relative(branch_offset(word))],
        }
    }
}

/// A single decoded operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// General purpose register index, 0-31.
    Register(u8),

    /// Immediate constant.
    Immediate(u8),

    /// Signed program-counter displacement in words.
    Relative(i8),

    /// Pointer register with its addressing mode.
    Pointer(Pointer),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Operand::Register(index) => write!(f, "R{}", index),
            Operand::Immediate(value) => write!(f, "0x{:02X}", value),
            Operand::Relative(offset) if offset >= 0 => write!(f, "PC+0x{:02X}", offset),
            Operand::Relative(offset) => write!(f, "PC-0x{:02X}", offset.unsigned_abs()),
            Operand::Pointer(pointer) => write!(f, "{}", pointer),
        }
    }
}
