//! AVR Disassembler Module
//!
//! Converts a program image into decoded instruction records.

pub mod decoder;
pub mod formatter;

use crate::opcodes::Opcode;
use crate::operands::Operand;
use crate::words::{words, TrailingBytePolicy};
use crate::DisassemblyError;

/// A single disassembled instruction word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Byte address of this word in program memory
    pub address: u16,

    /// The raw instruction word
    pub word: u16,

    /// Matched instruction form, or `None` for an unrecognized word
    pub opcode: Option<Opcode>,

    /// Decoded operands in display order (empty when unrecognized)
    pub operands: Vec<Operand>,
}

impl Instruction {
    /// Whether the word matched a catalog entry.
    pub fn is_recognized(&self) -> bool {
        self.opcode.is_some()
    }

    /// Mnemonic of the matched form, if any.
    pub fn mnemonic(&self) -> Option<&'static str> {
        self.opcode.map(Opcode::mnemonic)
    }

    /// Listing description of the matched form, if any.
    pub fn description(&self) -> Option<&'static str> {
        self.opcode.map(|opcode| opcode.entry().description)
    }

    /// Absolute byte address a relative branch transfers control to.
    ///
    /// Returns `None` for instructions without a displacement operand.
    pub fn branch_target(&self) -> Option<u16> {
        self.operands.iter().find_map(|operand| match *operand {
            Operand::Relative(offset) => {
                Some(self.address.wrapping_add((offset as i16 * 2) as u16))
            }
            _ => None,
        })
    }
}

/// Options controlling disassembly
#[derive(Debug, Clone, Copy, Default)]
pub struct DisassemblyOptions {
    /// Byte address of the first word (affects address display and branch targets)
    pub start_address: u16,

    /// Handling of an odd trailing byte
    pub trailing_byte: TrailingBytePolicy,
}

/// Disassemble a program image into one instruction per word
///
/// # Arguments
///
/// * `bytes` - The little-endian program image
/// * `options` - Start address and trailing byte policy
///
/// # Returns
///
/// One `Instruction` per complete word, in image order, or
/// `DisassemblyError::TruncatedStream` for an odd-length image under
/// `TrailingBytePolicy::Reject`.
pub fn disassemble(
    bytes: &[u8],
    options: DisassemblyOptions,
) -> Result<Vec<Instruction>, DisassemblyError> {
    let words = words(bytes, options.trailing_byte)?;
    let instructions = disassemble_words(words, options.start_address);

    log::debug!(
        "disassembled {} words, {} unrecognized",
        instructions.len(),
        instructions.iter().filter(|instr| !instr.is_recognized()).count()
    );

    Ok(instructions)
}

/// Decode a sequence of instruction words starting at `start_address`
#[cfg(not(feature = "parallel"))]
pub fn disassemble_words<I>(words: I, start_address: u16) -> Vec<Instruction>
where
    I: IntoIterator<Item = u16>,
{
    words
        .into_iter()
        .enumerate()
        .map(|(index, word)| decoder::decode_word(word, word_address(start_address, index)))
        .collect()
}

/// Decode a sequence of instruction words starting at `start_address`
///
/// Words are decoded independently across threads and returned in input order.
#[cfg(feature = "parallel")]
pub fn disassemble_words<I>(words: I, start_address: u16) -> Vec<Instruction>
where
    I: IntoIterator<Item = u16>,
{
    use rayon::prelude::*;

    let words: Vec<u16> = words.into_iter().collect();
    words
        .par_iter()
        .enumerate()
        .map(|(index, &word)| decoder::decode_word(word, word_address(start_address, index)))
        .collect()
}

fn word_address(start_address: u16, index: usize) -> u16 {
    start_address.wrapping_add((index as u16).wrapping_mul(2))
}
