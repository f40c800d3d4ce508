//! Instruction decoder for the AVR disassembler

use crate::disassembler::Instruction;
use crate::opcodes::{CatalogEntry, INSTRUCTION_CATALOG};

/// Find the catalog entry a word belongs to
///
/// Entries are scanned in priority order and the first match wins.
///
/// # Returns
///
/// Some(&CatalogEntry) for a recognized word, None otherwise
pub fn match_entry(word: u16) -> Option<&'static CatalogEntry> {
    INSTRUCTION_CATALOG.iter().find(|entry| entry.matches(word))
}

/// Decode a single instruction word
///
/// # Arguments
///
/// * `word` - The 16-bit instruction word
/// * `address` - The byte address of this word
///
/// # Returns
///
/// An `Instruction` carrying the matched opcode and its operands, or an
/// unrecognized record (no opcode, no operands) when nothing matches
pub fn decode_word(word: u16, address: u16) -> Instruction {
    match match_entry(word) {
        Some(entry) => {
            log::trace!("0x{:04X}: 0x{:04X} -> {}", address, word, entry.mnemonic);
            Instruction {
                address,
                word,
                opcode: Some(entry.opcode),
                operands: entry.layout.extract(word),
            }
        }
        None => {
            log::debug!("0x{:04X}: unrecognized word 0x{:04X}", address, word);
            Instruction {
                address,
                word,
                opcode: None,
                operands: Vec::new(),
            }
        }
    }
}
