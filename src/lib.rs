//! # AVR Disassembler Core
//!
//! A table-driven disassembler for a subset of the 8-bit AVR instruction set,
//! designed for clarity, testability, and WebAssembly portability.
//!
//! The crate reads a little-endian program image, groups it into 16-bit
//! instruction words, classifies each word against an ordered instruction
//! catalog and renders one line of assembly per word.
//!
//! ## Quick Start
//!
//! ```rust
//! use libavr::disassembler::formatter::format_instruction;
//! use libavr::{disassemble, DisassemblyOptions};
//!
//! let image = [0x00, 0x24, 0xA0, 0xE0, 0xE9, 0xF7, 0xFF, 0xFF];
//! let instructions = disassemble(&image, DisassemblyOptions::default()).unwrap();
//!
//! let lines: Vec<String> = instructions.iter().map(format_instruction).collect();
//! assert_eq!(lines, ["CLR R0", "LDI R26,0x00", "BRNE PC-0x02", "Unknown 0xFFFF"]);
//! ```
//!
//! ## Architecture
//!
//! - **Table-Driven Design**: every recognized form lives in one ordered catalog
//!   of mask/pattern entries; the first match wins
//! - **Explicit Fields**: operands are read with mask/shift extractors, never by
//!   reinterpreting memory
//! - **Stateless Decoding**: each word decodes independently of its neighbours
//!
//! ## Modules
//!
//! - `words` - Program image to instruction word iterator
//! - `opcodes` - Instruction catalog
//! - `operands` - Operand field extraction and operand types
//! - `disassembler` - Decoder and formatter
//! - `sample` - Built-in demonstration program

pub mod disassembler;
pub mod opcodes;
pub mod operands;
pub mod sample;
pub mod words;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use disassembler::{disassemble, disassemble_words, DisassemblyOptions, Instruction};
pub use opcodes::{CatalogEntry, Opcode, INSTRUCTION_CATALOG};
pub use operands::{Operand, OperandLayout, Pointer};
pub use sample::{SAMPLE_LISTING, SAMPLE_PROGRAM};
pub use words::{words, TrailingBytePolicy, Words};

/// Errors that can occur while disassembling a program image.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisassemblyError {
    /// The image has an odd length, so its last byte is not part of any word.
    #[error(
        "program image has odd length {length}: trailing byte 0x{trailing_byte:02X} does not form an instruction word"
    )]
    TruncatedStream {
        /// Length of the image in bytes.
        length: usize,

        /// The unpaired final byte.
        trailing_byte: u8,
    },
}
