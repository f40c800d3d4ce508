//! WASM API for the AVR disassembler.
//!
//! Provides JavaScript-callable interfaces for disassembling program images
//! and inspecting the built-in sample program.

use crate::disassembler::formatter::format_instruction;
use crate::{disassemble, DisassemblyOptions, TrailingBytePolicy, SAMPLE_PROGRAM};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// One disassembled word
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    word: u16,
    mnemonic: Option<String>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn word(&self) -> u16 {
        self.word
    }

    /// Mnemonic, or `undefined` for an unrecognized word
    #[wasm_bindgen(getter)]
    pub fn mnemonic(&self) -> Option<String> {
        self.mnemonic.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main disassembler interface for JavaScript
#[wasm_bindgen]
pub struct AvrDisassembler {
    options: DisassemblyOptions,
}

#[wasm_bindgen]
impl AvrDisassembler {
    /// Create a disassembler whose first word sits at `start_address`
    #[wasm_bindgen(constructor)]
    pub fn new(start_address: u16, ignore_trailing_byte: bool) -> Self {
        let trailing_byte = if ignore_trailing_byte {
            TrailingBytePolicy::Ignore
        } else {
            TrailingBytePolicy::Reject
        };

        AvrDisassembler {
            options: DisassemblyOptions {
                start_address,
                trailing_byte,
            },
        }
    }

    /// Disassemble a program image into an array of `DisassemblyLine`
    pub fn disassemble(&self, bytes: &[u8]) -> Result<js_sys::Array, JsError> {
        let instructions =
            disassemble(bytes, self.options).map_err(|e| JsError::new(&e.to_string()))?;

        Ok(instructions
            .iter()
            .map(|instr| {
                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    word: instr.word,
                    mnemonic: instr.mnemonic().map(str::to_string),
                    text: format_instruction(instr),
                })
            })
            .collect())
    }

    /// The built-in sample program image
    pub fn sample_program() -> Vec<u8> {
        SAMPLE_PROGRAM.to_vec()
    }
}
