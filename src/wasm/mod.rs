//! WebAssembly bindings for the AVR disassembler.
//!
//! This module provides JavaScript-callable interfaces to the disassembler,
//! enabling browser-based inspection of AVR program images.

pub mod api;

pub use api::{AvrDisassembler, DisassemblyLine};
