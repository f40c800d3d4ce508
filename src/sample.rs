//! Built-in demonstration program.
//!
//! A short loop that scans and compares two buffers through the X and Y
//! pointer registers, ending in a NOP.

/// Program image, little-endian words.
pub const SAMPLE_PROGRAM: [u8; 48] = [
    0x00, 0x24, 0xA0, 0xE0, 0xB2, 0xE0, 0x0D, 0x91, 0x00, 0x30, 0xE9, 0xF7, 0x11, 0x97, 0xC0, 0xE0,
    0xD2, 0xE0, 0x09, 0x91, 0x1E, 0x91, 0x01, 0x17, 0x51, 0xF4, 0x0A, 0x2F, 0x0A, 0x95, 0x1C, 0x2F,
    0x01, 0x17, 0xB9, 0xF7, 0x0B, 0x2F, 0x1D, 0x2F, 0x01, 0x17, 0x99, 0xF7, 0x03, 0x94, 0x00, 0x00,
];

/// Expected disassembly of [`SAMPLE_PROGRAM`], one line per word.
pub const SAMPLE_LISTING: [&str; 24] = [
    "CLR R0",
    "LDI R26,0x00",
    "LDI R27,0x02",
    "LD R16,X+",
    "CPI R16,0x00",
    "BRNE PC-0x02",
    "SBIW R26,0x01",
    "LDI R28,0x00",
    "LDI R29,0x02",
    "LD R16,Y+",
    "LD R17,-X",
    "CP R16,R17",
    "BRNE PC+0x0B",
    "MOV R16,R26",
    "DEC R16",
    "MOV R17,R28",
    "CP R16,R17",
    "BRNE PC-0x08",
    "MOV R16,R27",
    "MOV R17,R29",
    "CP R16,R17",
    "BRNE PC-0x0C",
    "INC R0",
    "NOP",
];
