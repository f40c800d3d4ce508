//! Formatting functions for disassembled instructions

use crate::disassembler::Instruction;

/// Column width of the instruction text in listings
const LISTING_TEXT_WIDTH: usize = 16;

/// Format a single instruction as assembly text
///
/// Registers are printed in decimal, immediates and displacements as two
/// uppercase hex digits. Unrecognized words print as `Unknown 0xWWWW`.
///
/// # Arguments
///
/// * `instr` - The instruction to format
///
/// # Returns
///
/// A string containing the formatted assembly instruction, without a newline
pub fn format_instruction(instr: &Instruction) -> String {
    let Some(mnemonic) = instr.mnemonic() else {
        return format!("Unknown 0x{:04X}", instr.word);
    };

    let operand = format_operands(instr);

    if operand.is_empty() {
        mnemonic.to_string()
    } else {
        format!("{} {}", mnemonic, operand)
    }
}

/// Format one listing line: address, raw word, instruction text and description
pub fn format_listing_line(instr: &Instruction) -> String {
    let text = format_instruction(instr);

    match instr.description() {
        Some(description) => format!(
            "{:04X}: {:04X}  {:<width$}{}",
            instr.address,
            instr.word,
            text,
            description,
            width = LISTING_TEXT_WIDTH
        ),
        None => format!("{:04X}: {:04X}  {}", instr.address, instr.word, text),
    }
}

/// Join operands with commas
fn format_operands(instr: &Instruction) -> String {
    instr
        .operands
        .iter()
        .map(|operand| operand.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
