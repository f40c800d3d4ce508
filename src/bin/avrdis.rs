//! Command-line AVR disassembler.
//!
//! Reads a raw little-endian program image from a file or stdin (or uses the
//! built-in sample program) and prints one line of assembly per word.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use libavr::disassembler::formatter::{format_instruction, format_listing_line};
use libavr::{disassemble, DisassemblyOptions, TrailingBytePolicy, SAMPLE_PROGRAM};
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Disassemble an AVR program image")]
struct Opts {
    /// Raw program image; `-` reads stdin. Defaults to the built-in sample program
    input: Option<PathBuf>,

    /// Byte address of the first word (hex with 0x prefix, or decimal)
    #[arg(long, value_parser = parse_address, default_value = "0")]
    start_address: u16,

    /// Print address, raw word and description columns
    #[arg(long)]
    listing: bool,

    /// Drop an unpaired final byte instead of failing
    #[arg(long)]
    ignore_trailing_byte: bool,
}

fn parse_address(s: &str) -> Result<u16> {
    let t = s.trim();
    let parsed = if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        u16::from_str_radix(hex, 16)
    } else {
        t.parse::<u16>()
    };
    parsed.map_err(|e| anyhow!("bad address {:?}: {}", s, e))
}

fn read_image(input: Option<&PathBuf>) -> Result<Vec<u8>> {
    match input {
        None => Ok(SAMPLE_PROGRAM.to_vec()),
        Some(path) if path.as_os_str() == "-" => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("reading program image from stdin")?;
            Ok(bytes)
        }
        Some(path) => fs::read(path).with_context(|| format!("reading {}", path.display())),
    }
}

/// Disassemble the selected image and write one line per word to `out`
fn run<W: Write>(opts: &Opts, out: &mut W) -> Result<()> {
    let image = read_image(opts.input.as_ref())?;
    log::info!("loaded {} byte program image", image.len());

    let options = DisassemblyOptions {
        start_address: opts.start_address,
        trailing_byte: if opts.ignore_trailing_byte {
            TrailingBytePolicy::Ignore
        } else {
            TrailingBytePolicy::Reject
        },
    };
    let instructions = disassemble(&image, options)?;

    for instr in &instructions {
        let line = if opts.listing {
            format_listing_line(instr)
        } else {
            format_instruction(instr)
        };
        writeln!(out, "{}", line).context("writing disassembly")?;
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let opts = Opts::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&opts, &mut out)?;
    out.flush().context("writing disassembly")?;

    Ok(())
}
