//! Command line front end for the `xfs_extent` binary.

use crate::error::XfsError;
use crate::ext::io_ext::RecordReadExt;
use crate::extent_fields::ExtentFields;
use crate::utility::hex_decoder::HexDecoder;
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

/// Prints the fields of packed XFS extent records.
///
/// With no arguments, one line of hex is read from stdin.
#[derive(Parser, Debug)]
#[command(name = "xfs_extent", version, about, long_about = None)]
pub struct Args {
    /// Binary file of packed 16-byte extent records
    #[arg(long, value_name = "FILE", conflicts_with = "hex")]
    pub raw: Option<PathBuf>,

    /// Record as hex digits; whitespace and argument boundaries are ignored
    pub hex: Vec<String>,
}

/// Decodes the records selected by `args` and writes one report per record to `out`.
///
/// `input` is only read when neither `--raw` nor hex arguments are given.
pub fn run<R: BufRead, W: Write>(
    args: &Args,
    mut input: R,
    out: &mut W,
) -> Result<(), XfsError> {
    if let Some(path) = &args.raw {
        let mut reader = BufReader::new(File::open(path)?);
        for (index, record) in reader.read_records()?.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", ExtentFields::decode(record))?;
        }
        return Ok(());
    }

    let text = if args.hex.is_empty() {
        let mut line = String::new();
        input.read_line(&mut line)?;
        line
    } else {
        args.hex.join(" ")
    };
    let record = HexDecoder::new(text).decode_record()?;
    writeln!(out, "{}", ExtentFields::decode(&record))?;
    Ok(())
}
