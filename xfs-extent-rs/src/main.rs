//! # xfs_extent
//!
//! Prints the fields of packed XFS extent records.
//!
//! ## Usage
//! ```sh
//! echo "7f ff ff ff ff ff ff ff ff ff ff ff ff ff ff ff" | xfs_extent
//! xfs_extent 80000000 00000000 00000000 00000000
//! xfs_extent --raw extents.bin
//! ```
use clap::Parser;
use std::io;
use std::process::ExitCode;
use xfs_extent::cli::{self, Args};

fn main() -> ExitCode {
    let args = Args::parse();
    let stdout = io::stdout();
    match cli::run(&args, io::stdin().lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
