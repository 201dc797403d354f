//! The `bin2hex` binary: convert a binary file into its hexadecimal text form.

use abikit_common::{errors::FsPathError, fs};
use alloy_primitives::hex;
use clap::{Parser, ValueHint};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Convert a binary file to a hexadecimal text file.
#[derive(Parser)]
#[command(name = "bin2hex", version)]
pub struct Bin2HexArgs {
    /// Path to the input binary file.
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Path to the output hexadecimal file.
    #[arg(value_hint = ValueHint::FilePath)]
    output: PathBuf,
}

fn main() {
    abikit_cli::handler::install();
    abikit_cli::utils::subscriber();
    let args = Bin2HexArgs::parse();

    // File access failures are reported without failing the process.
    match convert(&args.input, &args.output) {
        Ok(()) => println!(
            "Successfully converted {} to {}",
            args.input.display(),
            args.output.display()
        ),
        Err(err) => match err.kind() {
            ErrorKind::NotFound => println!("Error: file {} not found", err.path().display()),
            ErrorKind::PermissionDenied => println!(
                "Error: no permission to read {} or write to {}",
                args.input.display(),
                args.output.display()
            ),
            _ => println!("An unknown error occurred: {err}"),
        },
    }
}

/// Reads all of `input` and writes its lowercase hex representation, two
/// characters per byte with no prefix, to `output`.
fn convert(input: &Path, output: &Path) -> Result<(), FsPathError> {
    let data = fs::read(input)?;
    fs::write(output, hex::encode(data))
}
