//! The `abi-encode` binary: ABI-encode a function call into transaction calldata.

use abikit_common::abi::encode_call;
use clap::Parser;
use eyre::Result;

const AFTER_HELP: &str = "Examples:
  abi-encode \"transfer(address,uint256)\" 0x1122334455667788990011223344556677889900 100
  abi-encode \"balanceOf(address)\" 0x1122334455667788990011223344556677889900";

/// Encode a function signature and its arguments into transaction calldata.
#[derive(Parser)]
#[command(name = "abi-encode", version, after_help = AFTER_HELP)]
pub struct AbiEncodeArgs {
    /// The function signature in the format `<name>(<in-types>)`.
    sig: String,

    /// The arguments to encode, one per declared parameter type.
    #[arg(allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    abikit_cli::handler::install();
    abikit_cli::utils::subscriber();
    let args = AbiEncodeArgs::parse();
    println!("{}", encode_call(&args.sig, &args.args)?);
    Ok(())
}
