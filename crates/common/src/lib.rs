//! Common utilities shared by the abikit command-line tools.

#![warn(missing_docs, unused_crate_dependencies)]

#[macro_use]
extern crate tracing;

pub mod abi;
pub mod errors;
pub mod fs;
