//! Shared command-line plumbing for the abikit binaries.

#![warn(missing_docs, unused_crate_dependencies)]

#[macro_use]
extern crate tracing;

pub mod handler;
pub mod utils;
