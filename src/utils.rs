//! Miscellaneous utilities for dr.
//!
//! Holds the [cli] submodule, which parses the command line into a
//! [CliAction] and prints help/version/usage text.

pub mod cli;

pub use cli::{CliAction, CliArgs, handle_args, program_name};
