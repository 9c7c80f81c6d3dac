//! Command-line argument parsing and help for dr.
//!
//! When invoked with no args/flags, dr opens the TUI session on the current
//! directory. The parsed flags become an immutable [Config] handed to the
//! core; nothing downstream reads `std::env::args` again.

use crate::config::Config;

use std::path::{Path, PathBuf};

/// What the process should do after argument handling.
pub enum CliAction {
    Run(CliArgs),
    /// Informational flag handled; exit successfully.
    Exit,
    /// Bad usage reported; exit non-zero.
    Fail,
}

/// Parsed command line: the target path plus the run flags.
#[derive(Debug, Default)]
pub struct CliArgs {
    path: Option<String>,
    verbose: bool,
    quiet: bool,
    list: bool,
}

impl CliArgs {
    /// Target directory, defaulting to the current directory.
    pub fn resolved_path(&self) -> PathBuf {
        self.path
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn to_config(&self) -> Config {
        Config::new(self.verbose, self.quiet, self.list)
    }
}

pub fn handle_args() -> CliAction {
    parse_args(std::env::args().skip(1))
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> CliAction {
    let mut parsed = CliArgs::default();

    for arg in args {
        match arg.as_str() {
            "-v" | "--version" => {
                print_version();
                return CliAction::Exit;
            }
            "-h" | "--help" => {
                print_help();
                return CliAction::Exit;
            }
            "-u" | "--usage" => {
                print_usage();
                return CliAction::Exit;
            }
            "-V" | "--verbose" => parsed.verbose = true,
            "-q" | "--quiet" => parsed.quiet = true,
            "-l" | "--list" => parsed.list = true,
            other if !other.starts_with('-') && !other.trim().is_empty() => {
                if parsed.path.is_some() {
                    eprintln!("Error: dr accepts only one PATH argument.");
                    eprintln!("Usage: dr [OPTION...] [PATH]");
                    return CliAction::Fail;
                }
                parsed.path = Some(other.to_string());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Try --help for available options");
                return CliAction::Fail;
            }
        }
    }

    CliAction::Run(parsed)
}

/// Basename of `argv[0]`, used to prefix the failure line.
pub fn program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("dr"))
}

fn print_version() {
    println!("dr {}", env!("CARGO_PKG_VERSION"));
}

fn print_usage() {
    println!("Usage: dr [-hlquvV] [--help] [--list] [--quiet] [--usage] [--verbose] [--version] [PATH]");
}

fn print_help() {
    println!(
        r#"dr - list directory content in a tui

USAGE:
  dr [OPTION...] [PATH]

PATH:
  Directory to open (defaults to the current directory)

OPTIONS:
  -l, --list              Print the listing and exit instead of opening the TUI
  -V, --verbose           Print a banner line before the listing
  -q, --quiet             Suppress the banner (wins over --verbose)
  -u, --usage             Show a short usage message
  -h, --help              Print help information
  -v, --version           Display the current installed version of dr

KEYS (inside the TUI):
  up, k                   Move the cursor up
  down, j                 Move the cursor down
  q, Q, esc               Quit
"#
    );
}
