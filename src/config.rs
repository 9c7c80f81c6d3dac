//! Runtime configuration for dr.
//!
//! An immutable value built once from the parsed command line and passed by
//! reference into the entry points. There is no configuration file.

/// Run settings resolved by the CLI layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    verbose: bool,
    quiet: bool,
    list: bool,
}

impl Config {
    pub fn new(verbose: bool, quiet: bool, list: bool) -> Self {
        Config {
            verbose,
            quiet,
            list,
        }
    }

    /// Non-interactive listing instead of the TUI session.
    #[inline]
    pub fn list_mode(&self) -> bool {
        self.list
    }

    /// Whether the banner line prints. Quiet wins over verbose, so the two
    /// flags are mutually exclusive in effect.
    #[inline]
    pub fn banner(&self) -> bool {
        self.verbose && !self.quiet
    }
}
