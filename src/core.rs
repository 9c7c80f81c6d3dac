//! Core runtime logic for dr.
//!
//! This module contains the non-UI "engine" pieces used by the application:
//! - [dir]: directory listing and entry classification (see [load_dir], [Entry], [Snapshot]).
//! - [order]: the fixed ordering policy applied to every listing.
//! - [terminal]: terminal setup/teardown and the main crossterm/ratatui event loop.
//!
//! Most callers will import [load_dir], [Entry], and [Snapshot] from this module.

pub mod dir;
pub mod order;
pub mod terminal;

pub use dir::{Entry, EntryKind, LoadError, Snapshot, load_dir};
pub use order::{collate, entry_order};
pub use terminal::{TerminalSession, run_terminal};
