//! Directory listing and entry classification for dr.
//!
//! Provides the [Entry] struct and its [EntryKind] classification, the
//! ordered [Snapshot] produced by one [load_dir] call, and the [LoadError]
//! reported when the target directory cannot be opened or listed.

use crate::core::order::entry_order;

use thiserror::Error;
use unicode_width::UnicodeWidthStr;

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Closed classification of a directory entry.
///
/// Only the kinds the browser treats differently are distinguished; regular
/// files and every unmapped filesystem type fall under [EntryKind::Other].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Symlink,
    Socket,
    Other,
}

impl EntryKind {
    /// Maps a raw filesystem type to its semantic kind.
    ///
    /// A symlink is classified from its own type, never its target, so a
    /// link to a directory still sorts with the non-directories.
    pub fn classify(ft: &fs::FileType) -> Self {
        if ft.is_dir() {
            EntryKind::Directory
        } else if ft.is_symlink() {
            EntryKind::Symlink
        } else if is_socket(ft) {
            EntryKind::Socket
        } else {
            EntryKind::Other
        }
    }
}

#[cfg(unix)]
fn is_socket(ft: &fs::FileType) -> bool {
    use std::os::unix::fs::FileTypeExt;
    ft.is_socket()
}

#[cfg(not(unix))]
fn is_socket(_ft: &fs::FileType) -> bool {
    false
}

/// One visible filesystem object within a listed directory.
///
/// Name, kind and hidden-ness are fixed at classification time. The
/// lowercase form of the name is cached once for collation.
#[derive(Debug, Clone)]
pub struct Entry {
    name: Box<OsStr>,
    lowercase: Box<str>,
    kind: EntryKind,
    hidden: bool,
}

impl Entry {
    pub(crate) fn new(name: OsString, kind: EntryKind) -> Self {
        let lossy = name.to_string_lossy();
        let hidden = lossy.starts_with('.');
        let lowercase = lossy.to_lowercase().into_boxed_str();
        Entry {
            name: name.into_boxed_os_str(),
            lowercase,
            kind,
            hidden,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    /// Display width of the name in terminal columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.name_str().width()
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Cached lowercase form of the name, used as the collation key.
    #[inline]
    pub fn collation_key(&self) -> &str {
        &self.lowercase
    }
}

/// The ordered result of one directory load.
///
/// Never contains the `.`/`..` pseudo-entries, and its ordering is
/// established on construction (see [crate::core::order::entry_order]).
#[derive(Debug, Default)]
pub struct Snapshot {
    entries: Vec<Entry>,
}

impl Snapshot {
    pub(crate) fn from_entries(mut entries: Vec<Entry>) -> Self {
        entries.sort_by(entry_order);
        Snapshot { entries }
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Entry> {
        self.entries.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

/// Failure to open or list the target directory.
///
/// Distinct from an empty directory, which loads to an empty [Snapshot].
/// Carries the underlying OS error so the caller can report its code and
/// message.
#[derive(Debug, Error)]
#[error("cannot open/list directory {}: {source}", .path.display())]
pub struct LoadError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl LoadError {
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw OS error code, or 1 when the platform reported none.
    #[inline]
    pub fn os_code(&self) -> i32 {
        self.source.raw_os_error().unwrap_or(1)
    }

    /// The system's description of the underlying failure.
    #[inline]
    pub fn os_message(&self) -> String {
        self.source.to_string()
    }
}

/// The self/parent pseudo-entries are only useful on a command line, not in
/// a browsable listing, so the loader drops them before classification.
fn is_pseudo_entry(name: &OsStr) -> bool {
    name == OsStr::new(".") || name == OsStr::new("..")
}

/// Reads, classifies and orders the visible entries of `path`.
///
/// All-or-nothing: an unopenable path yields a [LoadError] and no partial
/// snapshot. Entries that vanish between listing and typing are skipped.
///
/// # Returns
/// The ordered [Snapshot], empty if the directory holds no visible entries.
pub fn load_dir(path: &Path) -> Result<Snapshot, LoadError> {
    let read = fs::read_dir(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry in read {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let name = entry.file_name();
        if is_pseudo_entry(&name) {
            continue;
        }

        let ft = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };

        entries.push(Entry::new(name, EntryKind::classify(&ft)));
    }

    Ok(Snapshot::from_entries(entries))
}
