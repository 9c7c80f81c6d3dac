//! Cursor state over a directory snapshot.
//!
//! The snapshot is fixed for the life of the session; only the selection
//! index moves, and only in response to input.

use crate::core::{Entry, Snapshot};

/// Holds the snapshot and the selection cursor for the session.
pub struct NavState {
    snapshot: Snapshot,
    selected: usize,
}

impl NavState {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            selected: 0,
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[inline]
    pub fn selected_idx(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.snapshot.get(self.selected)
    }

    /// Moves the selection up by one entry, clamped at the first.
    /// Returns `true` if the selection moved.
    pub fn move_up(&mut self) -> bool {
        if self.selected > 0 {
            self.selected -= 1;
            true
        } else {
            false
        }
    }

    /// Moves the selection down by one entry, clamped at the last.
    /// Returns `true` if the selection moved.
    pub fn move_down(&mut self) -> bool {
        if self.selected + 1 < self.snapshot.len() {
            self.selected += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dir::EntryKind;
    use std::ffi::OsString;

    fn nav_with(count: usize) -> NavState {
        let entries = (0..count)
            .map(|i| Entry::new(OsString::from(format!("file{i:02}")), EntryKind::Other))
            .collect();
        NavState::new(Snapshot::from_entries(entries))
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut nav = nav_with(3);
        assert_eq!(nav.selected_idx(), 0);

        // Past the first entry.
        assert!(!nav.move_up());
        assert_eq!(nav.selected_idx(), 0);

        assert!(nav.move_down());
        assert!(nav.move_down());
        assert_eq!(nav.selected_idx(), 2);

        // Past the last entry, repeatedly.
        for _ in 0..5 {
            assert!(!nav.move_down());
        }
        assert_eq!(nav.selected_idx(), 2);
    }

    #[test]
    fn empty_snapshot_never_moves() {
        let mut nav = nav_with(0);
        assert!(!nav.move_up());
        assert!(!nav.move_down());
        assert_eq!(nav.selected_idx(), 0);
        assert!(nav.selected_entry().is_none());
    }

    #[test]
    fn selected_entry_follows_cursor() {
        let mut nav = nav_with(2);
        assert_eq!(nav.selected_entry().unwrap().name_str(), "file00");
        nav.move_down();
        assert_eq!(nav.selected_entry().unwrap().name_str(), "file01");
    }
}
