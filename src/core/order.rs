//! Entry ordering policy for dr.
//!
//! The listing follows a strict sorting of:
//! hidden directory > regular directory > hidden files > regular files,
//! with names compared by collation inside each group.

use crate::core::dir::Entry;

use std::cmp::Ordering;

/// Total-order comparator over classified entries.
///
/// Any directory sorts before any non-directory, regardless of name or
/// hidden-ness. Within the directory and non-directory groups, hidden
/// entries sort before visible ones, then [collate] decides.
pub fn entry_order(a: &Entry, b: &Entry) -> Ordering {
    match (a.is_dir(), b.is_dir()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => match (a.is_hidden(), b.is_hidden()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => collate(a, b),
        },
    }
}

/// Name comparison used inside a group: case-insensitive over the cached
/// lowercase key. Distinct names can share a lowercase form, so the raw
/// name is the final tie-break, keeping the order antisymmetric.
pub fn collate(a: &Entry, b: &Entry) -> Ordering {
    a.collation_key()
        .cmp(b.collation_key())
        .then_with(|| a.name().cmp(b.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dir::EntryKind;
    use rand::seq::SliceRandom;
    use std::ffi::OsString;

    fn dir(name: &str) -> Entry {
        Entry::new(OsString::from(name), EntryKind::Directory)
    }

    fn file(name: &str) -> Entry {
        Entry::new(OsString::from(name), EntryKind::Other)
    }

    #[test]
    fn directory_beats_non_directory() {
        // Even when the file name collates earlier.
        let hidden_dir = dir(".zzz");
        let early_file = file("aaa");
        assert_eq!(entry_order(&hidden_dir, &early_file), Ordering::Less);
        assert_eq!(entry_order(&early_file, &hidden_dir), Ordering::Greater);
    }

    #[test]
    fn hidden_first_within_group() {
        let hidden = file(".config");
        let visible = file("readme");
        assert_eq!(entry_order(&hidden, &visible), Ordering::Less);

        let hidden_dir = dir(".cache");
        let visible_dir = dir("bin");
        assert_eq!(entry_order(&hidden_dir, &visible_dir), Ordering::Less);
    }

    #[test]
    fn collation_is_case_insensitive() {
        let upper = file("README");
        let lower = file("readme");
        let other = file("Makefile");
        assert_eq!(entry_order(&other, &upper), Ordering::Less);
        assert_eq!(entry_order(&other, &lower), Ordering::Less);
        // Equal lowercase keys fall back to the raw name.
        assert_eq!(entry_order(&upper, &lower), upper.name().cmp(lower.name()));
    }

    #[test]
    fn symlinks_and_sockets_sort_as_files() {
        let link = Entry::new(OsString::from("link"), EntryKind::Symlink);
        let sock = Entry::new(OsString::from("sock"), EntryKind::Socket);
        let directory = dir("zdir");
        assert_eq!(entry_order(&directory, &link), Ordering::Less);
        assert_eq!(entry_order(&directory, &sock), Ordering::Less);
    }

    fn sample_entries() -> Vec<Entry> {
        vec![
            dir(".git"),
            dir(".cache"),
            dir("src"),
            dir("Target"),
            file(".gitignore"),
            file(".env"),
            file("Cargo.toml"),
            file("README"),
            file("readme"),
            file("main.rs"),
            Entry::new(OsString::from("link"), EntryKind::Symlink),
            Entry::new(OsString::from(".sock"), EntryKind::Socket),
        ]
    }

    #[test]
    fn sort_is_deterministic_across_shuffles() {
        let mut reference = sample_entries();
        reference.sort_by(entry_order);
        let reference_names: Vec<_> = reference.iter().map(|e| e.name().to_os_string()).collect();

        let mut rng = rand::rng();
        for _ in 0..50 {
            let mut shuffled = sample_entries();
            shuffled.shuffle(&mut rng);
            shuffled.sort_by(entry_order);
            let names: Vec<_> = shuffled.iter().map(|e| e.name().to_os_string()).collect();
            assert_eq!(
                names, reference_names,
                "sorting must yield one permutation regardless of input order"
            );
        }
    }

    #[test]
    fn comparator_is_antisymmetric_and_transitive() {
        let entries = sample_entries();

        for a in &entries {
            assert_eq!(entry_order(a, a), Ordering::Equal);
            for b in &entries {
                assert_eq!(
                    entry_order(a, b),
                    entry_order(b, a).reverse(),
                    "antisymmetry violated for {:?} / {:?}",
                    a.name(),
                    b.name()
                );
                for c in &entries {
                    if entry_order(a, b) == Ordering::Less && entry_order(b, c) == Ordering::Less {
                        assert_eq!(
                            entry_order(a, c),
                            Ordering::Less,
                            "transitivity violated for {:?} < {:?} < {:?}",
                            a.name(),
                            b.name(),
                            c.name()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn full_listing_order() {
        let mut entries = sample_entries();
        entries.sort_by(entry_order);
        let names: Vec<String> = entries.iter().map(|e| e.name_str().into_owned()).collect();
        assert_eq!(
            names,
            vec![
                ".cache",
                ".git",
                "src",
                "Target",
                ".env",
                ".gitignore",
                ".sock",
                "Cargo.toml",
                "link",
                "main.rs",
                "README",
                "readme",
            ]
        );
    }
}
