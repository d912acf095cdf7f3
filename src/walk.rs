//! Directory traversal

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazily yield every file at every depth under `root`, in traversal
/// order. Directory entries are skipped, as are entries that cannot be
/// read. A `root` that is a plain file or does not exist yields nothing.
/// Call again for a fresh walk.
pub fn walk_files(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;

    #[test]
    fn test_walk_yields_files_at_every_depth() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("top.txt"), b"").unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/mid.txt"), b"").unwrap();
        fs::write(dir.path().join("a/b/deep.txt"), b"").unwrap();

        let found: BTreeSet<PathBuf> = walk_files(dir.path()).collect();
        let expected: BTreeSet<PathBuf> = [
            dir.path().join("top.txt"),
            dir.path().join("a/mid.txt"),
            dir.path().join("a/b/deep.txt"),
        ]
        .into_iter()
        .collect();

        assert_eq!(found, expected);
    }

    #[test]
    fn test_walk_excludes_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("only/dirs/here")).unwrap();

        assert_eq!(walk_files(dir.path()).count(), 0);
    }

    #[test]
    fn test_walk_file_root_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("single.txt");
        fs::write(&file, b"").unwrap();

        assert_eq!(walk_files(&file).count(), 0);
    }

    #[test]
    fn test_walk_missing_root_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(walk_files(&dir.path().join("absent")).count(), 0);
    }

    #[test]
    fn test_walk_restarts_on_recall() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("f.txt"), b"").unwrap();

        assert_eq!(walk_files(dir.path()).count(), 1);
        assert_eq!(walk_files(dir.path()).count(), 1);
    }
}
