//! Recursive extraction over the file system

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::extractor::{find_extractor, is_archive};
use crate::walk::walk_files;

/// Audit tree of one extraction: the target it produced and one node per
/// nested archive found (and extracted) underneath it, in walk order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Directory the archive unpacked into (a plain file for raw gzip)
    pub target: PathBuf,
    /// Results for archives discovered inside `target`
    pub nested: Vec<Extraction>,
}

/// Extract `path` and every archive found in its output, recursively.
///
/// The target is `path` with its last extension removed (`a.tar.gz`
/// unpacks into `a.tar`, `a.zip` into `a`). After unpacking, the target
/// tree is walked and each discovered archive is extracted the same way.
/// With `purge`, each original archive is deleted once its extraction
/// (including everything nested) has completed; raw gzip sources are
/// deleted unconditionally as part of decompression.
///
/// A destination-already-exists failure is treated as already-done and the
/// walk proceeds, so re-running over partially extracted state is safe.
/// Any other failure aborts the recursion.
///
/// Recursion depth equals archive nesting depth. There is no cycle guard:
/// an archive that extracts a copy of itself recurses indefinitely.
pub fn extract(path: &Path, purge: bool) -> Result<Extraction> {
    let target = path.with_extension("");
    let mut extractor = find_extractor(path)?;

    match extractor.extract_all(&target) {
        Ok(()) => {}
        // An earlier run already produced this target
        Err(err) if is_dest_exists(&err) => {}
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to extract: {}", path.display()))
        }
    }

    let mut nested = Vec::new();
    for file in walk_files(&target) {
        if is_archive(&file) {
            nested.push(extract(&file, purge)?);
        }
    }

    if purge && path.is_file() {
        fs::remove_file(path)
            .with_context(|| format!("Failed to delete archive: {}", path.display()))?;
    }

    Ok(Extraction { target, nested })
}

fn is_dest_exists(err: &anyhow::Error) -> bool {
    if let Some(io) = err.downcast_ref::<io::Error>() {
        return io.kind() == io::ErrorKind::AlreadyExists;
    }
    if let Some(zip::result::ZipError::Io(io)) = err.downcast_ref::<zip::result::ZipError>() {
        return io.kind() == io::ErrorKind::AlreadyExists;
    }
    false
}
