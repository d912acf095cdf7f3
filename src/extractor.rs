//! Archive classification and format-specific extraction

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::ffi::OsStr;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// An opened archive, ready to unpack into a target.
///
/// One variant per recognized format. Classification and opening are a
/// single step: constructing a variant means the underlying file handle
/// is already held, and it is released when the value is dropped.
pub enum Extractor {
    /// Gzip-compressed tar stream (`.tar.gz`, `.tgz`)
    GzipTar(tar::Archive<GzDecoder<File>>),
    /// Single gzip-compressed file, not a tar container (`.gz`)
    RawGzip {
        source: PathBuf,
        /// Consumed by the first extraction
        reader: Option<GzDecoder<File>>,
    },
    /// Uncompressed tar stream (`.tar`)
    Tar(tar::Archive<File>),
    /// Zip archive (`.zip`)
    Zip(zip::ZipArchive<File>),
    /// Fallback for unrecognized paths; extracting does nothing
    NoOp,
}

impl Extractor {
    /// Unpack the full archive contents into `target`.
    ///
    /// For tar and zip variants `target` becomes a directory. For raw gzip
    /// the decompressed stream is written to a file named exactly `target`,
    /// replacing the compressed source, which is deleted.
    pub fn extract_all(&mut self, target: &Path) -> Result<()> {
        match self {
            Extractor::GzipTar(archive) => archive.unpack(target)?,
            Extractor::Tar(archive) => archive.unpack(target)?,
            Extractor::Zip(archive) => archive.extract(target)?,
            Extractor::RawGzip { source, reader } => {
                let Some(mut reader) = reader.take() else {
                    return Ok(());
                };
                let mut out = File::create(target)?;
                io::copy(&mut reader, &mut out)?;
                drop(reader);
                std::fs::remove_file(source)?;
            }
            Extractor::NoOp => {}
        }
        Ok(())
    }

    /// Short format tag, e.g. for verbose output
    pub fn format_name(&self) -> &'static str {
        match self {
            Extractor::GzipTar(_) => "tar.gz",
            Extractor::RawGzip { .. } => "gzip",
            Extractor::Tar(_) => "tar",
            Extractor::Zip(_) => "zip",
            Extractor::NoOp => "none",
        }
    }
}

/// Returns true if `path` is an existing regular file whose last extension
/// marks it as an archive (`.gz`, `.tar`, `.zip`, `.tgz`, any case).
///
/// Directories and dangling symlinks are never archives. Note that only
/// the last extension is consulted, so `a.tar.gz` qualifies via `.gz`.
pub fn is_archive(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let ext = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);
    matches!(ext.as_deref(), Some("gz" | "tar" | "zip" | "tgz"))
}

/// Classify `path` by extension and open it as an archive.
///
/// The dispatch rule is ordered: `.tar.gz`/`.tgz` before plain `.gz`, so a
/// compressed tar is never treated as a raw gzip. Matching is done on the
/// lowercased path string; the original-case path is used for I/O.
/// Unrecognized paths resolve to [`Extractor::NoOp`] rather than an error.
pub fn find_extractor(path: &Path) -> Result<Extractor> {
    let name = path.to_string_lossy().to_ascii_lowercase();

    let open = || {
        File::open(path).with_context(|| format!("Failed to open archive: {}", path.display()))
    };

    let extractor = if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        Extractor::GzipTar(tar::Archive::new(GzDecoder::new(open()?)))
    } else if name.ends_with(".gz") {
        Extractor::RawGzip {
            source: path.to_path_buf(),
            reader: Some(GzDecoder::new(open()?)),
        }
    } else if name.ends_with(".tar") {
        Extractor::Tar(tar::Archive::new(open()?))
    } else if name.ends_with(".zip") {
        Extractor::Zip(
            zip::ZipArchive::new(open()?)
                .with_context(|| format!("Failed to read zip archive: {}", path.display()))?,
        )
    } else {
        Extractor::NoOp
    };

    Ok(extractor)
}
