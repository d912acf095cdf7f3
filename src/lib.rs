//! # denest
//!
//! Recursive extraction of nested archives.
//!
//! Given a file, `denest` unpacks it next to itself, then walks the
//! unpacked output and extracts every archive it finds there, descending
//! until no archives remain. Given a directory, it does this for every
//! archive anywhere under it. Intended for unpacking collected log
//! bundles, where archives routinely contain further archives.
//!
//! ## Recognized formats
//!
//! Dispatch is by file extension only (case-insensitive, no content
//! sniffing), evaluated in order:
//!
//! | Extension            | Treated as                     |
//! |----------------------|--------------------------------|
//! | `.tar.gz`, `.tgz`    | gzip-compressed tar            |
//! | `.gz`                | raw gzip (single file)         |
//! | `.tar`               | uncompressed tar               |
//! | `.zip`               | zip archive                    |
//! | anything else        | not an archive; nothing happens |
//!
//! ## Target naming
//!
//! Each archive unpacks into its own name with the last extension
//! stripped: `logs.zip` into `logs/`, `logs.tgz` into `logs/`, and
//! `logs.tar.gz` into `logs.tar/` (only the outermost extension is
//! removed). A raw gzip
//! `app.log.gz` decompresses to the single file `app.log`, and the
//! compressed source is deleted once decompressed.
//!
//! ## Re-runs
//!
//! Extracting into a target that already exists is treated as
//! already-done rather than an error, so an interrupted run can simply be
//! repeated.
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let result = denest::extract(Path::new("bundle.tar.gz"), false)?;
//! println!("unpacked into {}", result.target.display());
//! for nested in &result.nested {
//!     println!("  nested archive unpacked into {}", nested.target.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod extract;
pub mod extractor;
pub mod walk;

pub use extract::{extract, Extraction};
pub use extractor::{find_extractor, is_archive, Extractor};
pub use walk::walk_files;
