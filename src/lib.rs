//! # rename
//!
//! Batch file renamer: a regular expression is applied to every filename in a
//! directory and each match is replaced by a template that may reference
//! capture groups (`$1`, `$2`, ...).
//!
//! A pass enumerates every regular file first, sorts them by path, and only
//! then computes and applies renames, one file at a time. A file never moves
//! out of its own directory.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let summary = rename::rename(r"file_(\d+)\.txt", "File_$1.txt")
//!     .path("/path/to/directory")
//!     .run()?;
//!
//! println!("renamed {} of {} files", summary.stats.renamed, summary.stats.files);
//! # Ok::<(), rename::RenameError>(())
//! ```
//!
//! # Custom Sources
//!
//! Implement [`Source`] to feed entries from somewhere other than a plain
//! directory walk, and hand it to [`RenameBuilder::source`].

#![forbid(unsafe_code)]

pub mod cli;
pub mod engine;

mod builder;
mod entry;
mod error;
mod plan;
mod results;
mod source;
mod substitution;
mod template;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::RenameBuilder;
pub use cli::{parse_args, Invocation};
pub use entry::{Entry, EntryKind};
pub use error::RenameError;
pub use plan::{display, RenamePlan};
pub use results::{RunStats, Summary};
pub use source::DirectorySource;
pub use substitution::Substitution;
pub use template::{Template, TemplatePart};
pub use traits::{Source, Transform};

/// Prefix for every diagnostic written to the error stream.
pub const ERROR_PREFIX: &str = "rename: ";

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`RenameBuilder`] that replaces `pattern` with `replacement`
/// in every filename.
///
/// # Example
///
/// ```rust
/// let dir = tempfile::tempdir().unwrap();
/// std::fs::write(dir.path().join("file_42.txt"), "").unwrap();
///
/// let mut out = Vec::new();
/// let summary = rename::rename(r"file_(\d+)\.txt", "File_$1.txt")
///     .path(dir.path())
///     .run_with(&mut out, &mut std::io::sink())
///     .unwrap();
///
/// assert_eq!(summary.stats.renamed, 1);
/// assert_eq!(String::from_utf8(out).unwrap(), "file_42.txt -> File_42.txt\n");
/// assert!(dir.path().join("File_42.txt").exists());
/// ```
pub fn rename(pattern: impl Into<String>, replacement: impl Into<String>) -> RenameBuilder {
    RenameBuilder::new(pattern, replacement)
}
