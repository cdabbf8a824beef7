use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::engine::{run, EngineOptions, WalkConfig};
use crate::error::RenameError;
use crate::results::Summary;
use crate::source::DirectorySource;
use crate::substitution::Substitution;
use crate::traits::Source;

// ---------------------------------------------------------------------------
// RenameBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a rename pass.
///
/// Created via [`rename::rename()`](crate::rename). Configure with chained
/// builder methods, then call [`run()`](RenameBuilder::run) to execute.
///
/// # Example
///
/// ```rust,no_run
/// let summary = rename::rename(r"file_(\d+)\.txt", "File_$1.txt")
///     .path("/path/to/directory")
///     .recursive(true)
///     .dry_run(true)
///     .run()?;
/// # Ok::<(), rename::RenameError>(())
/// ```
pub struct RenameBuilder {
    pattern:     String,
    replacement: String,
    path:        Option<PathBuf>,
    source:      Option<Box<dyn Source>>,
    dry_run:     bool,
    recursive:   bool,
    quiet:       bool,
}

impl RenameBuilder {
    pub(crate) fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern:     pattern.into(),
            replacement: replacement.into(),
            path:        None,
            source:      None,
            dry_run:     false,
            recursive:   false,
            quiet:       false,
        }
    }

    // ── Source ────────────────────────────────────────────────────────────

    /// Directory to rename in. Used verbatim; defaults to the current
    /// working directory.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Enumerate from a custom [`Source`] instead of a directory on disk.
    /// Takes precedence over [`path()`](Self::path).
    pub fn source(mut self, s: impl Source + 'static) -> Self {
        self.source = Some(Box::new(s));
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Report what would be renamed without touching the filesystem.
    pub fn dry_run(mut self, yes: bool) -> Self {
        self.dry_run = yes;
        self
    }

    /// Descend into subdirectories. Files are still renamed within their
    /// own directory, and report lines show absolute paths.
    pub fn recursive(mut self, yes: bool) -> Self {
        self.recursive = yes;
        self
    }

    /// Suppress report lines. Failed renames are still written to the error
    /// stream.
    pub fn quiet(mut self, yes: bool) -> Self {
        self.quiet = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the pass, reporting to stdout and stderr.
    ///
    /// # Errors
    ///
    /// See [`run_with()`](Self::run_with).
    pub fn run(self) -> Result<Summary, RenameError> {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        self.run_with(&mut stdout.lock(), &mut stderr.lock())
    }

    /// Execute the pass, reporting to the given writers.
    ///
    /// # Errors
    ///
    /// Returns `Err` for fatal conditions, in the order they are checked:
    /// malformed pattern, unresolvable current directory, enumeration
    /// failure, substitution failure. Failed renames of single files are
    /// not errors; they are written to `err` and collected into
    /// [`Summary::failures`].
    pub fn run_with(self, out: &mut dyn Write, err: &mut dyn Write) -> Result<Summary, RenameError> {
        let substitution = Substitution::new(&self.pattern, &self.replacement)?;

        let source: Box<dyn Source> = match self.source {
            Some(s) => s,
            None => {
                let root = match self.path {
                    Some(p) => p,
                    None => std::env::current_dir()
                        .map_err(|source| RenameError::PathResolution { source })?,
                };
                debug!(root = %root.display(), recursive = self.recursive, "resolved base path");
                Box::new(DirectorySource::new(root))
            }
        };

        let opts = EngineOptions {
            config: WalkConfig {
                recursive: self.recursive,
            },
            dry_run: self.dry_run,
            quiet:   self.quiet,
        };

        run(source.as_ref(), &substitution, opts, out, err)
    }
}
