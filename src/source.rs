use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};
use tracing::{trace, warn};

use crate::engine::WalkConfig;
use crate::entry::{Entry, EntryKind};
use crate::error::RenameError;
use crate::traits::Source;

// ---------------------------------------------------------------------------
// DirectorySource
// ---------------------------------------------------------------------------

/// Enumerates a directory on disk.
///
/// Nothing is filtered by the walker: hidden files, ignore files and VCS
/// directories are all visited. Symlinked directories are not descended.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn check_root(&self) -> Result<(), RenameError> {
        let meta = std::fs::metadata(&self.root).map_err(|source| RenameError::Enumeration {
            path: self.root.clone(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(RenameError::NotADirectory(self.root.clone()));
        }
        Ok(())
    }
}

impl Source for DirectorySource {
    fn walk(&self, config: &WalkConfig) -> Box<dyn Iterator<Item = Result<Entry, RenameError>> + '_> {
        if let Err(e) = self.check_root() {
            return Box::new(std::iter::once(Err(e)));
        }

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(false)
            .ignore(false)
            .parents(false)
            .hidden(false)
            .follow_links(false)
            .same_file_system(false)
            .max_depth(if config.recursive { None } else { Some(1) });

        let walk = builder.build().filter_map(|res| match res {
            // Skip the root itself
            Ok(entry) if entry.depth() == 0 => None,
            Ok(entry) => to_entry(entry).transpose(),
            Err(e) => Some(Err(map_ignore_error(e))),
        });

        Box::new(walk)
    }
}

/// Build an [`Entry`], or `None` for names that cannot be renamed safely.
fn to_entry(entry: DirEntry) -> Result<Option<Entry>, RenameError> {
    let path = entry.path().to_path_buf();

    let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
        warn!(path = %path.display(), "skipping entry with non UTF-8 name");
        return Ok(None);
    };

    let kind = match entry.file_type() {
        Some(ft) if ft.is_symlink() => symlink_target_kind(&path)?,
        Some(ft) => EntryKind::from_file_type(ft),
        None => EntryKind::Other,
    };
    trace!(path = %path.display(), ?kind, "enumerated");

    Ok(Some(Entry {
        path,
        name,
        kind,
        depth: entry.depth(),
    }))
}

/// Classify a symlink by what it points at. Dangling links are `Symlink`,
/// including links through a non-directory such as `file/x`.
fn symlink_target_kind(path: &Path) -> Result<EntryKind, RenameError> {
    use std::io::ErrorKind;

    match std::fs::metadata(path) {
        Ok(meta) => Ok(EntryKind::from_file_type(meta.file_type())),
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            Ok(EntryKind::Symlink)
        }
        Err(source) => Err(RenameError::Enumeration {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ---------------------------------------------------------------------------
// Map ignore::Error to RenameError
// ---------------------------------------------------------------------------

fn map_ignore_error(e: ignore::Error) -> RenameError {
    match e {
        ignore::Error::WithPath { path, err } => match *err {
            ignore::Error::Io(source) => RenameError::Enumeration { path, source },
            other => RenameError::Enumeration {
                path,
                source: std::io::Error::other(other.to_string()),
            },
        },
        ignore::Error::WithDepth { err, .. } => map_ignore_error(*err),
        ignore::Error::Io(source) => RenameError::Enumeration {
            path: PathBuf::new(),
            source,
        },
        other => RenameError::Enumeration {
            path: PathBuf::new(),
            source: std::io::Error::other(other.to_string()),
        },
    }
}
