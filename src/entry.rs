use std::path::PathBuf;

/// A single item produced by a [`Source`](crate::traits::Source) during enumeration.
///
/// `name` is the final path component only. Directory sources never yield
/// entries whose name is not valid UTF-8.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Path to the entry, rooted at the base path the run was given.
    pub path: PathBuf,

    /// The entry's filename.
    pub name: String,

    /// What kind of entry this is.
    pub kind: EntryKind,

    /// How deep below the base path this entry was found. Direct children = 1.
    pub depth: usize,
}

impl Entry {
    /// Only regular files take part in a rename run.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// The kind of an enumerated entry.
///
/// Symbolic links are classified by what they point at: a link to a regular
/// file is a [`File`](EntryKind::File). `Symlink` is left for links whose
/// target is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file, or a symlink resolving to one.
    File,

    /// A directory, or a symlink resolving to one.
    Dir,

    /// A dangling symbolic link.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

impl EntryKind {
    pub(crate) fn from_file_type(ft: std::fs::FileType) -> Self {
        if ft.is_file() {
            Self::File
        } else if ft.is_dir() {
            Self::Dir
        } else if ft.is_symlink() {
            Self::Symlink
        } else {
            Self::Other
        }
    }
}
