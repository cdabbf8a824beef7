use std::path::{Path, PathBuf};

use crate::error::RenameError;

/// One planned rename: a file keeps its parent directory and gets a new name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub source:      PathBuf,
    pub destination: PathBuf,
}

impl RenamePlan {
    pub fn new(source: PathBuf, new_name: &str) -> Self {
        let destination = source.with_file_name(new_name);
        Self { source, destination }
    }

    /// Plan a rename of `source` to `new_name`, refusing names that would
    /// move the file out of its directory or that no filesystem accepts.
    pub fn checked(source: PathBuf, new_name: &str) -> Result<Self, RenameError> {
        match invalid_name_reason(new_name) {
            Some(reason) => Err(RenameError::InvalidName {
                path: source,
                name: new_name.to_string(),
                reason,
            }),
            None => Ok(Self::new(source, new_name)),
        }
    }

    /// `<source> -> <destination>`, with `(dry run)` glued to the destination
    /// when nothing will be changed on disk.
    pub fn report_line(&self, recursive: bool, dry_run: bool) -> String {
        format!(
            "{} -> {}{}",
            display(&self.source, recursive),
            if dry_run { "(dry run)" } else { "" },
            display(&self.destination, recursive),
        )
    }

    pub fn apply(&self) -> Result<(), RenameError> {
        std::fs::rename(&self.source, &self.destination).map_err(|source| RenameError::RenameApply {
            from: self.source.clone(),
            to: self.destination.clone(),
            source,
        })
    }
}

fn invalid_name_reason(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        Some("name is empty")
    } else if name == "." || name == ".." {
        Some("name is a directory reference")
    } else if name.contains('\0') {
        Some("name contains a NUL byte")
    } else if name.chars().any(std::path::is_separator) {
        Some("name contains a path separator")
    } else {
        None
    }
}

/// How a path appears in a report line.
///
/// Recursive runs can touch equally named files in different directories,
/// so they show the absolute path. Otherwise the bare filename is enough.
pub fn display(path: &Path, recursive: bool) -> String {
    if recursive {
        std::path::absolute(path)
            .unwrap_or_else(|_| path.to_path_buf())
            .display()
            .to_string()
    } else {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_keeps_parent() {
        let plan = RenamePlan::new(PathBuf::from("dir/sub/old.txt"), "new.txt");
        assert_eq!(plan.destination, PathBuf::from("dir/sub/new.txt"));
    }

    #[test]
    fn checked_rejects_names_outside_the_directory() {
        for bad in ["", ".", "..", "a/b", "a\0b"] {
            let err = RenamePlan::checked(PathBuf::from("dir/old.txt"), bad).unwrap_err();
            assert!(matches!(err, RenameError::InvalidName { .. }), "{bad:?}");
            assert!(err.is_recoverable());
        }
        assert!(RenamePlan::checked(PathBuf::from("dir/old.txt"), "..new").is_ok());
    }

    #[test]
    fn report_line_formats() {
        let plan = RenamePlan::new(PathBuf::from("dir/old.txt"), "new.txt");
        assert_eq!(plan.report_line(false, false), "old.txt -> new.txt");
        assert_eq!(plan.report_line(false, true), "old.txt -> (dry run)new.txt");
    }

    #[test]
    fn recursive_display_is_absolute() {
        let shown = display(Path::new("sub/old.txt"), true);
        assert!(Path::new(&shown).is_absolute());
        assert!(shown.ends_with("old.txt"));
    }
}
