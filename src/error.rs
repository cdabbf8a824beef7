use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenameError {
    // Setup
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("cannot resolve current directory: {source}")]
    PathResolution {
        #[source]
        source: std::io::Error,
    },

    // Enumeration
    #[error("cannot enumerate {}: {source}", .path.display())]
    Enumeration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot enumerate {}: not a directory", .0.display())]
    NotADirectory(PathBuf),

    // Transform
    #[error("cannot substitute in {name:?}: {reason}")]
    Substitution { name: String, reason: String },

    // Per-entry
    #[error("cannot rename {} to {:?}: {reason}", .path.display(), .name)]
    InvalidName {
        path: PathBuf,
        name: String,
        reason: &'static str,
    },

    #[error("cannot rename {} to {}: {source}", .from.display(), .to.display())]
    RenameApply {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenameError {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Enumeration { path: p, .. }
            | Self::NotADirectory(p)
            | Self::InvalidName { path: p, .. }
            | Self::RenameApply { from: p, .. } => Some(p),
            _ => None,
        }
    }

    /// Whether the run can continue after this error.
    ///
    /// Only failures tied to a single entry are recoverable: they are
    /// reported and the remaining entries are still processed. Everything
    /// else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidName { .. } | Self::RenameApply { .. })
    }
}
