use std::time::Duration;

use crate::error::RenameError;
use crate::plan::RenamePlan;

/// The output of a completed rename pass.
#[derive(Debug, Default)]
pub struct Summary {
    /// Every entry whose name changed, in the order it was processed.
    /// Populated in dry runs too.
    pub plans: Vec<RenamePlan>,

    /// Renames that failed on disk. Each was already reported on the error
    /// stream and did not stop the pass.
    pub failures: Vec<RenameError>,

    /// Pass statistics.
    pub stats: RunStats,
}

impl Summary {
    /// True if every planned rename went through (always true for dry runs).
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Counters for a completed pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunStats {
    /// Regular files enumerated.
    pub files: usize,

    /// Files renamed on disk.
    pub renamed: usize,

    /// Files whose name the pattern left as it was.
    pub unchanged: usize,

    /// Renames that failed on disk.
    pub failed: usize,

    /// Wall-clock time from enumeration start to the last rename.
    pub duration: Duration,
}
