use std::io::Write;
use std::time::Instant;

use tracing::{debug, info};

use crate::entry::Entry;
use crate::error::RenameError;
use crate::plan::RenamePlan;
use crate::results::Summary;
use crate::traits::{Source, Transform};
use crate::ERROR_PREFIX;

// ---------------------------------------------------------------------------
// WalkConfig
// ---------------------------------------------------------------------------

/// Traversal parameters handed to a [`Source`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkConfig {
    /// Descend into subdirectories instead of listing direct children only.
    pub recursive: bool,
}

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Options passed from the builder to `run()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    pub config:  WalkConfig,
    pub dry_run: bool,
    pub quiet:   bool,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Execute one rename pass.
///
/// The source is drained and sorted before the first rename so that renaming
/// an entry can never change which entries are visited or in what order.
/// Report lines go to `out`. A new name that is not a plain filename, or a
/// rename that fails on disk, is written to `err` and the pass carries on
/// with the next entry.
///
/// # Errors
///
/// Enumeration failures and transform failures abort the pass. When the
/// transform fails, renames already applied to earlier entries stay applied.
pub fn run(
    source: &dyn Source,
    transform: &dyn Transform,
    opts: EngineOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Summary, RenameError> {
    let start = Instant::now();

    let mut entries = collect_files(source, &opts.config)?;
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    debug!(files = entries.len(), "enumeration complete");

    let mut summary = Summary::default();

    for entry in &entries {
        let new_name = transform.apply(&entry.name)?;
        if new_name == entry.name {
            summary.stats.unchanged += 1;
            continue;
        }

        let plan = match RenamePlan::checked(entry.path.clone(), &new_name) {
            Ok(plan) => plan,
            Err(e) => {
                // Write failures on the error stream are ignored.
                let _ = writeln!(err, "{ERROR_PREFIX}{e}");
                summary.stats.failed += 1;
                summary.failures.push(e);
                continue;
            }
        };
        debug!(from = %plan.source.display(), to = %plan.destination.display(), "planned");

        if !opts.quiet {
            // Write failures on the report stream are ignored.
            let _ = writeln!(out, "{}", plan.report_line(opts.config.recursive, opts.dry_run));
        }

        if !opts.dry_run {
            match plan.apply() {
                Ok(()) => summary.stats.renamed += 1,
                Err(e) => {
                    // Write failures on the error stream are ignored.
                    let _ = writeln!(err, "{ERROR_PREFIX}{e}");
                    summary.stats.failed += 1;
                    summary.failures.push(e);
                }
            }
        }

        summary.plans.push(plan);
    }

    summary.stats.files = entries.len();
    summary.stats.duration = start.elapsed();
    info!(
        files = summary.stats.files,
        planned = summary.plans.len(),
        renamed = summary.stats.renamed,
        failed = summary.stats.failed,
        dry_run = opts.dry_run,
        "rename pass finished"
    );

    Ok(summary)
}

/// Materialize every regular file the source yields. The first error wins.
fn collect_files(source: &dyn Source, config: &WalkConfig) -> Result<Vec<Entry>, RenameError> {
    let mut files = Vec::new();
    for entry in source.walk(config) {
        let entry = entry?;
        if entry.is_file() {
            files.push(entry);
        }
    }
    Ok(files)
}
