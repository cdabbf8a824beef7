//! Command-line argument resolution for the `rename` binary.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::builder::RenameBuilder;

#[derive(Parser, Debug)]
#[command(
    name = "rename",
    version,
    about = "Rename files by replacing PATTERN with REPLACEMENT.",
    long_about = "Rename files by replacing PATTERN with REPLACEMENT.\n\
                  Regular expressions are supported as well; $1, $2, ... in \
                  REPLACEMENT refer to capture groups.",
    after_help = "Examples:\n  rename txt txt.old .\n  rename 'file_(\\d+).txt' 'File_$1.txt' /path/to/directory"
)]
struct Cli {
    /// Regular expression matched against each filename
    pattern: String,

    /// Replacement for every match; may reference capture groups as $N
    replacement: String,

    /// Directory to rename in (defaults to the current directory)
    path: Option<PathBuf>,

    /// Perform a trial run with no changes
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Rename recursively in subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Suppress non-error messages
    #[arg(short, long)]
    quiet: bool,
}

/// A fully parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub pattern:     String,
    pub replacement: String,
    pub path:        Option<PathBuf>,
    pub dry_run:     bool,
    pub recursive:   bool,
    pub quiet:       bool,
}

impl Invocation {
    /// Turn this invocation into a configured [`RenameBuilder`].
    pub fn into_builder(self) -> RenameBuilder {
        let mut builder = crate::rename(self.pattern, self.replacement)
            .dry_run(self.dry_run)
            .recursive(self.recursive)
            .quiet(self.quiet);
        if let Some(path) = self.path {
            builder = builder.path(path);
        }
        builder
    }
}

impl Cli {
    fn into_invocation(self) -> Invocation {
        Invocation {
            pattern:     self.pattern,
            replacement: self.replacement,
            path:        self.path,
            dry_run:     self.dry_run,
            recursive:   self.recursive,
            quiet:       self.quiet,
        }
    }
}

/// Parse `argv` (including the program name) into an [`Invocation`].
///
/// # Errors
///
/// Missing positionals, extra positionals and unknown flags are usage
/// errors. `--help` and `--version` also surface as `Err`; `clap::Error::exit`
/// prints them and exits with the right status.
pub fn parse_args<I, T>(argv: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(argv).map(Cli::into_invocation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positionals_and_flags() {
        let inv = parse_args(["rename", "-n", "--recursive", "a", "b", "dir"]).unwrap();
        assert_eq!(
            inv,
            Invocation {
                pattern:     "a".into(),
                replacement: "b".into(),
                path:        Some(PathBuf::from("dir")),
                dry_run:     true,
                recursive:   true,
                quiet:       false,
            }
        );
    }

    #[test]
    fn path_is_optional() {
        let inv = parse_args(["rename", "-q", "a", "b"]).unwrap();
        assert_eq!(inv.path, None);
        assert!(inv.quiet);
    }

    #[test]
    fn rejects_bad_usage() {
        assert!(parse_args(["rename", "a"]).is_err());
        assert!(parse_args(["rename", "a", "b", "c", "d"]).is_err());
        assert!(parse_args(["rename", "--force", "a", "b"]).is_err());
    }
}
