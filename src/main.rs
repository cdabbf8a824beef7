//! `rename` CLI entrypoint.
//!
//! Parses arguments, runs one rename pass, and maps fatal errors to a
//! prefixed diagnostic and a non-zero exit status. Failed renames of single
//! files are reported by the pass itself and still exit 0.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let invocation = match rename::parse_args(std::env::args_os()) {
        Ok(inv) => inv,
        Err(e) => e.exit(),
    };

    init_logging();

    match invocation.into_builder().run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}{e}", rename::ERROR_PREFIX);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by `RENAME_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_env("RENAME_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
