// lexdfa-cli: shared utilities for the command-line front ends.

pub mod input;
pub mod render;

use std::io;
use std::path::PathBuf;
use std::process;

use lexdfa_scan::ScanError;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the directory listed by `--menu`.
pub const SAMPLES_DIR_ENV: &str = "LEXDFA_SAMPLES_DIR";

/// Errors reported by the command-line tools.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The input file does not exist.
    #[error("File '{}' not found.", .0.display())]
    FileNotFound(PathBuf),

    /// The menu answer is not one of the listed numbers.
    #[error("Invalid choice: {0:?}")]
    InvalidSelection(String),

    /// The menu directory holds no text file to offer.
    #[error("no .txt files found in {}", .0.display())]
    NoCandidates(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Install the stderr log subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
