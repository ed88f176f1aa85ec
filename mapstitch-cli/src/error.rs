//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent
//! formatting and the exit-code policy: 1 for any fatal runtime error
//! (argument errors exit with 2 via clap).

use mapstitch::SnapshotError;
use std::fmt;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(std::io::Error),
    /// Snapshot run failed
    Snapshot(SnapshotError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::Snapshot(SnapshotError::EmptyGrid { .. }) = self {
            eprintln!();
            eprintln!("The bounding box does not span a whole tile at this zoom level.");
            eprintln!("Widen the bounds or increase the zoom.");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(e) => write!(f, "Failed to initialize logging: {}", e),
            CliError::Snapshot(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::LoggingInit(e) => Some(e),
            CliError::Snapshot(e) => Some(e),
        }
    }
}

impl From<SnapshotError> for CliError {
    fn from(e: SnapshotError) -> Self {
        CliError::Snapshot(e)
    }
}
