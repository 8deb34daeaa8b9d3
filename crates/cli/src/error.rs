//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: curve error (unknown curve, invalid parameter, bad dimensions)
//! - 11: I/O error (scene read, snapshot write)
//! - 12: scene error (scene file is not valid scene JSON)
//! - 13: serialization error

use rosette_core::CurveError;
use std::fmt;
use std::path::PathBuf;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A curve-level error (unknown curve, invalid parameter, bad dimensions).
    Curve(CurveError),
    /// An I/O error (scene file read, PNG write).
    Io(String),
    /// A scene file that could not be parsed.
    Scene { path: PathBuf, reason: String },
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Curve(_) => 10,
            CliError::Io(_) => 11,
            CliError::Scene { .. } => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Curve(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Scene { path, reason } => {
                write!(f, "invalid scene {}: {reason}", path.display())
            }
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<CurveError> for CliError {
    fn from(e: CurveError) -> Self {
        match e {
            CurveError::Io(msg) => CliError::Io(msg),
            other => CliError::Curve(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}
