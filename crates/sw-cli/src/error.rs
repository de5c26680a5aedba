//! Top-level CLI error, mapped to the process exit codes §7 specifies:
//! `0` success, `1` usage or I/O setup error, `2` runtime I/O error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("setup I/O error: {0}")]
    Setup(#[from] std::io::Error),

    #[error("invalid reference sequence: {0}")]
    InvalidReference(String),

    #[error(transparent)]
    Format(#[from] sw_formats::FormatError),

    #[error("I/O error while processing reads: {0}")]
    Runtime(std::io::Error),

    #[error("malformed read: {0}")]
    ReadFormat(sw_formats::FormatError),

    #[error(transparent)]
    Quality(#[from] sw_report::ReportError),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 1,
            CliError::Setup(_) => 1,
            CliError::InvalidReference(_) => 1,
            CliError::Format(_) => 1,
            CliError::Runtime(_) => 2,
            CliError::ReadFormat(_) => 2,
            CliError::Quality(_) => 1,
        }
    }
}
