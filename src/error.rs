//! Error taxonomy and result type.

use std::path::PathBuf;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by session bootstrap, refresh, and addition requests.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured kernel path does not reference a regular file.
    #[error("kernel source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The kernel source file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Kernel compilation failed; carries the compiler's diagnostic log.
    #[error("kernel build failed: {log}")]
    Compile {
        /// Diagnostic text reported by the device compiler.
        log: String,
    },

    /// The compute API returned a non-success status code.
    #[error("device error: status {status} ({context})")]
    Device {
        /// Numeric status reported by the compute API.
        status: i32,
        /// The operation that failed.
        context: String,
    },

    /// Caller-supplied inputs violate a precondition.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rejected configuration.
    #[error("config error: {0}")]
    Config(String),

    /// No compute session is live; the last refresh failed.
    #[error("session not initialized")]
    NotInitialized,
}

impl Error {
    /// Compile failure carrying the compiler's diagnostic log.
    pub fn compile<S: Into<String>>(log: S) -> Self {
        Error::Compile { log: log.into() }
    }

    /// Device failure from `status` with the failing operation as context.
    pub fn device<S: Into<String>>(status: i32, context: S) -> Self {
        Error::Device {
            status,
            context: context.into(),
        }
    }

    /// Precondition violation on caller-supplied inputs.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }

    /// Rejected configuration value.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}
