//! Error types for monmenu
//!
//! Every failure in the core flow is recoverable: probe failures fall back
//! to a single synthetic display, apply failures are logged and the run
//! still reaches the fixed tail (turn off disconnected displays, restart
//! the shell).

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("display probe unavailable: {0}")]
    ProbeUnavailable(String),

    #[error("display probe produced no usable output")]
    EmptyProbeResult,

    #[error("layout apply failed: {0}")]
    ApplyFailed(String),

    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("unsupported desktop environment: {0}")]
    UnsupportedDesktopEnvironment(String),

    #[error("Underlying I/O error")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
