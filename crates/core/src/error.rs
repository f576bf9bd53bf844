use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum HwmonError {
    /// Bad option value, colour or config file. Fatal at startup.
    #[error("config error: {0}")]
    Config(String),

    #[error("tray error: {0}")]
    Tray(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = HwmonError> = std::result::Result<T, E>;
