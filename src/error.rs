use std::path::PathBuf;

/// Errors raised while profiling sequences or loading STR databases
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A zero-length pattern has no defined run count
    #[error("invalid argument: STR pattern must not be empty")]
    EmptyPattern,

    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed STR database, `line` is 1-based
    #[error("database error at line {line}: {message}")]
    Database { line: usize, message: String },

    /// Failure writing a report to an already-open destination
    #[error("write error: {0}")]
    Write(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    pub fn database(line: usize, message: impl Into<String>) -> Self {
        Error::Database { line, message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
