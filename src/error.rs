use thiserror::Error;

pub type Result<T> = std::result::Result<T, MazeError>;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze dimensions must be at least 3x3, got {height}x{width}")]
    InvalidDimensions { height: i32, width: i32 },

    #[error("the file {path} does not exist")]
    FileNotFound { path: String },

    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid maze format: {0}")]
    InvalidFormat(String),

    #[error("maze inconsistency: {0}")]
    Inconsistency(String),
}
