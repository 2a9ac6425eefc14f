//! Error types for NCM container parsing

use thiserror::Error;

/// Result type for NCM operations
pub type Result<T> = std::result::Result<T, Error>;

/// NCM error types
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File extension is not `.ncm`
    #[error("Invalid extension {0:?}, expected \"ncm\"")]
    InvalidExtension(String),

    /// Invalid NCM magic bytes
    #[error("Invalid NCM magic: expected 'CTENFDAM', got {}", hex::encode(.0))]
    InvalidMagic([u8; 8]),

    /// Seek to a computed section offset failed
    #[error("Seek to offset {offset} failed: {source}")]
    Seek {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    /// Truncated data
    #[error("Truncated data: expected {expected} bytes, got {actual}")]
    TruncatedData { expected: u64, actual: u64 },
}
