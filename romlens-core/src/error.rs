use thiserror::Error;

/// Errors that can occur while analyzing a ROM image.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// I/O error while reading the ROM
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The ROM is too small to contain valid data
    #[error("ROM too small: expected at least {expected} bytes, got {actual}")]
    TooSmall { expected: u64, actual: u64 },
}

impl AnalysisError {
    pub fn too_small(expected: u64, actual: u64) -> Self {
        Self::TooSmall { expected, actual }
    }
}
