// src/errors.rs

use thiserror::Error;

/// Failures the design pipeline can surface to the caller.
#[derive(Debug, Error)]
pub enum DesignError {
    /// The remote sequence provider failed (network, bad accession,
    /// service error, or an unusable response body).
    #[error("Failed to retrieve genome: {0}")]
    Retrieval(String),

    /// Requested region coordinates fall outside the fetched sequence.
    #[error("Target region {start}..{end} is out of range for a sequence of length {length}")]
    OutOfRange {
        start: usize,
        end: usize,
        length: usize,
    },

    /// A design parameter failed validation before the pipeline ran.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, DesignError>;
