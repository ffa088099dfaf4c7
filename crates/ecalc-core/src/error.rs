//! Error type for the distributed computation.

use crate::comm::CommError;
use crate::wire::WireError;

/// Error type for e-series computations.
#[derive(Debug, thiserror::Error)]
pub enum EulerError {
    /// Configuration error (bad digit count, zero workers, ...).
    #[error("configuration error: {0}")]
    Config(String),

    /// A numeric step failed (division by zero denominator, ...).
    #[error("calculation error: {0}")]
    Calculation(String),

    /// A message-passing operation failed.
    #[error("communication error: {0}")]
    Comm(#[from] CommError),

    /// A received value frame was malformed.
    #[error("wire error: {0}")]
    Wire(#[from] WireError),

    /// A worker thread panicked before delivering its result.
    #[error("worker rank {0} panicked")]
    WorkerPanicked(usize),
}
