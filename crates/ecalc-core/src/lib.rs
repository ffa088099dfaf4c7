//! # ecalc-core
//!
//! Distributed arbitrary-precision computation of Euler's number e.
//! A fixed set of worker ranks cooperates purely by message passing:
//! each rank sums a slice of the reciprocal-factorial series exactly,
//! completes its factorial denominator through a rank-to-rank prefix
//! pipeline, and ships its high-precision contribution to the root for
//! aggregation.

pub mod bigfloat;
pub mod comm;
pub mod constants;
pub mod engine;
pub mod error;
pub mod partition;
pub mod pipeline;
pub mod planner;
pub mod series;
pub mod wire;

// Re-exports
pub use bigfloat::BigFloat;
pub use comm::{ChannelComm, CommError, Communicator};
pub use constants::{exit_codes, working_precision, FLUSH_INTERVAL};
pub use engine::{compute_e, run_worker};
pub use error::EulerError;
pub use partition::TermRange;
pub use series::Fraction;
pub use wire::WireError;

/// Compute e to `digits` correct decimal digits on a single worker.
///
/// Convenience wrapper over [`engine::compute_e`] for simple use cases;
/// use `compute_e` directly to control the worker count.
///
/// # Example
/// ```
/// assert_eq!(ecalc_core::euler_digits(10).unwrap(), "2.7182818285");
/// ```
pub fn euler_digits(digits: u32) -> Result<String, EulerError> {
    engine::compute_e(digits, 1)
}
