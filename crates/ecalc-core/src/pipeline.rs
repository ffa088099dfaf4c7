//! Prefix-factorial pipeline.
//!
//! An exclusive prefix-product scan over the rank ordering, run with
//! point-to-point messages because the payload, an arbitrary-precision
//! integer, has no size known in advance. Rank 0 starts from the
//! identity; rank `r > 0` blocks on its predecessor's complete prefix
//! factorial, discovering the length via probe, multiplies its own range
//! product in, and forwards the result without blocking. Each rank only
//! ever depends on its immediate predecessor, so no barrier is needed.

use num_bigint::BigUint;
use tracing::debug;

use crate::comm::Communicator;
use crate::error::EulerError;

/// Turn this rank's range product into its complete prefix factorial
/// `(range.end - 1)!` and forward it down the rank chain.
///
/// For a rank whose range starts at `s`, the received value is `(s-1)!`;
/// an empty range passes the prefix through unchanged.
pub fn scan_prefix_factorial(
    comm: &mut dyn Communicator,
    range_product: &BigUint,
) -> Result<BigUint, EulerError> {
    let rank = comm.rank();
    let size = comm.size();

    let complete = if rank == 0 {
        range_product.clone()
    } else {
        let pending = comm.probe(rank - 1)?;
        debug!(rank, bytes = pending, "receiving prefix factorial");
        let payload = comm.recv(rank - 1)?;
        BigUint::from_bytes_le(&payload) * range_product
    };

    if rank + 1 < size {
        comm.send(rank + 1, complete.to_bytes_le())?;
    }

    Ok(complete)
}
