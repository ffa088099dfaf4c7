//! Per-rank driver and the all-in-one entry point.
//!
//! Every rank runs the same deterministic sequence: agree on the series
//! length, take a slice of the term range, sum it exactly, complete the
//! prefix factorial through the rank pipeline, convert to a float at the
//! working precision, then hand off to the root (or, on the root,
//! aggregate and render). There is no recovery path once the pipeline has
//! started; a failed rank surfaces as a disconnect on its neighbours.

use tracing::{debug, info};

use crate::bigfloat::BigFloat;
use crate::comm::{ChannelComm, Communicator};
use crate::constants::working_precision;
use crate::error::EulerError;
use crate::{partition, pipeline, planner, series, wire};

/// Run one rank of the computation.
///
/// Returns the rendered decimal expansion on rank 0 and `None` on every
/// other rank.
pub fn run_worker(comm: &mut dyn Communicator, digits: u32) -> Result<Option<String>, EulerError> {
    let rank = comm.rank();
    let size = comm.size();

    // The highest rank plans the series length; everyone else takes the
    // broadcast value so the f64 estimate never has to agree bit-for-bit.
    let planned = if rank == size - 1 {
        planner::terms_for_digits(digits)
    } else {
        0
    };
    let max_term = comm.broadcast_u64(size - 1, planned)?;
    debug!(rank, max_term, "series length agreed");

    let range = partition::partition(max_term, size, rank);
    let fraction = series::accumulate(&range);
    debug!(
        rank,
        start = range.start,
        end = range.end,
        "partial sum ready"
    );

    // fraction.denominator is the product of this rank's range; after the
    // scan it becomes (range.end - 1)!, the full factorial under every
    // term this rank owns.
    let full_factorial = pipeline::scan_prefix_factorial(comm, &fraction.denominator)?;

    let precision = working_precision(digits);
    let contribution = BigFloat::from_ratio(&fraction.numerator, &full_factorial, precision)?;

    if rank != 0 {
        wire::send_value(comm, 0, &contribution)?;
        return Ok(None);
    }

    // Root: the n = 0 term (1/0! = 1) belongs to no range; fold it in,
    // then drain the other ranks in rank order.
    let mut total = contribution.add(&BigFloat::from_u64(1, precision));
    for src in 1..size {
        let value = wire::recv_value(comm, src)?;
        total = total.add(&value);
    }

    Ok(Some(total.to_decimal(digits)))
}

/// Compute e to `digits` correct decimal digits with `workers` ranks.
///
/// Spawns one OS thread per rank over an in-process channel mesh, joins
/// all of them (so every queued forward send is accounted for before
/// returning), and yields the root's rendering. The result is identical
/// for every `workers >= 1`; the count only changes how the work is
/// spread.
pub fn compute_e(digits: u32, workers: usize) -> Result<String, EulerError> {
    if workers == 0 {
        return Err(EulerError::Config("worker count must be at least 1".into()));
    }

    info!(digits, workers, "computing e");

    let mesh = ChannelComm::mesh(workers);
    let handles: Vec<_> = mesh
        .into_iter()
        .map(|mut comm| std::thread::spawn(move || run_worker(&mut comm, digits)))
        .collect();

    // Join every rank before reporting anything: a failed rank tears the
    // mesh down and its neighbours come back with disconnect errors.
    let mut output = None;
    let mut failure = None;
    for (rank, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(Ok(Some(rendered))) => output = Some(rendered),
            Ok(Ok(None)) => {}
            Ok(Err(err)) => {
                failure.get_or_insert(err);
            }
            Err(_) => {
                failure.get_or_insert(EulerError::WorkerPanicked(rank));
            }
        }
    }

    if let Some(err) = failure {
        return Err(err);
    }
    output.ok_or_else(|| EulerError::Calculation("root rank produced no result".into()))
}
