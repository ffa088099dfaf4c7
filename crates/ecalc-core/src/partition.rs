//! Mapping of the global term range onto ranks.

/// Half-open span `[start, end)` of series indices owned by one rank.
///
/// Ranges partition `[1, max_term]` contiguously and disjointly, ascending
/// by rank. A rank given fewer indices than its peers may own an empty
/// range (`start == end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermRange {
    /// First owned index (inclusive).
    pub start: u64,
    /// One past the last owned index.
    pub end: u64,
}

impl TermRange {
    /// Number of indices in the range.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Whether the range holds no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Compute the range owned by `rank` out of `workers` ranks.
///
/// Base length is `max_term / workers`; the `max_term % workers` leftover
/// indices go to the lowest ranks, one extra each, so the union of all
/// ranges is exactly `[1, max_term]`.
///
/// # Panics
/// Panics if `workers == 0` or `rank >= workers` (caller bug).
#[must_use]
pub fn partition(max_term: u64, workers: usize, rank: usize) -> TermRange {
    assert!(workers > 0, "partition requires at least one worker");
    assert!(rank < workers, "rank {rank} out of range for {workers} workers");

    let workers = workers as u64;
    let rank = rank as u64;

    let diff = max_term / workers;
    let rem = max_term % workers;

    let mut start = 1 + diff * rank;
    let mut end = 1 + diff * (rank + 1);

    // Leftover indices shift lower ranks forward by one extra unit each.
    if rank < rem {
        start += rank;
        end += rank + 1;
    } else {
        start += rem;
        end += rem;
    }

    TermRange { start, end }
}
