//! Exact summation of a reciprocal-factorial range.
//!
//! Computes `Σ 1/n!` over a [`TermRange`] as a single exact fraction,
//! without any inexact division. Indices are processed in descending
//! order: a running product accumulates the partial factorial while a
//! running sum accumulates numerators scaled to it (Horner-style). Every
//! [`FLUSH_INTERVAL`] indices the pair is folded into the accumulator
//! fraction and reseeded, which caps the bit-length of the working
//! integers instead of letting one astronomically large pair form.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::constants::FLUSH_INTERVAL;
use crate::partition::TermRange;

/// Exact rational partial sum.
///
/// `numerator / denominator` equals the sum of the range's `1/n!` terms
/// scaled so that `denominator` is the product of every integer in the
/// range. Dividing by the prefix factorial of lower ranks (see
/// [`crate::pipeline`]) then yields the true contribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fraction {
    /// Scaled sum of the range's terms.
    pub numerator: BigUint,
    /// Product of all integers in `[start, end)`.
    pub denominator: BigUint,
}

/// Sum `1/n!` for `n` in `range`, exactly.
#[must_use]
pub fn accumulate(range: &TermRange) -> Fraction {
    accumulate_with_flush(range, FLUSH_INTERVAL)
}

/// Same as [`accumulate`] with an explicit flush interval.
///
/// Exposed to tests so the fold path is reachable with small ranges; the
/// result is independent of the interval.
pub(crate) fn accumulate_with_flush(range: &TermRange, flush_interval: u64) -> Fraction {
    debug_assert!(flush_interval > 0);

    // Ranges too short for the seeded loop below.
    match range.len() {
        0 => {
            return Fraction {
                numerator: BigUint::zero(),
                denominator: BigUint::one(),
            }
        }
        1 => {
            // Single term 1/start relative to the range product `start`.
            return Fraction {
                numerator: BigUint::one(),
                denominator: BigUint::from(range.start),
            }
        }
        _ => {}
    }

    // Seeding covers the two highest indices: `product` is the term for
    // end-1 and `sum = (end-1) + 1` folds in the empty-product term too.
    let mut product = BigUint::from(range.end - 1);
    let mut sum = BigUint::from(range.end);

    let mut numerator = BigUint::zero();
    let mut fold_factor = BigUint::one();

    for i in (range.start + 1..=range.end - 2).rev() {
        if i % flush_interval == 0 {
            // Fold the bounded pair into the accumulator and reseed.
            numerator += &fold_factor * &sum;
            fold_factor *= &product;
            product = BigUint::from(i);
            sum = BigUint::from(i);
        } else {
            product *= i;
            sum += &product;
        }
    }

    // Final fold; afterwards fold_factor * start is the full range product.
    numerator += &fold_factor * &sum;
    fold_factor *= &product;
    fold_factor *= range.start;

    Fraction {
        numerator,
        denominator: fold_factor,
    }
}
