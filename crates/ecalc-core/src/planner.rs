//! Series-length planning.
//!
//! Determines how many reciprocal-factorial terms are needed for a digit
//! target by solving `x·ln(x) − x = digits·ln(10)` with Newton's method.
//! The estimate only needs `f64` arithmetic: the summation loop runs to
//! the end of its assigned range regardless, so being off by a small
//! constant is harmless. Exactly one rank runs this and broadcasts the
//! result, so ranks never need bit-identical transcendentals.

/// Smallest `n` (order of magnitude) such that `1/n!` drops below
/// `10^-digits`.
///
/// Newton update for `f(x) = x·ln(x) − x − digits·ln(10)` simplifies to
/// `x ← (x + digits·ln(10)) / ln(x)`; iteration stops once successive
/// iterates differ by at most 1.0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn terms_for_digits(digits: u32) -> u64 {
    let target = f64::from(digits) * std::f64::consts::LN_10;

    let mut x = 3.0_f64;
    loop {
        let next = (x + target) / x.ln();
        if (next - x).abs() <= 1.0 {
            return next.ceil() as u64;
        }
        x = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ln(n!) via direct summation, for checking the estimate.
    fn ln_factorial(n: u64) -> f64 {
        (2..=n).map(|k| (k as f64).ln()).sum()
    }

    #[test]
    fn zero_digits_terminates() {
        // f64 target is 0; the solver still converges near e.
        assert_eq!(terms_for_digits(0), 3);
    }

    #[test]
    fn known_small_values() {
        assert_eq!(terms_for_digits(1), 5);
        assert_eq!(terms_for_digits(2), 6);
        assert_eq!(terms_for_digits(5), 10);
        assert_eq!(terms_for_digits(10), 15);
    }

    #[test]
    fn estimate_reaches_target_magnitude() {
        // 1/n! must be below 10^-digits within a couple of terms of the
        // returned n: ln(n!) >= digits*ln(10) - 2*ln(n).
        for digits in [1u32, 10, 50, 100, 1000] {
            let n = terms_for_digits(digits);
            let lhs = ln_factorial(n + 2);
            let rhs = f64::from(digits) * std::f64::consts::LN_10;
            assert!(
                lhs >= rhs,
                "digits={digits}: n={n} too small (ln(n+2)!={lhs} < {rhs})"
            );
        }
    }

    #[test]
    fn monotone_in_digits() {
        let mut prev = 0;
        for digits in (0..500).step_by(25) {
            let n = terms_for_digits(digits);
            assert!(n >= prev, "terms_for_digits not monotone at {digits}");
            prev = n;
        }
    }
}
