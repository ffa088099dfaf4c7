//! Arbitrary-precision binary floating values.
//!
//! `BigFloat` is the unit exchanged between ranks: a signed mantissa,
//! a base-2 exponent and an explicit precision in bits. It only supports
//! what the aggregation step needs: construction from an exact integer
//! ratio, addition, and decimal rendering. The internal representation is
//! reachable solely through the part accessors consumed by [`crate::wire`].

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, Zero};

use crate::error::EulerError;

/// A floating value `mantissa * 2^exponent` carried at an explicit
/// mantissa precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigFloat {
    precision: u64,
    mantissa: BigInt,
    exponent: i64,
}

impl BigFloat {
    /// The zero value at the given precision.
    #[must_use]
    pub fn zero(precision: u64) -> Self {
        Self {
            precision,
            mantissa: BigInt::zero(),
            exponent: 0,
        }
    }

    /// Exact conversion of a small non-negative integer.
    #[must_use]
    pub fn from_u64(value: u64, precision: u64) -> Self {
        Self {
            precision,
            mantissa: BigInt::from(value),
            exponent: 0,
        }
        .truncated()
    }

    /// `numerator / denominator` rounded toward zero at `precision`
    /// mantissa bits.
    pub fn from_ratio(
        numerator: &BigUint,
        denominator: &BigUint,
        precision: u64,
    ) -> Result<Self, EulerError> {
        if denominator.is_zero() {
            return Err(EulerError::Calculation(
                "zero denominator in float conversion".into(),
            ));
        }
        if numerator.is_zero() {
            return Ok(Self::zero(precision));
        }

        // Scale the numerator so the quotient carries at least
        // `precision` significant bits, then truncate back down.
        let shift = precision + denominator.bits();
        let mantissa = BigInt::from((numerator << shift) / denominator);

        #[allow(clippy::cast_possible_wrap)]
        let exponent = -(shift as i64);
        Ok(Self {
            precision,
            mantissa,
            exponent,
        }
        .truncated())
    }

    /// Sum of two values, at the larger of the two precisions.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let precision = self.precision.max(other.precision);
        if self.mantissa.is_zero() {
            return Self {
                precision,
                ..other.clone()
            }
            .truncated();
        }
        if other.mantissa.is_zero() {
            return Self {
                precision,
                ..self.clone()
            }
            .truncated();
        }

        // Align both mantissas to the smaller exponent.
        let exponent = self.exponent.min(other.exponent);
        let lhs = &self.mantissa << u64_diff(self.exponent, exponent);
        let rhs = &other.mantissa << u64_diff(other.exponent, exponent);

        Self {
            precision,
            mantissa: lhs + rhs,
            exponent,
        }
        .truncated()
    }

    /// Render `|value|` with `digits` digits after the decimal point,
    /// rounding half up at the last digit (a leading `-` marks negative
    /// values). `digits == 0` renders the nearest integer.
    #[must_use]
    pub fn to_decimal(&self, digits: u32) -> String {
        let scale = pow10(digits + 1);
        let magnitude = self.mantissa.magnitude();

        // floor(|value| * 10^(digits+1))
        let scaled: BigUint = if self.exponent >= 0 {
            #[allow(clippy::cast_sign_loss)]
            let shifted = magnitude << (self.exponent as u64);
            shifted * &scale
        } else {
            (magnitude * &scale) >> self.exponent.unsigned_abs()
        };

        // One spare digit absorbs the round-half-up.
        let rounded = (scaled + 5u32) / 10u32;
        let base = pow10(digits);
        let integer = &rounded / &base;
        let fraction = &rounded % &base;

        let sign = if self.mantissa.is_negative() { "-" } else { "" };
        if digits == 0 {
            format!("{sign}{integer}")
        } else {
            format!(
                "{sign}{integer}.{fraction:0>width$}",
                width = digits as usize
            )
        }
    }

    /// Declared mantissa precision in bits.
    #[must_use]
    pub fn precision(&self) -> u64 {
        self.precision
    }

    /// Base-2 exponent.
    #[must_use]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Sign and little-endian magnitude bytes of the mantissa.
    #[must_use]
    pub fn mantissa_bytes_le(&self) -> (Sign, Vec<u8>) {
        self.mantissa.to_bytes_le()
    }

    /// Reassemble a value from its transported parts, bit-exact.
    #[must_use]
    pub fn from_parts(precision: u64, mantissa: BigInt, exponent: i64) -> Self {
        if mantissa.is_zero() {
            return Self::zero(precision);
        }
        Self {
            precision,
            mantissa,
            exponent,
        }
    }

    /// Drop mantissa bits beyond the declared precision (toward zero for
    /// the non-negative values this engine produces).
    fn truncated(mut self) -> Self {
        if self.mantissa.is_zero() {
            self.exponent = 0;
            return self;
        }
        let bits = self.mantissa.magnitude().bits();
        if bits > self.precision {
            let excess = bits - self.precision;
            self.mantissa >>= excess;
            #[allow(clippy::cast_possible_wrap)]
            {
                self.exponent += excess as i64;
            }
        }
        self
    }
}

fn pow10(exp: u32) -> BigUint {
    BigUint::from(10u32).pow(exp)
}

/// Non-negative difference `a - b` as a shift amount.
#[allow(clippy::cast_sign_loss)]
fn u64_diff(a: i64, b: i64) -> u64 {
    debug_assert!(a >= b);
    (a - b) as u64
}
