//! Constants shared by the engine and the CLI.

/// Indices folded into the accumulator fraction between two flushes.
///
/// The running product/sum pair grows by roughly one `u64` factor per
/// index; flushing every 2^13 indices caps the pair at a few hundred
/// kilobits while keeping the fold overhead negligible.
pub const FLUSH_INTERVAL: u64 = 1 << 13;

/// Extra mantissa bits on top of the decimal-digit budget.
pub const GUARD_BITS: u64 = 64;

/// Mantissa bits per requested decimal digit (log2(10), rounded up a bit).
pub const BITS_PER_DIGIT: f64 = 3.33;

/// Bytes per wire limb; mantissa payloads are padded to this width.
pub const LIMB_BYTES: usize = 8;

/// Working mantissa precision, in bits, for a digit target.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn working_precision(digits: u32) -> u64 {
    GUARD_BITS + (BITS_PER_DIGIT * f64::from(digits)).ceil() as u64
}

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A worker rank failed or disappeared mid-run.
    pub const ERROR_WORKER: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
