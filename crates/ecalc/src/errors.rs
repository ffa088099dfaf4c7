//! Error handling and exit codes.

use ecalc_core::exit_codes;
use ecalc_core::EulerError;

/// Map a computation error to the appropriate exit code.
#[must_use]
pub fn handle_error(err: &EulerError) -> i32 {
    match err {
        EulerError::Config(_) => exit_codes::ERROR_CONFIG,
        EulerError::Comm(_) | EulerError::WorkerPanicked(_) => exit_codes::ERROR_WORKER,
        EulerError::Calculation(_) | EulerError::Wire(_) => exit_codes::ERROR_GENERIC,
    }
}
