//! Error types for the power quadrant state model.
//!
//! All computation here is local and synchronous, so the taxonomy is
//! small: the handful of domain failures that can abort a
//! recomputation.

use thiserror::Error;

/// Errors raised by the state model and its setters.
///
/// A failed recomputation never corrupts the previous snapshot: setters
/// validate inputs and build derived values on a scratch copy before
/// committing, so callers can treat any of these as "nothing changed".
#[derive(Error, Debug)]
pub enum PqError {
    /// Voltage RMS is (numerically) zero, so current cannot be derived
    /// from apparent power.
    #[error("voltage RMS is zero; cannot derive current from apparent power")]
    ZeroVoltage,

    /// A recomputation input was NaN or infinite.
    #[error("non-finite value for {field}")]
    NonFinite { field: &'static str },

    /// An unrecognized power factor sign convention key.
    #[error("unknown sign convention: {0:?} (expected \"EEI\" or \"IEC\")")]
    UnknownConvention(String),
}

/// Convenience type alias for Results using PqError.
pub type PqResult<T> = Result<T, PqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PqError::NonFinite { field: "x" };
        assert!(err.to_string().contains("non-finite"));
        assert!(err.to_string().contains('x'));

        let err = PqError::UnknownConvention("ieee".into());
        assert!(err.to_string().contains("ieee"));
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner() -> PqResult<()> {
            Err(PqError::ZeroVoltage)
        }

        fn outer() -> PqResult<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
