//! Error types for slhtune searches.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while configuring or running a parameter search.
///
/// Numerical trouble inside the estimator is not represented here: the
/// estimator is total over its legal domain and never yields NaN or infinity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// Security level must be a positive number of bits.
    #[error("invalid security level: {bits} bits (must be between 1 and {max})")]
    InvalidSecurityLevel {
        /// Requested level in bits.
        bits: u32,
        /// Largest supported level.
        max: u32,
    },

    /// The log2 of the signature count must be positive.
    #[error("invalid signature count: 2^{log_signatures} (exponent must be between 1 and {max})")]
    InvalidSignatureCount {
        /// Requested exponent.
        log_signatures: u32,
        /// Largest supported exponent.
        max: u32,
    },

    /// The signing budget must allow at least one hash.
    #[error("invalid signing budget: {0} hashes")]
    InvalidSignBudget(u64),

    /// A restriction filter lies outside the range the enumerator explores.
    #[error("invalid {name} restriction: {value} (must be between {min} and {max})")]
    InvalidRestriction {
        /// Which filter was rejected.
        name: &'static str,
        /// Value supplied.
        value: u32,
        /// Smallest legal value.
        min: u32,
        /// Largest legal value.
        max: u32,
    },

    /// Memory for a candidate could not be reserved; the search was abandoned.
    #[error("out of memory after admitting {admitted} parameter sets")]
    ResourceExhausted {
        /// Number of candidates admitted before the failure.
        admitted: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::InvalidRestriction {
            name: "merkle height",
            value: 40,
            min: 2,
            max: 31,
        };
        assert_eq!(
            err.to_string(),
            "invalid merkle height restriction: 40 (must be between 2 and 31)"
        );
        assert_eq!(
            Error::InvalidSignBudget(0).to_string(),
            "invalid signing budget: 0 hashes"
        );
    }
}
