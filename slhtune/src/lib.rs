//! # slhtune
//!
//! Search tooling for SPHINCS+/SLH-DSA parameter sets.
//!
//! ## Features
//!
//! - `search` (default): Enable the enumerate, sort and select pipeline
//! - `serde` (default): Serialize configurations, candidates and reports
//!
//! ## Components
//!
//! - **Estimator**: Security level of a parameter set after `2^m` signatures,
//!   including heavy overuse
//! - **Search**: Parameter sets within a signing budget, ranked by signature
//!   size and overuse resilience
//!
//! ## Example
//!
//! ```no_run
//! use slhtune::estimator::estimate_security_bits;
//! use slhtune::search::{run, SearchConfig};
//!
//! // SLH-DSA-SHAKE-128s at its design volume
//! assert!(estimate_security_bits(64.0, 63, 12, 14) >= 128.0);
//!
//! let report = run(&SearchConfig::new(128, 20, 1 << 20).with_overuse_ceiling(40))?;
//! println!("{} parameter sets kept", report.selections.len());
//! # Ok::<(), slhtune::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub use slhtune_core::{Error, Result};

/// Candidates, cost model, configuration and search limits.
pub mod types {
    pub use slhtune_core::*;
}

/// Security estimator.
pub mod estimator {
    pub use slhtune_estimator::*;
}

/// Parameter search pipeline.
#[cfg(feature = "search")]
pub mod search {
    pub use slhtune_search::*;
}
