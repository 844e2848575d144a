//! # slhtune Search
//!
//! Finds SPHINCS+/SLH-DSA parameter sets that reach a security level after a
//! given number of signatures, within a signing-time budget, and ranks them by
//! signature size and resilience to overuse.
//!
//! The search runs in three stages:
//!
//! 1. [`enumerate`] walks the parameter space and keeps every set that meets
//!    the primary level, split into three chains by Winternitz class.
//! 2. [`sort_chain`] orders each chain best-first.
//! 3. [`select`] merges the chains and keeps only candidates that tolerate
//!    more overuse than every better-ranked one of the same or an easier
//!    class.
//!
//! [`run`] chains the three; [`SearchReport::curve`] samples the
//! security-versus-signatures curve of each selection.
//!
//! ```rust,no_run
//! use slhtune_search::{run, SearchConfig};
//!
//! let config = SearchConfig::new(128, 20, 1 << 20);
//! let report = run(&config)?;
//! for selection in &report.selections {
//!     println!(
//!         "{} bytes, overuse {}",
//!         selection.candidate.signature_size_bytes(),
//!         selection.overuse
//!     );
//! }
//! # Ok::<(), slhtune_search::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

mod curve;
mod enumerate;
mod pipeline;
mod select;
mod sort;

pub use curve::{CurvePoint, SecurityCurve, CURVE_FLOOR_BITS, CURVE_TAIL_EXPONENTS};
pub use enumerate::enumerate;
pub use pipeline::{run, run_with, SearchReport};
pub use select::{select, OveruseScore, Selection};
pub use sort::{merge_sort_by, sort_chain};

// Re-export core types
pub use slhtune_core::{
    Candidate, ClassChains, Costs, Error, Restrictions, Result, SearchConfig, SecurityModel,
    Shape, WinternitzClass,
};
