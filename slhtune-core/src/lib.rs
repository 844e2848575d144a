//! # slhtune Core
//!
//! Shared vocabulary for the slhtune SPHINCS+/SLH-DSA parameter search.
//!
//! This crate provides:
//! - The common error type
//! - The [`SecurityModel`] trait implemented by the estimator
//! - Candidate parameter sets, their Winternitz classes and per-class chains
//! - The hash-count and signature-size cost model
//! - Search configuration and its validation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod candidate;
mod chain;
mod config;
pub mod cost;
mod error;
pub mod limits;
mod traits;

pub use candidate::{Candidate, Costs, Shape, WinternitzClass};
pub use chain::ClassChains;
pub use config::{default_overuse_target, Restrictions, SearchConfig};
pub use cost::WinternitzDigits;
pub use error::{Error, Result};
pub use traits::SecurityModel;
