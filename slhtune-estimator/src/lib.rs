//! SPHINCS+/SLH-DSA security estimator.
//!
//! This crate estimates the concrete security of a hash-based signature
//! parameter set after a given number of signatures, including heavy overuse
//! far beyond the volume the set was designed for.
//!
//! # Model
//!
//! A signature picks a hypertree leaf at random and signs the message digest
//! with the FORS instance at that leaf. With `2^m` signatures over `2^h`
//! leaves, each FORS instance is used a Poisson-distributed number of times.
//! The more an instance is reused, the more of its secret leaves are revealed
//! and the easier it becomes to find a digest whose `k` indices all land on
//! revealed leaves.
//!
//! | Operation | Cost |
//! |-----------|------|
//! | [`Estimator::security_bits`] | converges the full series |
//! | [`Estimator::meets_level`] | stops as soon as the answer is certain |
//! | [`Estimator::max_signatures_at_level`] | linear scan in 0.01 steps |
//!
//! # Numerical stability
//!
//! Every term is held as a base-2 logarithm and summed with [`log_add`], so
//! rates of `2^20` signatures per leaf neither overflow nor underflow. Where
//! `1 - (1 - p)^g` would cancel catastrophically, a Taylor expansion takes
//! over. The thresholds live in [`SeriesTuning`].
//!
//! # Example
//!
//! ```rust
//! use slhtune_estimator::{estimate_security_bits, max_signatures_at_level};
//!
//! // SLH-DSA-SHAKE-128s: h = 63, a = 12, k = 14
//! assert!(estimate_security_bits(64.0, 63, 12, 14) >= 128.0);
//!
//! // How far can it be overused while keeping 96 bits?
//! let overuse = max_signatures_at_level(96.0, 63, 12, 14);
//! assert!(overuse / 100 >= 64);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::similar_names
)]

mod estimator;
mod log_domain;
mod series;
mod tuning;

pub use estimator::{
    estimate_security_bits, max_signatures_at_level, meets_security_level, Estimator,
};
pub use log_domain::{log_add, log_add_with_cutoff, DEFAULT_LOG_ADD_CUTOFF_BITS};
pub use tuning::SeriesTuning;

// Re-export core types
pub use slhtune_core::SecurityModel;
