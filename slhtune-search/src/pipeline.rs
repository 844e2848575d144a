//! The enumerate, sort, select pipeline.

use slhtune_core::{Result, SearchConfig, SecurityModel};
use slhtune_estimator::Estimator;
use tracing::{debug, info_span};

use crate::curve::SecurityCurve;
use crate::enumerate::enumerate;
use crate::select::{select, Selection};
use crate::sort::sort_chain;

/// Outcome of one search.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    /// The configuration that produced this report.
    pub config: SearchConfig,
    /// Kept candidates, best first.
    pub selections: Vec<Selection>,
}

impl SearchReport {
    /// Smallest signature size among the selections, in bytes.
    pub fn smallest_signature(&self) -> Option<u64> {
        self.selections
            .iter()
            .map(|s| s.candidate.signature_size_bytes())
            .min()
    }

    /// Overuse exponent that bounds the curves: the configured ceiling, or
    /// the hypertree height of `selection` when none was given.
    pub fn curve_ceiling(&self, selection: &Selection) -> u32 {
        self.config
            .overuse_ceiling
            .unwrap_or_else(|| selection.candidate.hypertree_height())
    }

    /// Security curve of one selection under the default estimator.
    pub fn curve(&self, selection: &Selection) -> SecurityCurve<Estimator> {
        self.curve_with(Estimator::DEFAULT, selection)
    }

    /// Security curve of one selection under `model`.
    pub fn curve_with<M: SecurityModel>(&self, model: M, selection: &Selection) -> SecurityCurve<M> {
        SecurityCurve::new(
            model,
            &selection.candidate,
            self.config.security_level_bits,
            self.config.log_signatures,
            self.curve_ceiling(selection),
        )
    }
}

/// Run the full search with the default estimator.
///
/// # Errors
///
/// Fails on invalid configuration, or if a chain cannot grow.
pub fn run(config: &SearchConfig) -> Result<SearchReport> {
    run_with(config, &Estimator::DEFAULT)
}

/// Run the full search with a custom security model.
///
/// # Errors
///
/// Fails on invalid configuration, or if a chain cannot grow.
pub fn run_with<M: SecurityModel + ?Sized>(config: &SearchConfig, model: &M) -> Result<SearchReport> {
    let span = info_span!(
        "search",
        s = config.security_level_bits,
        n = config.log_signatures
    );
    let _guard = span.enter();

    let chains = enumerate(config, model)?;
    let sorted = chains.map(sort_chain);
    debug!(candidates = sorted.len(), "sorted class chains");

    let selections = select(
        sorted,
        f64::from(config.overuse_target_bits),
        config.overuse_ceiling,
        model,
    );

    Ok(SearchReport {
        config: config.clone(),
        selections,
    })
}
