//! Precision/performance constants of the series evaluation.
//!
//! The values were chosen empirically; the default reproduces the published
//! tables. Changing them requires re-deriving the error bound of the
//! truncated series.

use crate::log_domain::DEFAULT_LOG_ADD_CUTOFF_BITS;

/// Knobs controlling how far the security series is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesTuning {
    /// Terms always evaluated before the convergence test may stop the series.
    pub min_terms: u32,
    /// Stop once the running sum exceeds the current Poisson term by this many bits.
    pub convergence_margin_bits: f64,
    /// Below this "no hit" probability, `log2(1 - p)` switches to its Taylor expansion.
    pub taylor_threshold: f64,
    /// The geometric tail bound is tried once `g > tail_start_factor * lambda`.
    pub tail_start_factor: f64,
    /// Operand gap beyond which log-domain addition ignores the smaller term.
    pub log_add_cutoff_bits: f64,
    /// Hard cap on series length; rates too large to converge within it get
    /// the conservative 0-bit answer.
    pub max_terms: u32,
}

impl SeriesTuning {
    /// The constants used by the published parameter tables.
    pub const DEFAULT: Self = Self {
        min_terms: 10,
        convergence_margin_bits: 20.0,
        taylor_threshold: 1e-5,
        tail_start_factor: 2.0,
        log_add_cutoff_bits: DEFAULT_LOG_ADD_CUTOFF_BITS,
        max_terms: 1 << 22,
    };

    /// Largest `log2(lambda)` the series can be evaluated at.
    ///
    /// The Poisson terms grow until `g = lambda`, so past this rate the cap is
    /// reached before the peak and the series cannot converge. Below it the
    /// convergence test stops a few standard deviations past the peak.
    #[must_use]
    pub fn max_log_rate(&self) -> f64 {
        f64::from(self.max_terms).log2()
    }
}

impl Default for SeriesTuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}
