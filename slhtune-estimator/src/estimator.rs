//! Security level of a SPHINCS+ parameter set as a function of signing volume.

use core::f64::consts::LOG2_E;

use slhtune_core::SecurityModel;
use tracing::warn;

use crate::log_domain::log_add_with_cutoff;
use crate::series::ForgerySeries;
use crate::tuning::SeriesTuning;

/// Stateless security estimator.
///
/// All methods are pure functions of their arguments and the tuning, so one
/// estimator may be shared freely.
///
/// # Example
///
/// ```
/// use slhtune_estimator::Estimator;
///
/// let est = Estimator::default();
/// // SLH-DSA-SHAKE-128s at its design limit of 2^64 signatures
/// let bits = est.security_bits(64.0, 63, 12, 14);
/// assert!(bits > 120.0 && bits < 140.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Estimator {
    tuning: SeriesTuning,
}

impl Estimator {
    /// Estimator with the published tuning constants.
    pub const DEFAULT: Self = Self::new(SeriesTuning::DEFAULT);

    /// Estimator with explicit tuning.
    #[must_use]
    pub const fn new(tuning: SeriesTuning) -> Self {
        Self { tuning }
    }

    /// Tuning in use.
    #[must_use]
    pub const fn tuning(&self) -> &SeriesTuning {
        &self.tuning
    }

    fn series(&self, log_rate: f64, fors_height: u32, fors_count: u32) -> ForgerySeries {
        ForgerySeries::new(log_rate, fors_height, fors_count, self.tuning.taylor_threshold)
    }

    fn add(&self, x: f64, y: f64) -> f64 {
        log_add_with_cutoff(x, y, self.tuning.log_add_cutoff_bits)
    }

    /// Whether the series at this rate is out of reach of `max_terms`.
    fn beyond_cap(
        &self,
        log_rate: f64,
        hypertree_height: u32,
        fors_height: u32,
        fors_count: u32,
    ) -> bool {
        let beyond = log_rate > self.tuning.max_log_rate();
        if beyond {
            warn!(
                log_rate,
                max_terms = self.tuning.max_terms,
                hypertree_height,
                fors_height,
                fors_count,
                "signature rate exceeds the series cap"
            );
        }
        beyond
    }

    /// Estimated security in bits after `2^log_signatures` signatures on a
    /// hypertree of height `hypertree_height` with `fors_count` FORS trees of
    /// height `fors_height`.
    ///
    /// The result is finite and non-negative for every finite input, and
    /// non-increasing in `log_signatures`.
    #[must_use]
    pub fn security_bits(
        &self,
        log_signatures: f64,
        hypertree_height: u32,
        fors_height: u32,
        fors_count: u32,
    ) -> f64 {
        debug_assert!(log_signatures.is_finite());
        let log_rate = log_signatures - f64::from(hypertree_height);
        if self.beyond_cap(log_rate, hypertree_height, fors_height, fors_count) {
            return 0.0;
        }
        let rate = log_rate.exp2();

        let mut log_sum = f64::NEG_INFINITY;
        for term in self
            .series(log_rate, fors_height, fors_count)
            .take(self.tuning.max_terms as usize)
        {
            log_sum = self.add(log_sum, term.log_value);

            // log_poisson bounds every later term; once it is far below the
            // sum, the remaining terms cannot move the answer.
            if term.g >= self.tuning.min_terms
                && log_sum > self.tuning.convergence_margin_bits + term.log_poisson
            {
                // e^-lambda was left out of the terms
                return (rate * LOG2_E - log_sum).max(0.0);
            }
        }

        warn!(
            log_signatures,
            hypertree_height, fors_height, fors_count, "security series did not converge"
        );
        0.0
    }

    /// Whether [`security_bits`](Self::security_bits) is at least `target_bits`.
    ///
    /// Stops as soon as the answer is certain: when the partial sum already
    /// exceeds the probability the target allows, or when a geometric bound
    /// on every remaining term shows it never will.
    #[must_use]
    pub fn meets_level(
        &self,
        log_signatures: f64,
        hypertree_height: u32,
        fors_height: u32,
        fors_count: u32,
        target_bits: f64,
    ) -> bool {
        debug_assert!(log_signatures.is_finite());
        let log_rate = log_signatures - f64::from(hypertree_height);
        if self.beyond_cap(log_rate, hypertree_height, fors_height, fors_count) {
            return target_bits <= 0.0;
        }
        let rate = log_rate.exp2();
        let log_target = rate * LOG2_E - target_bits;
        let tail_start = self.tuning.tail_start_factor * rate;

        let mut log_sum = f64::NEG_INFINITY;
        for term in self
            .series(log_rate, fors_height, fors_count)
            .take(self.tuning.max_terms as usize)
        {
            log_sum = self.add(log_sum, term.log_value);

            if log_sum > log_target {
                return false;
            }

            let g = f64::from(term.g);
            if g > tail_start {
                // Past the peak each Poisson term shrinks by at least p, and
                // b_g <= 1, so the rest sums to at most a_g * p / (1 - p).
                let p = rate / (g + 1.0);
                let log_tail = term.log_poisson + p.log2() - (1.0 - p).log2();
                if self.add(log_sum, log_tail) <= log_target {
                    return true;
                }
            }

            if term.g >= self.tuning.min_terms
                && log_sum > self.tuning.convergence_margin_bits + term.log_poisson
            {
                return true;
            }
        }

        warn!(
            log_signatures,
            hypertree_height, fors_height, fors_count, "security check did not converge"
        );
        target_bits <= 0.0
    }

    /// Largest signature count that keeps the estimate at or above
    /// `target_bits`, as hundredths of its log2.
    ///
    /// For the returned `v`, `security_bits(v / 100) >= target_bits` and
    /// `security_bits(v / 100 + 0.01) < target_bits`. The scan is linear,
    /// first over whole exponents and then over hundredths; it is bounded by
    /// the largest rate the series can evaluate, so it terminates for any
    /// target.
    #[must_use]
    pub fn max_signatures_at_level(
        &self,
        target_bits: f64,
        hypertree_height: u32,
        fors_height: u32,
        fors_count: u32,
    ) -> u32 {
        let bits = |hundredths: u32| {
            self.security_bits(
                f64::from(hundredths) / 100.0,
                hypertree_height,
                fors_height,
                fors_count,
            )
        };

        let limit = hypertree_height.saturating_add(self.tuning.max_log_rate().ceil() as u32 + 1);
        let mut whole = 0;
        while whole < limit && bits(100 * (whole + 1)) >= target_bits {
            whole += 1;
        }

        let mut fraction = 0;
        for step in 1..100 {
            if bits(100 * whole + step) < target_bits {
                break;
            }
            fraction = step;
        }

        100 * whole + fraction
    }
}

impl SecurityModel for Estimator {
    fn security_bits(&self, log_signatures: f64, h: u32, a: u32, k: u32) -> f64 {
        Estimator::security_bits(self, log_signatures, h, a, k)
    }

    fn meets_level(&self, log_signatures: f64, h: u32, a: u32, k: u32, target_bits: f64) -> bool {
        Estimator::meets_level(self, log_signatures, h, a, k, target_bits)
    }

    fn max_signatures_at_level(&self, target_bits: f64, h: u32, a: u32, k: u32) -> u32 {
        Estimator::max_signatures_at_level(self, target_bits, h, a, k)
    }
}

/// [`Estimator::security_bits`] with the default tuning.
#[must_use]
pub fn estimate_security_bits(
    log_signatures: f64,
    hypertree_height: u32,
    fors_height: u32,
    fors_count: u32,
) -> f64 {
    Estimator::DEFAULT.security_bits(log_signatures, hypertree_height, fors_height, fors_count)
}

/// [`Estimator::meets_level`] with the default tuning.
#[must_use]
pub fn meets_security_level(
    log_signatures: f64,
    hypertree_height: u32,
    fors_height: u32,
    fors_count: u32,
    target_bits: f64,
) -> bool {
    Estimator::DEFAULT.meets_level(
        log_signatures,
        hypertree_height,
        fors_height,
        fors_count,
        target_bits,
    )
}

/// [`Estimator::max_signatures_at_level`] with the default tuning.
#[must_use]
pub fn max_signatures_at_level(
    target_bits: f64,
    hypertree_height: u32,
    fors_height: u32,
    fors_count: u32,
) -> u32 {
    Estimator::DEFAULT.max_signatures_at_level(target_bits, hypertree_height, fors_height, fors_count)
}
