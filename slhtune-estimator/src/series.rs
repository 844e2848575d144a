//! Terms of the forgery-probability series.
//!
//! After `2^m` signatures spread over `2^h` hypertree leaves, the number of
//! signatures made by one FORS instance is Poisson with rate
//! `lambda = 2^(m - h)`. Given `g` signatures from that instance, a forgery
//! query succeeds if each of its `k` FORS leaves was already revealed, which
//! happens with probability `b_g = (1 - (1 - 2^-a)^g)^k`. The attacker's
//! success probability is `e^-lambda * sum_g a_g * b_g` with
//! `a_g = lambda^g / g!`.
//!
//! Every quantity is carried as a base-2 logarithm so that neither `a_g` nor
//! `b_g` can overflow or underflow.

use core::f64::consts::LN_2;

/// One evaluated term of the series.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Term {
    /// Index `g`, starting at 1.
    pub g: u32,
    /// `log2(lambda^g / g!)`, which bounds the term from above.
    pub log_poisson: f64,
    /// `log2(a_g * b_g)`.
    pub log_value: f64,
}

/// Infinite iterator over the series terms.
#[derive(Debug, Clone)]
pub(crate) struct ForgerySeries {
    log_rate: f64,
    fors_count: f64,
    taylor_threshold: f64,
    /// Probability a forgery query misses one revealed leaf of one FORS tree.
    miss_one: f64,
    /// Probability a forgery query misses all `g` revealed leaves of one FORS tree.
    miss_all: f64,
    log_poisson: f64,
    g: u32,
}

impl ForgerySeries {
    pub(crate) fn new(log_rate: f64, fors_height: u32, fors_count: u32, taylor_threshold: f64) -> Self {
        Self {
            log_rate,
            fors_count: f64::from(fors_count),
            taylor_threshold,
            miss_one: 1.0 - (-f64::from(fors_height)).exp2(),
            miss_all: 1.0,
            log_poisson: 0.0,
            g: 0,
        }
    }

    /// `log2(b_g) = k * log2(1 - miss_all)`.
    ///
    /// For tiny `miss_all` the subtraction rounds to 1, so the second-order
    /// expansion `log2(1 - q) ~ -(q + q^2/2) / ln 2` is used instead.
    fn log_fors_hit(&self) -> f64 {
        let q = self.miss_all;
        if q < self.taylor_threshold {
            -self.fors_count * (q / LN_2 + q * q / (2.0 * LN_2))
        } else {
            self.fors_count * (1.0 - q).log2()
        }
    }
}

impl Iterator for ForgerySeries {
    type Item = Term;

    fn next(&mut self) -> Option<Term> {
        self.g = self.g.checked_add(1)?;
        self.log_poisson += self.log_rate - f64::from(self.g).log2();
        self.miss_all *= self.miss_one;

        Some(Term {
            g: self.g,
            log_poisson: self.log_poisson,
            log_value: self.log_poisson + self.log_fors_hit(),
        })
    }
}
