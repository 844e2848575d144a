//! Security-versus-signatures curve of one parameter set.

use slhtune_core::{Candidate, SecurityModel};

/// Points below this security level are not worth plotting.
pub const CURVE_FLOOR_BITS: f64 = 10.0;

/// The curve runs this many whole exponents past the ceiling.
pub const CURVE_TAIL_EXPONENTS: u32 = 10;

/// One point of a [`SecurityCurve`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// log2 of the number of signatures.
    pub exponent: f64,
    /// Estimated security, capped at the primary level.
    pub bits: f64,
}

/// Estimated security of one parameter set, sampled every 0.01 in the
/// exponent.
///
/// Starts one exponent below the design volume and stops at
/// `ceiling + 10` or at the first point under [`CURVE_FLOOR_BITS`], whichever
/// comes first. Clone the iterator before consuming it to walk the curve
/// again.
#[derive(Debug, Clone)]
pub struct SecurityCurve<M> {
    model: M,
    hypertree_height: u32,
    fors_height: u32,
    fors_count: u32,
    cap_bits: f64,
    next: u32,
    end: u32,
    done: bool,
}

impl<M: SecurityModel> SecurityCurve<M> {
    /// Curve of `candidate` starting at `2^(log_signatures - 1)` signatures.
    ///
    /// `ceiling` is the overuse exponent of interest; points run up to
    /// `ceiling + 10`.
    pub fn new(
        model: M,
        candidate: &Candidate,
        security_level_bits: u32,
        log_signatures: u32,
        ceiling: u32,
    ) -> Self {
        Self {
            model,
            hypertree_height: candidate.hypertree_height(),
            fors_height: candidate.fors_height(),
            fors_count: candidate.fors_count(),
            cap_bits: f64::from(security_level_bits),
            next: log_signatures.saturating_sub(1).saturating_mul(100),
            end: ceiling
                .saturating_add(CURVE_TAIL_EXPONENTS)
                .saturating_mul(100),
            done: false,
        }
    }
}

impl<M: SecurityModel> Iterator for SecurityCurve<M> {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        if self.done || self.next >= self.end {
            return None;
        }
        let exponent = f64::from(self.next) / 100.0;
        let bits = self.model.security_bits(
            exponent,
            self.hypertree_height,
            self.fors_height,
            self.fors_count,
        );
        if bits < CURVE_FLOOR_BITS {
            self.done = true;
            return None;
        }
        self.next += 1;
        Some(CurvePoint {
            exponent,
            bits: bits.min(self.cap_bits),
        })
    }
}
