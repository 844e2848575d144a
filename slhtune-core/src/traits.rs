//! Security model trait.

/// A model of SPHINCS+ security under a given signing volume.
///
/// The enumerator uses it as an admission test and the selector uses it to
/// score overuse resilience. Implementations must be pure: the same inputs
/// always produce the same outputs, and no call may observe another.
///
/// # Example
///
/// ```ignore
/// use slhtune_core::SecurityModel;
///
/// let model = Estimator::default();
/// let bits = model.security_bits(64.0, 64, 12, 14);
/// assert!(model.meets_level(64.0, 64, 12, 14, 128.0) == (bits >= 128.0));
/// ```
pub trait SecurityModel {
    /// Estimated security in bits after `2^log_signatures` signatures.
    ///
    /// # Arguments
    ///
    /// * `log_signatures` - log2 of the number of signatures issued (may be fractional).
    /// * `hypertree_height` - Total hypertree height `h`.
    /// * `fors_height` - Height `a` of each FORS tree.
    /// * `fors_count` - Number `k` of FORS trees.
    fn security_bits(
        &self,
        log_signatures: f64,
        hypertree_height: u32,
        fors_height: u32,
        fors_count: u32,
    ) -> f64;

    /// Whether the estimated security is at least `target_bits`.
    ///
    /// Equivalent to `security_bits(..) >= target_bits`, but implementations
    /// are expected to answer without fully converging the estimate.
    fn meets_level(
        &self,
        log_signatures: f64,
        hypertree_height: u32,
        fors_height: u32,
        fors_count: u32,
        target_bits: f64,
    ) -> bool {
        self.security_bits(log_signatures, hypertree_height, fors_height, fors_count)
            >= target_bits
    }

    /// Largest signature count, as hundredths of its log2, that keeps the
    /// estimated security at or above `target_bits`.
    fn max_signatures_at_level(
        &self,
        target_bits: f64,
        hypertree_height: u32,
        fors_height: u32,
        fors_count: u32,
    ) -> u32;
}

impl<M: SecurityModel + ?Sized> SecurityModel for &M {
    fn security_bits(&self, log_signatures: f64, h: u32, a: u32, k: u32) -> f64 {
        (**self).security_bits(log_signatures, h, a, k)
    }

    fn meets_level(&self, log_signatures: f64, h: u32, a: u32, k: u32, target_bits: f64) -> bool {
        (**self).meets_level(log_signatures, h, a, k, target_bits)
    }

    fn max_signatures_at_level(&self, target_bits: f64, h: u32, a: u32, k: u32) -> u32 {
        (**self).max_signatures_at_level(target_bits, h, a, k)
    }
}
