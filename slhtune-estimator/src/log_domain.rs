//! Arithmetic on values held as base-2 logarithms.

/// Operand gap, in bits, beyond which the smaller operand cannot change the sum.
pub const DEFAULT_LOG_ADD_CUTOFF_BITS: f64 = 64.0;

/// Given `log2(a)` and `log2(b)`, return `log2(a + b)`.
///
/// Computed as `max + log2(1 + 2^-(max - min))`, which neither overflows nor
/// underflows for any finite inputs. `-inf` (a zero operand) is an identity.
///
/// # Example
///
/// ```
/// use slhtune_estimator::log_add;
///
/// assert_eq!(log_add(3.0, 3.0), 4.0);
/// assert_eq!(log_add(0.0, f64::NEG_INFINITY), 0.0);
/// ```
#[must_use]
pub fn log_add(x: f64, y: f64) -> f64 {
    log_add_with_cutoff(x, y, DEFAULT_LOG_ADD_CUTOFF_BITS)
}

/// [`log_add`] with an explicit cutoff: when the operands differ by more than
/// `cutoff_bits`, the larger one is returned unchanged.
#[must_use]
pub fn log_add_with_cutoff(x: f64, y: f64, cutoff_bits: f64) -> f64 {
    let (big, little) = if x > y { (x, y) } else { (y, x) };
    if big > little + cutoff_bits {
        return big;
    }
    big + (1.0 + (little - big).exp2()).log2()
}
