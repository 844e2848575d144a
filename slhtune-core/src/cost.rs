//! Hash-count and size model of a SPHINCS+ parameter set.
//!
//! Costs are counted in hash-function invocations. The top-most WOTS+
//! compression and the FORS root compression are each counted as a single
//! hash, which slightly understates them for long inputs but does not change
//! the ranking between parameter sets.

/// Return `a / b`, rounded up.
#[must_use]
pub const fn div_round_up(a: u32, b: u32) -> u32 {
    (a + b - 1) / b
}

/// Hash output size in bytes for a security level.
#[must_use]
pub const fn hash_size_bytes(security_level_bits: u32) -> u32 {
    div_round_up(security_level_bits, 8)
}

/// Public key size in bytes: `PK.seed` and `PK.root`.
#[must_use]
pub const fn public_key_bytes(security_level_bits: u32) -> u32 {
    2 * hash_size_bytes(security_level_bits)
}

/// NIST security category for a level: 1 at 128 bits, 3 at 192, 5 at 256.
#[must_use]
pub const fn nist_category(security_level_bits: u32) -> i64 {
    (security_level_bits / 64) as i64 * 2 - 3
}

/// log2 of a Winternitz base (which must be a power of two).
#[must_use]
pub const fn log2_w(w: u32) -> u32 {
    debug_assert!(w.is_power_of_two() && w >= 2);
    w.trailing_zeros()
}

/// Winternitz digit count split into message and checksum digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WinternitzDigits {
    /// Digits needed to express a hash of `security_level_bits` bits.
    pub message: u32,
    /// Digits needed to express the largest possible checksum.
    pub checksum: u32,
}

impl WinternitzDigits {
    /// Compute the digit split for a security level and Winternitz base.
    ///
    /// The checksum bounds the digit-sum `(w - 1) * message`, so it needs the
    /// smallest `c >= 1` with `w^c >= (w - 1) * message` digits.
    #[must_use]
    pub fn new(security_level_bits: u32, w: u32) -> Self {
        let message = div_round_up(security_level_bits, log2_w(w));

        let max_sum = u64::from(w - 1) * u64::from(message);
        let mut checksum = 1;
        let mut capacity = u64::from(w);
        while capacity < max_sum {
            checksum += 1;
            capacity *= u64::from(w);
        }

        Self { message, checksum }
    }

    /// Total number of Winternitz chains (`len` in FIPS 205).
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.message + self.checksum
    }
}

/// Total Winternitz digit count for a security level and base.
#[must_use]
pub fn winternitz_digits(security_level_bits: u32, w: u32) -> u32 {
    WinternitzDigits::new(security_level_bits, w).total()
}

/// Hashes needed to derive one WOTS+ public key.
///
/// Covers the seed expansion of each chain, walking every chain to its end,
/// and the final compression: `1 + digits * w`.
#[must_use]
pub fn one_time_key_cost(security_level_bits: u32, w: u32) -> u64 {
    1 + u64::from(winternitz_digits(security_level_bits, w)) * u64::from(w)
}

/// Hashes needed to rebuild one Merkle subtree layer: every WOTS+ key plus
/// the `2^h' - 1` internal nodes.
#[must_use]
pub fn subtree_layer_cost(one_time_key_cost: u64, merkle_height: u32) -> u64 {
    let leaves = 1u64 << merkle_height;
    (one_time_key_cost + 1) * leaves - 1
}

/// Hashes spent on the hypertree during one signature.
#[must_use]
pub fn hypertree_sign_cost(one_time_key_cost: u64, merkle_height: u32, subtree_count: u32) -> u64 {
    u64::from(subtree_count) * subtree_layer_cost(one_time_key_cost, merkle_height)
}

/// Hashes needed to build one FORS tree of height `a`: secret leaf
/// derivation, leaf hashing, and the `2^a - 1` internal nodes.
#[must_use]
pub const fn fors_tree_cost(fors_height: u32) -> u64 {
    3 * (1u64 << fors_height) - 1
}
