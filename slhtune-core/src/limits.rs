//! Bounds of the parameter space explored by the search.
//!
//! Each bound is either a structural limit of SPHINCS+ addressing or a sanity
//! cap past which a parameter set is never competitive.

/// Smallest Winternitz base considered by the enumerator.
pub const MIN_WINTERNITZ_W: u32 = 4;

/// Largest Winternitz base considered by the enumerator.
pub const MAX_WINTERNITZ_W: u32 = 256;

/// Smallest Merkle subtree height.
pub const MIN_MERKLE_HEIGHT: u32 = 2;

/// Largest Merkle subtree height (leaf indices must fit in 32 bits).
pub const MAX_MERKLE_HEIGHT: u32 = 31;

/// Merkle subtree heights above `security level + MERKLE_HEADROOM_BITS` are skipped.
pub const MERKLE_HEADROOM_BITS: u32 = 20;

/// Largest number of stacked Merkle subtrees.
pub const MAX_SUBTREE_COUNT: u32 = 29;

/// Hypertrees taller than `security level + HYPERTREE_HEADROOM_BITS` are skipped.
pub const HYPERTREE_HEADROOM_BITS: u32 = 30;

/// Hypertrees shorter than `log2(signatures) - LEAF_SHORTFALL_BITS` cannot
/// reach the primary level and are skipped.
pub const LEAF_SHORTFALL_BITS: u32 = 5;

/// Largest FORS tree height.
pub const MAX_FORS_HEIGHT: u32 = 29;

/// Largest number of FORS trees.
pub const MAX_FORS_COUNT: u32 = 99;

/// Largest accepted security level, in bits.
pub const MAX_SECURITY_LEVEL: u32 = 512;

/// Largest accepted log2 of the signature count.
pub const MAX_LOG_SIGNATURES: u32 = 128;
