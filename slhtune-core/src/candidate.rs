//! Candidate parameter sets and their Winternitz difficulty classes.

use core::cmp::Ordering;
use core::fmt;

use crate::cost::{
    div_round_up, fors_tree_cost, hash_size_bytes, hypertree_sign_cost, log2_w,
    one_time_key_cost, winternitz_digits,
};

/// How hard a Winternitz base is to retrofit into an existing SLH-DSA code base.
///
/// Lower classes are preferred, and a parameter set emitted from a lower class
/// raises the bar for every higher class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WinternitzClass {
    /// `w = 16`, the FIPS 205 choice.
    Standard,
    /// `w = 4` or `w = 256`: digits still split cleanly on byte boundaries.
    ByteAligned,
    /// Any other power of two; digits straddle bytes.
    Unaligned,
}

impl WinternitzClass {
    /// All classes, in preference order.
    pub const ALL: [WinternitzClass; 3] = [
        WinternitzClass::Standard,
        WinternitzClass::ByteAligned,
        WinternitzClass::Unaligned,
    ];

    /// Classify a Winternitz base.
    #[must_use]
    pub const fn of(w: u32) -> Self {
        match w {
            16 => WinternitzClass::Standard,
            4 | 256 => WinternitzClass::ByteAligned,
            _ => WinternitzClass::Unaligned,
        }
    }

    /// Position in preference order (0 is most preferred).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// This class and every class after it in preference order.
    pub fn and_harder(self) -> impl Iterator<Item = WinternitzClass> {
        Self::ALL.into_iter().skip(self.index())
    }
}

impl fmt::Display for WinternitzClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinternitzClass::Standard => write!(f, "w=16"),
            WinternitzClass::ByteAligned => write!(f, "w=4,256"),
            WinternitzClass::Unaligned => write!(f, "w=2,8,32,64,128"),
        }
    }
}

/// Structural choices of a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    /// Winternitz base.
    pub winternitz_w: u32,
    /// Height `h'` of each Merkle subtree.
    pub merkle_height: u32,
    /// Number `d` of stacked Merkle subtrees.
    pub subtree_count: u32,
    /// Height `a` of each FORS tree.
    pub fors_height: u32,
    /// Number `k` of FORS trees.
    pub fors_count: u32,
}

impl Shape {
    /// Total hypertree height `h = d * h'`.
    #[must_use]
    pub const fn hypertree_height(&self) -> u32 {
        self.subtree_count * self.merkle_height
    }
}

/// Derived costs of a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Costs {
    /// Signature size in bytes.
    pub signature_size_bytes: u64,
    /// Hash invocations to sign.
    pub sign_time_hashes: u64,
    /// Hash invocations to verify.
    pub verify_time_hashes: u64,
}

impl Costs {
    /// Evaluate the cost model for a shape at a security level.
    #[must_use]
    pub fn evaluate(security_level_bits: u32, shape: &Shape) -> Self {
        let n = u64::from(hash_size_bytes(security_level_bits));
        let w = u64::from(shape.winternitz_w);
        let wd = u64::from(winternitz_digits(security_level_bits, shape.winternitz_w));
        let h_prime = u64::from(shape.merkle_height);
        let d = u64::from(shape.subtree_count);
        let a = u64::from(shape.fors_height);
        let k = u64::from(shape.fors_count);

        let ots = one_time_key_cost(security_level_bits, shape.winternitz_w);
        let hypertree = hypertree_sign_cost(ots, shape.merkle_height, shape.subtree_count);

        Self {
            // R, then k FORS paths with their leaves, then d WOTS+ signatures with auth paths
            signature_size_bytes: n * (1 + k * (a + 1) + d * (wd + h_prime)),
            // PRF_msg, H_msg and the FORS root compression, then tree building
            sign_time_hashes: 3 + hypertree + k * fors_tree_cost(shape.fors_height),
            // H_msg, k FORS paths, FORS root, then per layer half of every
            // chain on average, the WOTS+ compression and the auth path
            verify_time_hashes: 1 + k * (a + 1) + 1 + d * (wd * w / 2 + 1 + h_prime),
        }
    }
}

/// A parameter set that met the primary security level, with its costs.
///
/// Candidates are deliberately not `Clone`: each one is owned by exactly one
/// stage of the pipeline at a time and moves from chain to chain.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    shape: Shape,
    costs: Costs,
}

impl Candidate {
    /// Build a candidate, evaluating the cost model.
    #[must_use]
    pub fn new(security_level_bits: u32, shape: Shape) -> Self {
        let costs = Costs::evaluate(security_level_bits, &shape);
        Self { shape, costs }
    }

    /// Build a candidate from costs computed elsewhere.
    #[must_use]
    pub const fn with_costs(shape: Shape, costs: Costs) -> Self {
        Self { shape, costs }
    }

    /// Structural choices.
    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Height `h'` of one Merkle subtree.
    #[must_use]
    pub const fn merkle_height(&self) -> u32 {
        self.shape.merkle_height
    }

    /// Total hypertree height `h`.
    #[must_use]
    pub const fn hypertree_height(&self) -> u32 {
        self.shape.hypertree_height()
    }

    /// Number `d` of Merkle subtree layers.
    #[must_use]
    pub const fn subtree_count(&self) -> u32 {
        self.shape.subtree_count
    }

    /// FORS tree height `a`.
    #[must_use]
    pub const fn fors_height(&self) -> u32 {
        self.shape.fors_height
    }

    /// Number `k` of FORS trees.
    #[must_use]
    pub const fn fors_count(&self) -> u32 {
        self.shape.fors_count
    }

    /// Winternitz base `w`.
    #[must_use]
    pub const fn winternitz_w(&self) -> u32 {
        self.shape.winternitz_w
    }

    /// log2 of the Winternitz base.
    #[must_use]
    pub const fn log_w(&self) -> u32 {
        log2_w(self.shape.winternitz_w)
    }

    /// Winternitz difficulty class.
    #[must_use]
    pub const fn class(&self) -> WinternitzClass {
        WinternitzClass::of(self.shape.winternitz_w)
    }

    /// Signature size in bytes.
    #[must_use]
    pub const fn signature_size_bytes(&self) -> u64 {
        self.costs.signature_size_bytes
    }

    /// Hash invocations to sign.
    #[must_use]
    pub const fn sign_time_hashes(&self) -> u64 {
        self.costs.sign_time_hashes
    }

    /// Hash invocations to verify.
    #[must_use]
    pub const fn verify_time_hashes(&self) -> u64 {
        self.costs.verify_time_hashes
    }

    /// Bytes of message digest consumed: tree index, leaf index, FORS indices.
    #[must_use]
    pub const fn message_digest_bytes(&self) -> u32 {
        let h = self.hypertree_height();
        let h_prime = self.shape.merkle_height;
        div_round_up(h - h_prime, 8)
            + div_round_up(h_prime, 8)
            + div_round_up(self.shape.fors_height * self.shape.fors_count, 8)
    }

    /// Best-first ordering: smaller signatures first, then faster signing,
    /// then faster verification.
    ///
    /// Returns [`Ordering::Less`] when `self` is the better candidate.
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.costs
            .signature_size_bytes
            .cmp(&other.costs.signature_size_bytes)
            .then(self.costs.sign_time_hashes.cmp(&other.costs.sign_time_hashes))
            .then(self.costs.verify_time_hashes.cmp(&other.costs.verify_time_hashes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape_128s() -> Shape {
        // SLH-DSA-SHAKE-128s
        Shape {
            winternitz_w: 16,
            merkle_height: 9,
            subtree_count: 7,
            fors_height: 12,
            fors_count: 14,
        }
    }

    #[test]
    fn test_classes() {
        assert_eq!(WinternitzClass::of(16), WinternitzClass::Standard);
        assert_eq!(WinternitzClass::of(4), WinternitzClass::ByteAligned);
        assert_eq!(WinternitzClass::of(256), WinternitzClass::ByteAligned);
        for w in [2, 8, 32, 64, 128] {
            assert_eq!(WinternitzClass::of(w), WinternitzClass::Unaligned);
        }
        assert_eq!(
            WinternitzClass::ByteAligned.and_harder().collect::<Vec<_>>(),
            vec![WinternitzClass::ByteAligned, WinternitzClass::Unaligned]
        );
    }

    #[test]
    fn test_signature_size_matches_fips205_128s() {
        let c = Candidate::new(128, shape_128s());
        assert_eq!(c.hypertree_height(), 63);
        assert_eq!(c.signature_size_bytes(), 7856);
    }

    #[test]
    fn test_cost_formulas() {
        let c = Candidate::new(128, shape_128s());
        let ots = 1 + 35 * 16;
        let layer = (ots + 1) * 512 - 1;
        assert_eq!(c.sign_time_hashes(), 3 + 7 * layer + 14 * (3 * 4096 - 1));
        assert_eq!(c.verify_time_hashes(), 1 + 14 * 13 + 1 + 7 * (35 * 8 + 1 + 9));
    }

    #[test]
    fn test_message_digest_bytes() {
        // ceil(54/8) + ceil(9/8) + ceil(168/8)
        let c = Candidate::new(128, shape_128s());
        assert_eq!(c.message_digest_bytes(), 7 + 2 + 21);
    }

    #[test]
    fn test_rank_cmp_is_lexicographic() {
        let shape = shape_128s();
        let make = |size, sign, verify| {
            Candidate::with_costs(
                shape,
                Costs {
                    signature_size_bytes: size,
                    sign_time_hashes: sign,
                    verify_time_hashes: verify,
                },
            )
        };

        assert_eq!(make(10, 99, 99).rank_cmp(&make(11, 1, 1)), Ordering::Less);
        assert_eq!(make(10, 5, 99).rank_cmp(&make(10, 6, 1)), Ordering::Less);
        assert_eq!(make(10, 5, 7).rank_cmp(&make(10, 5, 6)), Ordering::Greater);
        assert_eq!(make(10, 5, 6).rank_cmp(&make(10, 5, 6)), Ordering::Equal);
    }
}
