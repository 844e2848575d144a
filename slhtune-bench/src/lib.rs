//! Shared fixtures for the slhtune benchmarks.

use slhtune::search::SearchConfig;

/// A FIPS 205 parameter set, by the fields the estimator reads.
#[derive(Debug, Clone, Copy)]
pub struct ParameterSet {
    /// Display name.
    pub name: &'static str,
    /// Hypertree height `h`.
    pub hypertree_height: u32,
    /// FORS tree height `a`.
    pub fors_height: u32,
    /// Number `k` of FORS trees.
    pub fors_count: u32,
}

/// The six SLH-DSA-SHAKE sets, all rated for `2^64` signatures.
pub const FIPS205_SETS: [ParameterSet; 6] = [
    ParameterSet { name: "SLH-DSA-SHAKE-128s", hypertree_height: 63, fors_height: 12, fors_count: 14 },
    ParameterSet { name: "SLH-DSA-SHAKE-128f", hypertree_height: 66, fors_height: 6, fors_count: 33 },
    ParameterSet { name: "SLH-DSA-SHAKE-192s", hypertree_height: 63, fors_height: 14, fors_count: 17 },
    ParameterSet { name: "SLH-DSA-SHAKE-192f", hypertree_height: 66, fors_height: 8, fors_count: 33 },
    ParameterSet { name: "SLH-DSA-SHAKE-256s", hypertree_height: 64, fors_height: 14, fors_count: 22 },
    ParameterSet { name: "SLH-DSA-SHAKE-256f", hypertree_height: 68, fors_height: 9, fors_count: 35 },
];

/// Design volume of every FIPS 205 set, as log2 of the signature count.
pub const FIPS205_LOG_SIGNATURES: f64 = 64.0;

/// Searches small enough to finish in a benchmark iteration.
pub fn search_configs() -> Vec<(&'static str, SearchConfig)> {
    vec![
        ("128-bit 2^10 sigs", SearchConfig::new(128, 10, 1 << 16).with_overuse_ceiling(20)),
        ("128-bit 2^20 sigs", SearchConfig::new(128, 20, 1 << 18).with_overuse_ceiling(30)),
        ("192-bit 2^16 sigs", SearchConfig::new(192, 16, 1 << 18).with_overuse_ceiling(26)),
    ]
}
