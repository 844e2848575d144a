//! Property-based tests for the sorter and the selector using proptest.
//!
//! These tests verify:
//! - The merge sort returns a sorted permutation of its input
//! - Equal keys keep their input order
//! - Selection output is best-first and never dominated
//! - Every dropped candidate is dominated by a kept one

use proptest::prelude::*;
use slhtune_search::{
    merge_sort_by, select, sort_chain, Candidate, ClassChains, Costs, SecurityModel, Shape,
    WinternitzClass,
};

/// Reads the overuse score out of the FORS count, so inputs pick it directly.
struct ScoreByForsCount;

impl SecurityModel for ScoreByForsCount {
    fn security_bits(&self, _: f64, _: u32, _: u32, _: u32) -> f64 {
        0.0
    }

    fn max_signatures_at_level(&self, _: f64, _: u32, _: u32, k: u32) -> u32 {
        k
    }
}

const BASES: [u32; 8] = [2, 4, 8, 16, 32, 64, 128, 256];

/// (Winternitz base, signature size, overuse score)
fn arb_candidates() -> impl Strategy<Value = Vec<(u32, u64, u32)>> {
    prop::collection::vec(
        (prop::sample::select(BASES.to_vec()), 1000u64..1100, 0u32..3000),
        0..200,
    )
}

/// The candidate's subtree count doubles as its id.
fn build(id: usize, (w, size, score): (u32, u64, u32)) -> Candidate {
    Candidate::with_costs(
        Shape {
            winternitz_w: w,
            merkle_height: 4,
            subtree_count: id as u32,
            fors_height: 8,
            fors_count: score,
        },
        Costs {
            signature_size_bytes: size,
            sign_time_hashes: 1,
            verify_time_hashes: 1,
        },
    )
}

fn sorted_chains(specs: &[(u32, u64, u32)]) -> ClassChains {
    let mut chains = ClassChains::new();
    for (id, &spec) in specs.iter().enumerate() {
        chains.push(build(id, spec)).unwrap();
    }
    chains.map(sort_chain)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn sort_is_a_sorted_permutation(input in prop::collection::vec(any::<u16>(), 0..500)) {
        let mut expected = input.clone();
        expected.sort_unstable();
        prop_assert_eq!(merge_sort_by(input, u16::cmp), expected);
    }

    #[test]
    fn sort_is_stable(keys in prop::collection::vec(0u8..8, 0..500)) {
        let tagged: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();
        let sorted = merge_sort_by(tagged, |x, y| x.0.cmp(&y.0));
        prop_assert_eq!(sorted.len(), keys.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].0 <= pair[1].0);
            if pair[0].0 == pair[1].0 {
                prop_assert!(pair[0].1 < pair[1].1);
            }
        }
    }

    #[test]
    fn selection_is_best_first_and_undominated(specs in arb_candidates()) {
        let selected = select(sorted_chains(&specs), 96.0, None, &ScoreByForsCount);

        for pair in selected.windows(2) {
            prop_assert!(pair[0].candidate.rank_cmp(&pair[1].candidate).is_le());
        }
        for (j, later) in selected.iter().enumerate() {
            prop_assert!(later.overuse.hundredths() > 0);
            for earlier in &selected[..j] {
                if earlier.candidate.class() <= later.candidate.class() {
                    prop_assert!(later.overuse > earlier.overuse);
                }
            }
        }
    }

    #[test]
    fn dropped_candidates_are_dominated(specs in arb_candidates()) {
        let selected = select(sorted_chains(&specs), 96.0, None, &ScoreByForsCount);
        let kept: Vec<usize> = selected.iter().map(|s| s.candidate.subtree_count() as usize).collect();

        for (id, &(w, size, score)) in specs.iter().enumerate() {
            if kept.contains(&id) || score == 0 {
                continue;
            }
            let class = WinternitzClass::of(w);
            let dominated = selected.iter().any(|s| {
                s.candidate.class() <= class
                    && s.candidate.signature_size_bytes() <= size
                    && s.overuse.hundredths() >= score
            });
            prop_assert!(dominated, "candidate {} ({}, {}, {}) dropped without cause", id, w, size, score);
        }
    }

    #[test]
    fn ceiling_stops_class_and_harder(specs in arb_candidates(), ceiling in 0u32..30) {
        let selected = select(sorted_chains(&specs), 96.0, Some(ceiling), &ScoreByForsCount);
        for (j, later) in selected.iter().enumerate() {
            for earlier in &selected[..j] {
                if earlier.candidate.class() <= later.candidate.class() {
                    prop_assert!(earlier.overuse.whole() < ceiling);
                }
            }
        }
    }
}
