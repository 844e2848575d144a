//! Exhaustive, pruned walk over the SPHINCS+ parameter space.

use slhtune_core::cost::{fors_tree_cost, one_time_key_cost, subtree_layer_cost};
use slhtune_core::limits::{
    HYPERTREE_HEADROOM_BITS, LEAF_SHORTFALL_BITS, MAX_FORS_COUNT, MAX_FORS_HEIGHT,
    MAX_MERKLE_HEIGHT, MAX_SUBTREE_COUNT, MAX_WINTERNITZ_W, MERKLE_HEADROOM_BITS,
    MIN_MERKLE_HEIGHT, MIN_WINTERNITZ_W,
};
use slhtune_core::{Candidate, ClassChains, Result, SearchConfig, SecurityModel, Shape};
use tracing::{debug, info};

/// Collect every parameter set that fits the signing budget and keeps the
/// primary security level after `2^log_signatures` signatures.
///
/// Search order, outermost first: Winternitz base, Merkle subtree height,
/// number of subtrees, FORS tree height, number of FORS trees. Each inner
/// loop stops as soon as its cost exceeds the budget, since every later value
/// of that loop costs more.
///
/// Admitted candidates are appended to the chain of their Winternitz class.
pub fn enumerate<M: SecurityModel + ?Sized>(
    config: &SearchConfig,
    model: &M,
) -> Result<ClassChains> {
    config.validate()?;

    let s = config.security_level_bits;
    let budget = config.sign_budget;
    let restrict = &config.restrictions;
    let target_bits = f64::from(s);
    let log_signatures = f64::from(config.log_signatures);
    let min_hypertree_height = i64::from(config.log_signatures) - i64::from(LEAF_SHORTFALL_BITS);
    let max_merkle_height = MAX_MERKLE_HEIGHT.min(s + MERKLE_HEADROOM_BITS);

    let mut chains = ClassChains::new();
    let mut w = MIN_WINTERNITZ_W;
    while w <= MAX_WINTERNITZ_W {
        let admitted_before = chains.len();
        let ots_cost = one_time_key_cost(s, w);

        for merkle_height in MIN_MERKLE_HEIGHT..=max_merkle_height {
            if restrict.merkle_height.is_some_and(|r| r != merkle_height) {
                continue;
            }
            let layer_cost = subtree_layer_cost(ots_cost, merkle_height);

            for subtree_count in 1..=MAX_SUBTREE_COUNT {
                let hypertree_height = subtree_count * merkle_height;
                if hypertree_height > s + HYPERTREE_HEADROOM_BITS {
                    break;
                }
                if restrict.subtree_count.is_some_and(|r| r != subtree_count) {
                    continue;
                }
                if i64::from(hypertree_height) < min_hypertree_height {
                    continue;
                }

                // Deeper hypertrees only cost more
                let hypertree_cost = u64::from(subtree_count) * layer_cost;
                if hypertree_cost >= budget {
                    break;
                }

                for fors_height in 1..=MAX_FORS_HEIGHT {
                    if restrict.fors_height.is_some_and(|r| r != fors_height) {
                        continue;
                    }
                    let tree_cost = fors_tree_cost(fors_height);

                    for fors_count in 1..=MAX_FORS_COUNT {
                        let total = hypertree_cost.saturating_add(u64::from(fors_count) * tree_cost);
                        if total > budget {
                            break;
                        }
                        if !model.meets_level(
                            log_signatures,
                            hypertree_height,
                            fors_height,
                            fors_count,
                            target_bits,
                        ) {
                            continue;
                        }

                        let shape = Shape {
                            winternitz_w: w,
                            merkle_height,
                            subtree_count,
                            fors_height,
                            fors_count,
                        };
                        chains.push(Candidate::new(s, shape))?;
                    }
                }
            }
        }

        debug!(w, admitted = chains.len() - admitted_before, "enumerated winternitz base");
        w <<= 1;
    }

    info!(
        security_level_bits = s,
        log_signatures = config.log_signatures,
        sign_budget = budget,
        admitted = chains.len(),
        "enumeration complete"
    );
    Ok(chains)
}
