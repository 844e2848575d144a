//! Stable bottom-up merge sort over owned sequences.
//!
//! Chains can hold millions of candidates that are moved, never copied, so
//! the sort consumes its input and merges runs by moving elements. Runs are
//! kept in bins where bin `i` is either empty or holds a sorted run of
//! exactly `2^i` elements, like the digits of a binary counter.

use core::cmp::Ordering;
use core::mem;

use slhtune_core::Candidate;

/// Sort `items` by `cmp`, keeping equal elements in input order.
///
/// Runs in `O(n log n)` comparisons.
pub fn merge_sort_by<T, F>(items: Vec<T>, mut cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Later input always sits in lower bins.
    let mut bins: Vec<Vec<T>> = Vec::new();

    for item in items {
        let mut run = vec![item];
        let mut level = 0;
        loop {
            match bins.get_mut(level) {
                None => {
                    bins.push(run);
                    break;
                }
                Some(bin) if bin.is_empty() => {
                    *bin = run;
                    break;
                }
                Some(bin) => {
                    let earlier = mem::take(bin);
                    run = merge(earlier, run, &mut cmp);
                    level += 1;
                }
            }
        }
    }

    bins.into_iter()
        .fold(Vec::new(), |later, earlier| merge(earlier, later, &mut cmp))
}

/// Merge two sorted runs. On ties the element from `earlier` goes first.
fn merge<T, F>(earlier: Vec<T>, later: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if earlier.is_empty() {
        return later;
    }
    if later.is_empty() {
        return earlier;
    }

    let mut out = Vec::with_capacity(earlier.len() + later.len());
    let mut left = earlier.into_iter().peekable();
    let mut right = later.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        out.extend(if take_left { left.next() } else { right.next() });
    }
    out
}

/// Sort one chain best-first by [`Candidate::rank_cmp`].
pub fn sort_chain(chain: Vec<Candidate>) -> Vec<Candidate> {
    merge_sort_by(chain, Candidate::rank_cmp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        assert!(merge_sort_by(Vec::<u32>::new(), u32::cmp).is_empty());
        assert_eq!(merge_sort_by(vec![7], u32::cmp), vec![7]);
    }

    #[test]
    fn test_sorts_non_power_of_two_lengths() {
        for len in [2usize, 3, 5, 7, 13, 100, 1000] {
            let input: Vec<u64> = (0..len as u64).map(|i| (i * 7919) % 101).collect();
            let mut expected = input.clone();
            expected.sort_unstable();
            assert_eq!(merge_sort_by(input, u64::cmp), expected, "len = {len}");
        }
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let input: Vec<(u8, usize)> = [3u8, 1, 3, 2, 1, 3, 2, 1, 1]
            .into_iter()
            .enumerate()
            .map(|(i, key)| (key, i))
            .collect();
        let sorted = merge_sort_by(input, |x, y| x.0.cmp(&y.0));
        let positions: Vec<usize> = sorted.iter().map(|&(_, i)| i).collect();
        assert_eq!(positions, vec![1, 4, 7, 8, 3, 6, 0, 2, 5]);
    }

    #[test]
    fn test_sort_chain_orders_by_rank() {
        use slhtune_core::{Costs, Shape};

        let shape = Shape {
            winternitz_w: 16,
            merkle_height: 4,
            subtree_count: 4,
            fors_height: 8,
            fors_count: 10,
        };
        let with = |size, sign, verify| {
            Candidate::with_costs(
                shape,
                Costs {
                    signature_size_bytes: size,
                    sign_time_hashes: sign,
                    verify_time_hashes: verify,
                },
            )
        };
        let sorted = sort_chain(vec![with(10, 5, 5), with(9, 9, 9), with(10, 4, 6), with(10, 4, 1)]);
        let costs: Vec<(u64, u64, u64)> = sorted
            .iter()
            .map(|c| (c.signature_size_bytes(), c.sign_time_hashes(), c.verify_time_hashes()))
            .collect();
        assert_eq!(costs, vec![(9, 9, 9), (10, 4, 1), (10, 4, 6), (10, 5, 5)]);
    }
}
