//! Pareto-style selection across the three Winternitz classes.
//!
//! The three sorted chains are walked together, always taking the best head.
//! A candidate is kept only if it tolerates more overuse than anything already
//! kept from its own class or an easier one; a kept candidate raises that bar
//! for its class and every harder class.

use core::fmt;
use core::iter::Peekable;

use slhtune_core::{Candidate, ClassChains, SecurityModel, WinternitzClass};
use tracing::{debug, info, trace};

/// How many signatures a parameter set tolerates before falling below the
/// overuse target, as hundredths of the log2 of the count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OveruseScore(u32);

impl OveruseScore {
    /// Score of zero, below every kept candidate.
    pub const ZERO: Self = Self(0);

    /// Wrap a count of hundredths.
    #[must_use]
    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    /// Raw hundredths.
    #[must_use]
    pub const fn hundredths(self) -> u32 {
        self.0
    }

    /// Whole part of the exponent.
    #[must_use]
    pub const fn whole(self) -> u32 {
        self.0 / 100
    }

    /// Fractional part of the exponent, in hundredths.
    #[must_use]
    pub const fn fraction(self) -> u32 {
        self.0 % 100
    }

    /// The exponent as a float.
    #[must_use]
    pub fn exponent(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// How many times the `2^log_signatures` design volume can be issued
    /// before security drops below the overuse target, rounded down.
    #[must_use]
    pub fn safety_factor(self, log_signatures: u32) -> u64 {
        (self.exponent() - f64::from(log_signatures)).exp2() as u64
    }
}

impl fmt::Display for OveruseScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.whole(), self.fraction())
    }
}

/// A kept candidate with the score that earned it a place.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    /// The parameter set.
    pub candidate: Candidate,
    /// Its overuse resilience.
    pub overuse: OveruseScore,
}

type Head = Peekable<std::vec::IntoIter<Candidate>>;

/// Class whose next candidate ranks best. Ties go to the easier class.
fn best_head(heads: &mut [Head; 3]) -> Option<WinternitzClass> {
    let mut best: Option<(WinternitzClass, &Candidate)> = None;
    for (class, head) in WinternitzClass::ALL.into_iter().zip(heads.iter_mut()) {
        if let Some(candidate) = head.peek() {
            if best.map_or(true, |(_, current)| candidate.rank_cmp(current).is_lt()) {
                best = Some((class, candidate));
            }
        }
    }
    best.map(|(class, _)| class)
}

/// Walk three chains sorted best-first and keep the candidates that are not
/// dominated in overuse resilience by a better-ranked one of the same or an
/// easier class.
///
/// `overuse_target_bits` is the level the overuse score is measured against.
/// Once a kept candidate's score reaches `overuse_ceiling` whole exponents,
/// its class and every harder class stop contributing.
///
/// Output is in best-first order, and every candidate not returned is
/// dropped.
pub fn select<M: SecurityModel + ?Sized>(
    chains: ClassChains,
    overuse_target_bits: f64,
    overuse_ceiling: Option<u32>,
    model: &M,
) -> Vec<Selection> {
    let total = chains.len();
    let mut heads: [Head; 3] = chains.into_inner().map(|chain| chain.into_iter().peekable());
    let mut thresholds = [OveruseScore::ZERO; 3];
    let mut cut_off = [false; 3];
    let mut selected = Vec::new();

    while let Some(class) = best_head(&mut heads) {
        let Some(candidate) = heads[class.index()].next() else {
            break;
        };
        if cut_off[class.index()] {
            continue;
        }

        let overuse = OveruseScore::from_hundredths(model.max_signatures_at_level(
            overuse_target_bits,
            candidate.hypertree_height(),
            candidate.fors_height(),
            candidate.fors_count(),
        ));
        if overuse <= thresholds[class.index()] {
            trace!(%class, %overuse, "dominated");
            continue;
        }

        let reached_ceiling = overuse_ceiling.is_some_and(|ceiling| overuse.whole() >= ceiling);
        for harder in class.and_harder() {
            let i = harder.index();
            thresholds[i] = thresholds[i].max(overuse);
            cut_off[i] |= reached_ceiling;
        }
        debug!(
            %class,
            %overuse,
            signature_size_bytes = candidate.signature_size_bytes(),
            reached_ceiling,
            "selected"
        );
        selected.push(Selection { candidate, overuse });

        // Every class is now cut off
        if cut_off[WinternitzClass::Standard.index()] {
            break;
        }
    }

    info!(considered = total, selected = selected.len(), "selection complete");
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use slhtune_core::{Costs, Shape};

    /// Scores a candidate by its FORS count, so tests choose overuse directly.
    struct ScoreByForsCount;

    impl SecurityModel for ScoreByForsCount {
        fn security_bits(&self, _: f64, _: u32, _: u32, _: u32) -> f64 {
            0.0
        }

        fn max_signatures_at_level(&self, _: f64, _: u32, _: u32, k: u32) -> u32 {
            k
        }
    }

    fn candidate(w: u32, size: u64, overuse: u32) -> Candidate {
        Candidate::with_costs(
            Shape {
                winternitz_w: w,
                merkle_height: 4,
                subtree_count: 4,
                fors_height: 8,
                fors_count: overuse,
            },
            Costs {
                signature_size_bytes: size,
                sign_time_hashes: 1,
                verify_time_hashes: 1,
            },
        )
    }

    fn chains(candidates: Vec<Candidate>) -> ClassChains {
        let mut chains = ClassChains::new();
        for c in candidates {
            chains.push(c).unwrap();
        }
        chains
    }

    fn picked(selected: &[Selection]) -> Vec<(u32, u64, u32)> {
        selected
            .iter()
            .map(|s| (s.candidate.winternitz_w(), s.candidate.signature_size_bytes(), s.overuse.hundredths()))
            .collect()
    }

    #[test]
    fn test_score_formatting() {
        let score = OveruseScore::from_hundredths(6789);
        assert_eq!(score.whole(), 67);
        assert_eq!(score.fraction(), 89);
        assert_eq!(score.to_string(), "67.89");
        assert_eq!(OveruseScore::from_hundredths(7005).to_string(), "70.05");
        assert_eq!(OveruseScore::from_hundredths(6700).safety_factor(64), 8);
        assert_eq!(OveruseScore::from_hundredths(6789).safety_factor(64), 14);
        assert_eq!(OveruseScore::from_hundredths(6000).safety_factor(64), 0);
    }

    #[test]
    fn test_keeps_only_improving_scores_within_a_class() {
        let input = chains(vec![
            candidate(16, 100, 500),
            candidate(16, 110, 400),
            candidate(16, 120, 500),
            candidate(16, 130, 600),
        ]);
        let selected = select(input, 96.0, None, &ScoreByForsCount);
        assert_eq!(picked(&selected), vec![(16, 100, 500), (16, 130, 600)]);
    }

    #[test]
    fn test_easier_class_raises_bar_for_harder() {
        let input = chains(vec![
            candidate(16, 100, 500),
            candidate(8, 105, 450),
            candidate(4, 110, 700),
            candidate(16, 120, 650),
            candidate(8, 125, 800),
        ]);
        let selected = select(input, 96.0, None, &ScoreByForsCount);
        // 650 from w=16 is still kept: only w=16 picks raise the w=16 bar.
        assert_eq!(
            picked(&selected),
            vec![(16, 100, 500), (4, 110, 700), (16, 120, 650), (8, 125, 800)]
        );
    }

    #[test]
    fn test_harder_class_never_gates_easier() {
        let input = chains(vec![
            candidate(8, 100, 900),
            candidate(256, 105, 800),
            candidate(16, 110, 600),
            candidate(8, 120, 850),
        ]);
        let selected = select(input, 96.0, None, &ScoreByForsCount);
        assert_eq!(
            picked(&selected),
            vec![(8, 100, 900), (256, 105, 800), (16, 110, 600)]
        );
    }

    #[test]
    fn test_ties_go_to_easier_class() {
        let input = chains(vec![candidate(8, 100, 500), candidate(16, 100, 500)]);
        let selected = select(input, 96.0, None, &ScoreByForsCount);
        assert_eq!(picked(&selected), vec![(16, 100, 500)]);
    }

    #[test]
    fn test_ceiling_cuts_off_class_and_harder() {
        let input = chains(vec![
            candidate(4, 100, 1200),
            candidate(8, 105, 1300),
            candidate(16, 110, 1400),
            candidate(16, 120, 1500),
            candidate(4, 130, 1600),
        ]);
        let selected = select(input, 96.0, Some(12), &ScoreByForsCount);
        // w=4 reached 12 and cut off classes 1 and 2; w=16 reached 14 and ended the walk
        assert_eq!(picked(&selected), vec![(4, 100, 1200), (16, 110, 1400)]);
    }

    #[test]
    fn test_zero_score_is_never_kept() {
        let input = chains(vec![candidate(16, 100, 0), candidate(16, 110, 1)]);
        let selected = select(input, 96.0, None, &ScoreByForsCount);
        assert_eq!(picked(&selected), vec![(16, 110, 1)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(select(ClassChains::new(), 96.0, Some(0), &ScoreByForsCount).is_empty());
    }
}
