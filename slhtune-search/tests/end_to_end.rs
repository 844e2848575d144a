//! Full searches against the real estimator.

use slhtune_estimator::{estimate_security_bits, Estimator};
use slhtune_search::{
    enumerate, run, sort_chain, Candidate, Restrictions, SearchConfig, WinternitzClass,
};

fn small_config() -> SearchConfig {
    SearchConfig::new(128, 10, 1 << 16).with_overuse_ceiling(20)
}

#[test]
fn search_keeps_the_best_ranked_candidate_first() {
    let config = small_config();
    let report = run(&config).unwrap();
    assert!(!report.selections.is_empty());

    let chains = enumerate(&config, &Estimator::DEFAULT).unwrap().map(sort_chain);
    let best = WinternitzClass::ALL
        .into_iter()
        .filter_map(|class| chains.get(class).first())
        .min_by(|x, y| x.rank_cmp(y))
        .unwrap();
    assert_eq!(report.selections[0].candidate.shape(), best.shape());
    assert_eq!(
        report.smallest_signature(),
        Some(best.signature_size_bytes())
    );
}

#[test]
fn selections_are_secure_ordered_and_undominated() {
    let config = small_config();
    let report = run(&config).unwrap();

    for pair in report.selections.windows(2) {
        assert!(
            pair[0].candidate.signature_size_bytes() <= pair[1].candidate.signature_size_bytes()
        );
    }

    for (j, selection) in report.selections.iter().enumerate() {
        let c = &selection.candidate;
        let bits = estimate_security_bits(10.0, c.hypertree_height(), c.fors_height(), c.fors_count());
        assert!(bits >= 128.0 - 1e-6, "{c:?}: {bits}");
        assert!(c.sign_time_hashes() - 3 <= config.sign_budget);
        // Secure at 2^10 for 128 bits, so at least that for 96
        assert!(selection.overuse.whole() >= 10);

        for earlier in &report.selections[..j] {
            if earlier.candidate.class() <= c.class() {
                assert!(selection.overuse > earlier.overuse);
                assert!(earlier.overuse.whole() < 20);
            }
        }
    }
}

#[test]
fn curves_cover_design_volume_to_ceiling() {
    let report = run(&small_config()).unwrap();
    for selection in &report.selections {
        let points: Vec<_> = report.curve(selection).collect();
        assert!(!points.is_empty());
        assert!((points[0].exponent - 9.0).abs() < 1e-12);
        assert_eq!(points[0].bits, 128.0);
        let last = points[points.len() - 1];
        assert!(last.exponent < 30.0);
        assert!(last.bits >= 10.0);
    }
}

#[test]
fn restricted_search_finds_slh_dsa_128s() {
    let config = SearchConfig::new(128, 64, 1 << 22).with_restrictions(Restrictions {
        subtree_count: Some(7),
        merkle_height: Some(9),
        fors_height: Some(12),
    });
    let chains = enumerate(&config, &Estimator::DEFAULT).unwrap();
    let standard = chains.get(WinternitzClass::Standard);
    let found: Vec<&Candidate> = standard.iter().filter(|c| c.fors_count() == 14).collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].signature_size_bytes(), 7856);
    assert_eq!(found[0].message_digest_bytes(), 30);
}

#[test]
fn impossible_budget_yields_empty_report() {
    let report = run(&SearchConfig::new(128, 10, 100)).unwrap();
    assert!(report.selections.is_empty());
    assert_eq!(report.smallest_signature(), None);
}

#[test]
fn design_scale_search_leads_with_smallest_signature() {
    let config = SearchConfig::new(128, 16, 1 << 20).with_overuse_ceiling(24);
    let report = run(&config).unwrap();
    assert!(!report.selections.is_empty());
    for pair in report.selections.windows(2) {
        assert!(pair[0].candidate.rank_cmp(&pair[1].candidate).is_le());
    }

    // The lead is the best-ranked admissible set of any class, not
    // necessarily w = 16
    let chains = enumerate(&config, &Estimator::DEFAULT).unwrap();
    let best = WinternitzClass::ALL
        .into_iter()
        .flat_map(|class| chains.get(class))
        .min_by(|x, y| x.rank_cmp(y))
        .unwrap();
    assert_eq!(report.selections[0].candidate.shape(), best.shape());
}
