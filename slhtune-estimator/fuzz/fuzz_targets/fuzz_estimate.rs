#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use slhtune_estimator::{estimate_security_bits, meets_security_level};

#[derive(Debug, Arbitrary)]
struct EstimateInput {
    log_signatures: f64,
    hypertree_height: u8,
    fors_height: u8,
    fors_count: u8,
    target_bits: u16,
}

fuzz_target!(|input: EstimateInput| {
    if !input.log_signatures.is_finite() {
        return;
    }

    // Legal domain: every structural parameter at least 1
    let h = u32::from(input.hypertree_height.max(1));
    let a = u32::from(input.fors_height.clamp(1, 29));
    let k = u32::from(input.fors_count.max(1));

    // Must terminate and never produce NaN or infinity
    let bits = estimate_security_bits(input.log_signatures, h, a, k);
    assert!(bits.is_finite(), "non-finite estimate for {input:?}");
    assert!(bits >= 0.0, "negative estimate for {input:?}");

    // The fast check must agree away from the boundary
    let target = f64::from(input.target_bits);
    if (bits - target).abs() > 0.01 {
        assert_eq!(
            meets_security_level(input.log_signatures, h, a, k, target),
            bits >= target,
            "fast check disagrees for {input:?}"
        );
    }
});
