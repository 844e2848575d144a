#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use slhtune_estimator::{estimate_security_bits, max_signatures_at_level};

#[derive(Debug, Arbitrary)]
struct ScanInput {
    target_bits: u8,
    hypertree_height: u8,
    fors_height: u8,
    fors_count: u8,
}

fuzz_target!(|input: ScanInput| {
    let h = u32::from(input.hypertree_height.clamp(1, 90));
    let a = u32::from(input.fors_height.clamp(1, 29));
    let k = u32::from(input.fors_count.clamp(1, 99));
    let target = f64::from(input.target_bits);

    // Must terminate for any target, including 0
    let v = max_signatures_at_level(target, h, a, k);

    if target > 0.0 && estimate_security_bits(0.0, h, a, k) >= target {
        let past = estimate_security_bits(f64::from(v + 1) / 100.0, h, a, k);
        assert!(past < target, "scan stopped early for {input:?}: v = {v}");
    }
});
