#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;
use num_traits::One;

use ecalc_core::series::accumulate;
use ecalc_core::TermRange;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Small ranges keep each iteration fast.
    let start = 1 + u64::from(u16::from_le_bytes([data[0], data[1]])) % 500;
    let len = u64::from(u16::from_le_bytes([data[2], data[3]])) % 64;
    let range = TermRange {
        start,
        end: start + len,
    };

    let fraction = accumulate(&range);

    // The denominator is always the product of the assigned range
    // (the empty product being 1).
    let product = (range.start..range.end)
        .map(BigUint::from)
        .fold(BigUint::one(), |acc, k| acc * k);
    assert_eq!(fraction.denominator, product);
});
