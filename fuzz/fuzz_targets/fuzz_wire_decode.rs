#![no_main]

use libfuzzer_sys::fuzz_target;

use ecalc_core::wire;

fuzz_target!(|data: &[u8]| {
    if data.len() < 24 {
        return;
    }
    let precision = u64::from_le_bytes(data[0..8].try_into().unwrap());
    let signed_limbs = i64::from_le_bytes(data[8..16].try_into().unwrap());
    let exponent = i64::from_le_bytes(data[16..24].try_into().unwrap());
    let payload = &data[24..];

    // Arbitrary frames must never panic; a valid decode must re-encode
    // to the same value.
    if let Ok(value) = wire::decode(precision, signed_limbs, exponent, payload) {
        let frames = wire::encode(&value);
        let header = |i: usize| u64::from_le_bytes(frames[i].as_slice().try_into().unwrap());
        let back = wire::decode(
            header(0),
            header(1) as i64,
            header(2) as i64,
            &frames[4],
        )
        .expect("re-encoded frames must decode");
        assert_eq!(back, value);
    }
});
