#![no_main]
use json_bigint::BigInt;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let (partial, consumed) = BigInt::parse_partial(data, 10);
    assert!(consumed <= data.len());

    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(n) = BigInt::parse(s) {
            assert_eq!(consumed, data.len());
            assert_eq!(n, partial);
            assert_eq!(BigInt::parse(&n.to_string()).unwrap(), n);
            assert_eq!(BigInt::parse_radix(&n.to_string_hex(), 16).unwrap(), n);
        }
    }
});
