#![no_main]
use json_bigint::{BigInt, Sign};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let split = data[0] as usize % data.len();
    let (a, b) = data[1..].split_at(split.min(data.len() - 1));
    let a = BigInt::from_bytes_be(if data[0] & 1 == 0 { Sign::Plus } else { Sign::Minus }, a);
    let b = BigInt::from_bytes_be(Sign::Plus, b);

    match a.div_rem(&b) {
        Ok((q, r)) => {
            assert_eq!(&q * &b + &r, a);
            assert!(r.abs() < b);
        }
        Err(_) => assert!(b.is_zero()),
    }
});
