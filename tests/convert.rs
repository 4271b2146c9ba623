use json_bigint::error::{Category, ErrorCode};
use json_bigint::{BigInt, Sign, Word};

fn big(s: &str) -> BigInt {
    BigInt::parse(s).unwrap()
}

#[test]
fn test_parse_and_format() {
    let n = big("18446744073709551616");
    assert_eq!(n.to_string(), "18446744073709551616");
    assert_eq!(n, big("18446744073709551616"));
    assert_eq!(n.to_string_hex(), "10000000000000000");

    let n = big("340282366920938463463374607431768211456");
    assert_eq!(n.to_string(), "340282366920938463463374607431768211456");
    assert_eq!(n.to_string_hex(), "100000000000000000000000000000000");

    assert_eq!("-42".parse::<BigInt>().unwrap(), -42);
    assert_eq!(big("000123"), 123);
}

#[test]
fn test_negative_zero() {
    assert_eq!(big("0"), big("-0"));
    assert_eq!(big("-0").to_string(), "0");
    assert!(!big("-000").is_negative());
}

#[test]
fn test_parse_radix() {
    assert_eq!(BigInt::parse_radix("FF", 16).unwrap(), 255);
    assert_eq!(BigInt::parse_radix("ff", 16).unwrap(), 255);
    assert_eq!(BigInt::parse_radix("-777", 8).unwrap(), -511);
    assert_eq!(
        BigInt::parse_radix(
            "1010101010101010101010101010101010101010101010101010101010101010101010",
            2
        )
        .unwrap(),
        big("787061080478274202282")
    );
    assert_eq!(
        BigInt::parse_radix("100000000000000000000000000000000", 16).unwrap(),
        big("340282366920938463463374607431768211456")
    );
}

#[test]
fn test_parse_errors() {
    let err = BigInt::parse("").unwrap_err();
    assert_eq!(*err.code(), ErrorCode::EmptyNumber);
    assert_eq!(err.classify(), Category::Syntax);

    let err = BigInt::parse("-").unwrap_err();
    assert_eq!(*err.code(), ErrorCode::EmptyNumber);
    assert_eq!(err.index(), Some(1));

    let err = BigInt::parse("12a4").unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.index(), Some(2));
    assert_eq!(
        *err.code(),
        ErrorCode::InvalidDigit {
            digit: 'a',
            radix: 10
        }
    );
    assert_eq!(err.to_string(), "invalid digit 'a' in radix 10 at index 2");

    let err = BigInt::parse("+1").unwrap_err();
    assert_eq!(err.index(), Some(0));

    let err = BigInt::parse_radix("12G", 16).unwrap_err();
    assert_eq!(err.index(), Some(2));

    let err = BigInt::parse("7\u{e9}").unwrap_err();
    assert_eq!(
        *err.code(),
        ErrorCode::InvalidDigit {
            digit: '\u{e9}',
            radix: 10
        }
    );
}

#[test]
#[should_panic(expected = "radix must be in the range 2..=16")]
fn test_parse_radix_out_of_range() {
    let _ = BigInt::parse_radix("1", 17);
}

#[test]
fn test_parse_partial() {
    assert_eq!(BigInt::parse_partial(b"123]", 10), (BigInt::from(123), 3));
    assert_eq!(BigInt::parse_partial(b"-1e5", 10), (BigInt::from(-1), 2));
    assert_eq!(BigInt::parse_partial(b"", 10), (BigInt::new(), 0));
    assert_eq!(BigInt::parse_partial(b"-", 10), (BigInt::new(), 0));
    assert_eq!(BigInt::parse_partial(b"abc", 10), (BigInt::new(), 0));
    assert_eq!(BigInt::parse_partial(b"abcz", 16), (BigInt::from(0xABC), 3));
}

#[test]
fn test_format_traits() {
    let n = BigInt::from(-255);
    assert_eq!(format!("{}", n), "-255");
    assert_eq!(format!("{:X}", n), "-FF");
    assert_eq!(format!("{:x}", n), "-ff");
    assert_eq!(format!("{:#x}", n), "-0xff");
    assert_eq!(format!("{:>6}", n), "  -255");
    assert_eq!(format!("{:08}", n), "-0000255");
    assert_eq!(format!("{:+}", BigInt::from(7)), "+7");

    let n = big("-340282366920938463463374607431768211456");
    assert_eq!(format!("{:#X}", n), "-0x100000000000000000000000000000000");
}

#[test]
fn test_hex_digits() {
    assert_eq!(BigInt::from(255).to_string_hex(), "FF");
    assert_eq!(BigInt::new().to_string_hex(), "0");
    assert_eq!(BigInt::from(-1).to_string_hex(), "-1");
}

#[test]
fn test_from_bytes_be() {
    let n = BigInt::from_bytes_be(Sign::Plus, &[1, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(n.to_string(), "18446744073709551616");
    assert_eq!(n.to_string_hex(), "10000000000000000");

    assert_eq!(BigInt::from_bytes_be(Sign::NoSign, &[0x01, 0x00]), 256);
    assert_eq!(BigInt::from_bytes_be(Sign::Minus, &[0, 0, 7]), -7);
    assert_eq!(BigInt::from_bytes_be(Sign::Minus, &[0, 0]), 0);
    assert!(!BigInt::from_bytes_be(Sign::Minus, &[0, 0]).is_negative());
}

#[test]
fn test_write_bytes_be() {
    assert_eq!(BigInt::from(256).to_bytes_be(), (Sign::Plus, vec![0x01, 0x00]));
    assert_eq!(BigInt::new().to_bytes_be(), (Sign::NoSign, vec![0x00]));
    assert_eq!(BigInt::from(-255).to_bytes_be(), (Sign::Minus, vec![0xFF]));

    let x = BigInt::from_bytes_be(Sign::Plus, &[1, 0, 0, 0, 0, 0, 0, 0, 0]);
    let y = -1i32 - &x;
    let mut bytes = Vec::new();
    assert_eq!(y.write_bytes_be(&mut bytes), Sign::Minus);
    assert_eq!(bytes, [1, 0, 0, 0, 0, 0, 0, 0, 1]);

    let n = -((BigInt::from(1) << 200) + 12345i32);
    let (sign, bytes) = n.to_bytes_be();
    assert_eq!(sign, Sign::Minus);
    assert_eq!(bytes.len(), 26);
    assert_eq!(bytes[0], 1);
    assert_eq!(&bytes[24..], &[0x30, 0x39]);
    assert_eq!(BigInt::from_bytes_be(sign, &bytes), n);
}

#[test]
fn test_native_round_trip() {
    assert_eq!(i64::try_from(&BigInt::from(i64::MIN)).unwrap(), i64::MIN);
    assert_eq!(u64::try_from(BigInt::from(u64::MAX)).unwrap(), u64::MAX);
    assert_eq!(i128::try_from(&BigInt::from(i128::MIN)).unwrap(), i128::MIN);
    assert_eq!(u128::try_from(&BigInt::from(u128::MAX)).unwrap(), u128::MAX);
    assert_eq!(i8::try_from(&BigInt::from(-128)).unwrap(), -128);
    assert_eq!(usize::try_from(&BigInt::from(7usize)).unwrap(), 7);
}

#[test]
fn test_native_out_of_range() {
    let err = u64::try_from(&BigInt::from(-1)).unwrap_err();
    assert!(err.is_range());
    assert_eq!(*err.code(), ErrorCode::NumberOutOfRange);
    assert_eq!(err.to_string(), "number out of range");

    assert!(u64::try_from(&(BigInt::from(u64::MAX) + 1)).is_err());
    assert!(i64::try_from(&(BigInt::from(i64::MAX) + 1)).is_err());
    assert!(i64::try_from(&(BigInt::from(i64::MIN) - 1)).is_err());
    assert!(i128::try_from(&(BigInt::from(i128::MIN) - 1)).is_err());
    assert!(u128::try_from(&(BigInt::from(u128::MAX) + 1)).is_err());
    assert!(i8::try_from(&BigInt::from(128)).is_err());
}

#[test]
fn test_to_f64() {
    assert_eq!(BigInt::new().to_f64(), 0.0);
    assert_eq!(BigInt::from(-12345).to_f64(), -12345.0);
    assert_eq!((BigInt::from(1) << 200).to_f64(), 1.6069380442589903e60);
    assert!((BigInt::from(1) << 2000).to_f64().is_infinite());
}

#[test]
fn test_to_f64_rounds_once() {
    // Just above the halfway point between two floats near 2^128.
    let n = (BigInt::from(1) << 128) + (BigInt::from(1) << 75) + 1i32;
    assert_eq!(n.to_f64(), 3.4028236692093854e38);
    assert_eq!((-&n).to_f64(), -3.4028236692093854e38);

    // Exactly halfway rounds to even.
    let n = (BigInt::from(1) << 128) + (BigInt::from(1) << 75);
    assert_eq!(n.to_f64(), 3.402823669209385e38);

    assert_eq!(((BigInt::from(1) << 200) - 1i32).to_f64(), 1.6069380442589903e60);

    // Largest magnitude that still rounds down to f64::MAX, and the tie above
    // it that rounds up to infinity.
    let n = (BigInt::from(1) << 1024) - (BigInt::from(1) << 971) - 1i32;
    assert_eq!(n.to_f64(), f64::MAX);
    let n = (BigInt::from(1) << 1024) - (BigInt::from(1) << 970);
    assert!(n.to_f64().is_infinite());
}

#[test]
fn test_words_and_storage() {
    let n = BigInt::from_slice(Sign::Plus, &[5, 0, 0]);
    assert_eq!(n.words(), &[5]);
    assert_eq!(BigInt::from_slice(Sign::Minus, &[0, 0]), 0);

    // Every native integer stays inline.
    assert!(BigInt::from(u128::MAX).is_inline());
    assert!(BigInt::from(i128::MIN).is_inline());

    let mut n = BigInt::from(u128::MAX);
    n += 1;
    assert!(!n.is_inline());
    assert_eq!(n.capacity() % 4, 0);

    let n = BigInt::from(1) << 300;
    let copy = n.clone();
    assert!(!copy.is_inline());
    assert_eq!(copy.capacity() % 4, 0);
    assert_eq!(copy, n);

    let mut n = BigInt::from(-3);
    n.reserve(9);
    assert!(!n.is_inline());
    assert_eq!(n.capacity(), 12);
    assert_eq!(n, -3);

    let mut n = big("-123456789012345678901234567890");
    let taken = std::mem::take(&mut n);
    assert_eq!(n, 0);
    assert_eq!(taken.to_string(), "-123456789012345678901234567890");

    assert_eq!(
        BigInt::from_slice(Sign::Plus, &[0, 1]),
        BigInt::from(1) << Word::BITS as usize
    );
}
