use json_bigint::BigInt;

// Inner digit groups that are all zero still print every digit.
#[test]
fn test() {
    let n = (BigInt::from(1) << 200) + 1i32;
    assert_eq!(
        n.to_string_hex(),
        "100000000000000000000000000000000000000000000000001"
    );

    let n = BigInt::parse("99999999999999999999").unwrap();
    assert_eq!(
        (&n * &n).to_string(),
        "9999999999999999999800000000000000000001"
    );
}
