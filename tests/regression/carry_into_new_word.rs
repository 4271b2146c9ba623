use json_bigint::BigInt;

#[test]
fn test() {
    let mut n = BigInt::from(u128::MAX);
    n += 1u8;
    assert_eq!(n.to_string(), "340282366920938463463374607431768211456");

    let n = BigInt::parse("6277101735386680763835789423207666416102355444464034512895").unwrap();
    assert_eq!(
        (n + 1i32).to_string(),
        "6277101735386680763835789423207666416102355444464034512896"
    );

    // Borrow back down removes the top word again.
    let n = BigInt::from(1) << 128;
    assert_eq!(n - 1, u128::MAX);
}
