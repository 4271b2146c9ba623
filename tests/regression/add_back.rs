use json_bigint::BigInt;

// The two-word quotient check accepts an estimate that is still one too large,
// so the multiply-subtract step borrows and the divisor is added back.
#[test]
fn test() {
    let u = BigInt::parse("6277101735386680763835789423207666416102355444464034512896").unwrap();
    let v = BigInt::parse("3138550867693340381917894711603833208051177722232017256449").unwrap();

    assert_eq!(&u / &v, 1);
    assert_eq!(
        (&u % &v).to_string(),
        "3138550867693340381917894711603833208051177722232017256447"
    );
}
