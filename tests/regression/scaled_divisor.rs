use json_bigint::BigInt;

// With 64-bit words the normalized divisor has a top word below the word under
// it, so both operands are scaled by the largest word before dividing.
#[test]
fn test() {
    let v = BigInt::parse("3138550867693340382258177078524771671496105585590075916293").unwrap();
    let u = BigInt::parse("3460727785438266931683572748695821919350015913630127673894824278986117994952270932542959").unwrap();

    let (q, r) = u.div_rem(&v).unwrap();
    assert_eq!(q.to_string(), "1102651488322605582696910776201");
    assert_eq!(r, 66);

    let (q, r) = (-&u).div_rem(&v).unwrap();
    assert_eq!(q.to_string(), "-1102651488322605582696910776201");
    assert_eq!(r, -66);
}
