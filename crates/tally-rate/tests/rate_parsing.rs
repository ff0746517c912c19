use num::{BigInt, BigRational};
use proptest::prelude::*;
use tally_rate::{round_half_up, Rate};

fn ratio(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

#[test]
fn decimals_parse_exactly() {
    assert_eq!(Rate::parse("0.0045").unwrap().raw(), &ratio(45, 10_000));
    assert_eq!(Rate::parse("0.20").unwrap().raw(), &ratio(1, 5));
    assert_eq!(Rate::parse("-1.5").unwrap().raw(), &ratio(-3, 2));
    assert_eq!(Rate::parse(".5").unwrap().raw(), &ratio(1, 2));
    assert_eq!(Rate::parse("7").unwrap().raw(), &ratio(7, 1));
    assert_eq!(Rate::parse(" 3/8 ").unwrap().raw(), &ratio(3, 8));
}

#[test]
fn malformed_rates_are_rejected() {
    for bad in ["", "-", ".", "abc", "1.2.3", "1e5", "1/0", "1/x", "0,5"] {
        let err = Rate::parse(bad).unwrap_err();
        assert_eq!(err.code(), "invalid-rate", "{bad:?}");
    }
    assert_eq!(Rate::from_ratio(1, 0).unwrap_err().code(), "invalid-rate");
}

#[test]
fn display_and_serde_use_reduced_fractions() {
    let rate: Rate = "0.08875".parse().unwrap();
    assert_eq!(rate.to_string(), "71/800");
    let json = serde_json::to_string(&rate).unwrap();
    assert_eq!(json, "\"71/800\"");
    let restored: Rate = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, rate);
    assert_eq!(Rate::from_ratio(6, 3).unwrap().to_string(), "2");
    assert!(serde_json::from_str::<Rate>("\"oops\"").is_err());
}

#[test]
fn mul_int_is_exact() {
    let rate = Rate::parse("0.004").unwrap();
    assert_eq!(rate.mul_int(1050), ratio(42, 10));
    assert!(Rate::parse("-0.1").unwrap().is_negative());
    assert_eq!(Rate::zero().mul_int(99), ratio(0, 1));
}

#[test]
fn half_up_rounding() {
    assert_eq!(round_half_up(&ratio(5, 2)).unwrap(), 3);
    assert_eq!(round_half_up(&ratio(-5, 2)).unwrap(), -2);
    assert_eq!(round_half_up(&ratio(2, 5)).unwrap(), 0);
    assert_eq!(round_half_up(&ratio(4, 5)).unwrap(), 1);
    let huge = BigRational::from_integer(BigInt::from(i64::MAX)) * ratio(2, 1);
    assert_eq!(round_half_up(&huge).unwrap_err().code(), "rounding-overflow");
}

proptest! {
    #[test]
    fn rounding_lands_within_half_a_unit(n in -1_000_000i64..1_000_000, d in 1i64..1_000) {
        let value = ratio(n, d);
        let rounded = BigRational::from_integer(BigInt::from(round_half_up(&value).unwrap()));
        let distance = &rounded - &value;
        prop_assert!(distance > ratio(-1, 2) && distance <= ratio(1, 2));
    }
}
