use tally_core::{money, Currency, Money, TallyError};

#[test]
fn currency_codes_are_validated() {
    assert_eq!(Currency::new("USD").unwrap().as_str(), "USD");
    for bad in ["usd", "US", "USDT", "U$D", ""] {
        let err = Currency::new(bad).unwrap_err();
        assert_eq!(err.code(), "invalid-currency", "{bad}");
    }
    assert_eq!(" EUR ".parse::<Currency>().unwrap().as_str(), "EUR");
}

#[test]
fn add_requires_matching_currency() {
    let usd = money(100, "USD").unwrap();
    let eur = money(100, "EUR").unwrap();
    match usd.checked_add(&eur).unwrap_err() {
        TallyError::CurrencyMismatch(info) => {
            assert_eq!(info.context.get("left"), Some(&"USD".to_string()));
            assert_eq!(info.context.get("right"), Some(&"EUR".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(usd.checked_add(&usd).unwrap().amount(), 200);
    assert_eq!(usd.checked_sub(&usd).unwrap().amount(), 0);
}

#[test]
fn overflow_is_reported_not_wrapped() {
    let max = money(i64::MAX, "USD").unwrap();
    let one = money(1, "USD").unwrap();
    assert_eq!(max.checked_add(&one).unwrap_err().code(), "money-overflow");
    let min = money(i64::MIN, "USD").unwrap();
    assert!(matches!(min.negate(), Err(TallyError::Overflow(_))));
    assert_eq!(one.negate().unwrap().amount(), -1);
}

#[test]
fn sum_and_display() {
    let usd = Currency::new("USD").unwrap();
    let parts = vec![
        Money::new(150000, usd.clone()),
        Money::new(-125000, usd.clone()),
        Money::new(-25000, usd.clone()),
    ];
    let total = Money::sum(&parts, &usd).unwrap();
    assert!(total.is_zero());
    assert_eq!(parts[1].to_string(), "-125000 (USD)");
    assert!(parts[1].is_negative());
}

#[test]
fn money_serde_uses_plain_currency_string() {
    let value = money(1000, "GBP").unwrap();
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"amount":1000,"currency":"GBP"}"#);
    let bad = r#"{"amount":1,"currency":"gbp"}"#;
    assert!(serde_json::from_str::<Money>(bad).is_err());
}
