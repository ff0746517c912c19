use tally_core::{money, Currency, TallyError};
use tally_rate::{
    calculate_exclusive, calculate_inclusive, graduated_cost, PriceSchedule, Rate, Tier,
};

fn rate(text: &str) -> Rate {
    Rate::parse(text).unwrap()
}

#[test]
fn inclusive_vat_backs_out_tax() {
    let gross = money(1000, "GBP").unwrap();
    let res = calculate_inclusive(&gross, &rate("0.20")).unwrap();
    assert_eq!(res.base.amount(), 833);
    assert_eq!(res.tax.amount(), 167);
    assert_eq!(res.base.amount() + res.tax.amount(), res.total.amount());
    assert_eq!(res.tax.currency().as_str(), "GBP");
}

#[test]
fn exclusive_nyc_sales_tax() {
    let base = money(10_000, "USD").unwrap();
    let res = calculate_exclusive(&base, &rate("0.08875")).unwrap();
    assert_eq!(res.tax.amount(), 888);
    assert_eq!(res.total.amount(), 10_888);
}

#[test]
fn inclusive_rejects_rates_at_or_below_minus_one() {
    let gross = money(1000, "USD").unwrap();
    for bad in ["-1", "-2.5"] {
        match calculate_inclusive(&gross, &rate(bad)).unwrap_err() {
            TallyError::Rate(info) => assert_eq!(info.code, "rate-out-of-range"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn zero_rate_is_identity() {
    let gross = money(12_345, "USD").unwrap();
    let res = calculate_inclusive(&gross, &Rate::zero()).unwrap();
    assert_eq!(res.base, gross);
    assert!(res.tax.is_zero());
}

fn usd() -> Currency {
    Currency::new("USD").unwrap()
}

#[test]
fn graduated_pricing_complex() {
    let tiers = vec![
        Tier::bounded(100, rate("0.05")),
        Tier::bounded(100, rate("0.045")),
        Tier::unbounded(rate("0.004")),
    ];
    // 100 * 0.05 + 100 * 0.045 + 1050 * 0.004 = 13.70
    let bill = graduated_cost(1250, &tiers, &usd()).unwrap();
    assert_eq!(bill.amount(), 1370);
}

#[test]
fn graduated_pricing_rounds_once() {
    let tiers = vec![Tier::unbounded(rate("0.004"))];
    assert_eq!(graduated_cost(1, &tiers, &usd()).unwrap().amount(), 0);
    assert_eq!(graduated_cost(2, &tiers, &usd()).unwrap().amount(), 1);
    assert_eq!(graduated_cost(0, &tiers, &usd()).unwrap().amount(), 0);
}

#[test]
fn usage_past_bounded_tiers_is_not_billed() {
    let tiers = vec![Tier::bounded(10, rate("1"))];
    assert_eq!(graduated_cost(25, &tiers, &usd()).unwrap().amount(), 1000);
}

#[test]
fn pricing_validation() {
    let tiers = vec![Tier::unbounded(rate("1"))];
    assert_eq!(
        graduated_cost(-1, &tiers, &usd()).unwrap_err().code(),
        "negative-usage"
    );
    let broken = vec![Tier::bounded(0, rate("1"))];
    assert_eq!(
        graduated_cost(5, &broken, &usd()).unwrap_err().code(),
        "invalid-tier"
    );
}

#[test]
fn schedules_can_bill_in_other_minor_units() {
    let yen = Currency::new("JPY").unwrap();
    let mut schedule = PriceSchedule::new(vec![Tier::unbounded(rate("2.5"))], yen);
    schedule.minor_units = 1;
    assert_eq!(schedule.cost(3).unwrap().amount(), 8);
}

#[test]
fn schedule_deserializes_with_default_scale() {
    let json = r#"{"tiers":[{"capacity":null,"price":"0.5"}],"currency":"USD"}"#;
    let schedule: PriceSchedule = serde_json::from_str(json).unwrap();
    assert_eq!(schedule.minor_units, 100);
    assert_eq!(schedule.cost(3).unwrap().amount(), 150);
}
