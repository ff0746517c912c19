use chrono::{NaiveDate, Weekday};
use tally_billing::CalendarPolicy;
use tally_core::TallyError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn june_2023_has_22_business_days() {
    let policy = CalendarPolicy::standard();
    assert_eq!(
        policy
            .count_business_days(date(2023, 6, 1), date(2023, 6, 30))
            .unwrap(),
        22
    );
}

#[test]
fn reversed_range_counts_zero() {
    let policy = CalendarPolicy::standard();
    assert_eq!(
        policy
            .count_business_days(date(2023, 6, 30), date(2023, 6, 1))
            .unwrap(),
        0
    );
}

#[test]
fn single_day_ranges() {
    let policy = CalendarPolicy::standard();
    // Thursday, then Saturday
    assert_eq!(policy.count_business_days(date(2023, 6, 1), date(2023, 6, 1)).unwrap(), 1);
    assert_eq!(policy.count_business_days(date(2023, 6, 3), date(2023, 6, 3)).unwrap(), 0);
}

#[test]
fn custom_weekends_and_holidays() {
    let mut policy = CalendarPolicy::standard();
    policy.weekends = [Weekday::Fri, Weekday::Sat].into_iter().collect();
    policy.add_holiday(date(2023, 6, 4));
    assert!(policy.is_business_day(date(2023, 6, 5)));
    assert!(!policy.is_business_day(date(2023, 6, 4)));
    assert!(!policy.is_business_day(date(2023, 6, 2)));
    // Thu 1, Sun 4 holiday, Mon 5 .. Thu 8
    assert_eq!(policy.count_business_days(date(2023, 6, 1), date(2023, 6, 8)).unwrap(), 5);
}

#[test]
fn five_year_cap_is_enforced() {
    let policy = CalendarPolicy::standard();
    let err = policy
        .count_business_days(date(2020, 1, 1), date(2030, 1, 1))
        .unwrap_err();
    match err {
        TallyError::Calendar(info) => assert_eq!(info.code, "period-too-long"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(policy
        .count_business_days(date(2020, 1, 1), date(2024, 12, 28))
        .is_ok());
}

#[test]
fn policy_deserializes_with_standard_weekends() {
    let policy: CalendarPolicy = serde_json::from_str(r#"{"holidays":["2023-12-25"]}"#).unwrap();
    assert!(policy.weekends.contains(&Weekday::Sat));
    assert!(policy.weekends.contains(&Weekday::Sun));
    assert!(!policy.is_business_day(date(2023, 12, 25)));
}
