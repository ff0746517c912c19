use proptest::prelude::*;
use tally_alloc::split;

fn business_or_stress_total() -> impl Strategy<Value = i64> {
    prop_oneof![
        9 => 1i64..100_000_000,
        1 => prop_oneof![Just(i64::MAX), Just(i64::MAX - 1), Just(1i64)],
    ]
}

fn positive_weights() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(1u64..10_000, 1..50)
}

fn sparse_weights() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..10_000, 1..50)
        .prop_filter("needs a positive weight", |weights| weights.iter().any(|w| *w > 0))
}

fn wide_sum(parts: &[i64]) -> i128 {
    parts.iter().map(|part| i128::from(*part)).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2_000))]

    #[test]
    fn parts_sum_to_total(total in business_or_stress_total(), weights in positive_weights()) {
        let parts = split(total, &weights).unwrap();
        prop_assert_eq!(parts.len(), weights.len());
        prop_assert_eq!(wide_sum(&parts), i128::from(total));
    }

    #[test]
    fn positive_totals_never_go_negative(total in business_or_stress_total(), weights in positive_weights()) {
        let parts = split(total, &weights).unwrap();
        prop_assert!(parts.iter().all(|part| *part >= 0));
    }

    #[test]
    fn heavier_weights_never_get_less(total in business_or_stress_total(), weights in sparse_weights()) {
        let parts = split(total, &weights).unwrap();
        for i in 0..weights.len() {
            for j in 0..weights.len() {
                if weights[i] > weights[j] {
                    prop_assert!(parts[i] >= parts[j], "w={:?} parts={:?}", weights, parts);
                }
            }
        }
    }

    #[test]
    fn any_total_is_conserved_and_within_one_unit(total in any::<i64>(), weights in sparse_weights()) {
        let parts = split(total, &weights).unwrap();
        prop_assert_eq!(wide_sum(&parts), i128::from(total));

        let sum: i128 = weights.iter().map(|w| i128::from(*w)).sum();
        for (part, weight) in parts.iter().zip(&weights) {
            let exact = i128::from(total) * i128::from(*weight);
            let scaled = i128::from(*part) * sum;
            // floor(exact / sum) <= part <= ceil(exact / sum)
            prop_assert!(scaled > exact - sum && scaled < exact + sum);
        }
    }

    #[test]
    fn negative_totals_mirror_monotonicity(total in i64::MIN..0, weights in sparse_weights()) {
        let parts = split(total, &weights).unwrap();
        for i in 0..weights.len() {
            for j in 0..weights.len() {
                if weights[i] > weights[j] {
                    prop_assert!(parts[i] <= parts[j]);
                }
            }
        }
        prop_assert!(parts.iter().all(|part| *part <= 0));
    }

    #[test]
    fn split_is_deterministic(total in any::<i64>(), weights in sparse_weights()) {
        prop_assert_eq!(split(total, &weights).unwrap(), split(total, &weights).unwrap());
    }
}
