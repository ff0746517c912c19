use proptest::prelude::*;
use tally_core::money;
use tally_refund::{itemized_refund, negotiated_refund, Component, LineItem};

fn components(amounts: &[i64]) -> Vec<Component> {
    amounts
        .iter()
        .enumerate()
        .map(|(i, amount)| Component::new(format!("c{i}"), money(*amount, "EUR").unwrap()))
        .collect()
}

proptest! {
    #[test]
    fn negotiated_parts_sum_to_refund(
        amounts in prop::collection::vec(1i64..1_000_000, 1..6),
        fraction in 0u32..=100,
    ) {
        let original = components(&amounts);
        let ceiling: i64 = amounts.iter().sum();
        let refund = ceiling * i64::from(fraction) / 100;
        let breakdown = negotiated_refund(&original, &money(refund, "EUR").unwrap()).unwrap();
        let total: i64 = breakdown.components.iter().map(|c| c.amount.amount()).sum();
        prop_assert_eq!(total, refund);
        for (part, source) in breakdown.components.iter().zip(&amounts) {
            prop_assert!(part.amount.amount() >= 0);
            prop_assert!(part.amount.amount() <= *source);
        }
    }

    #[test]
    fn itemized_refund_never_exceeds_scope(
        amounts in prop::collection::vec(0i64..1_000_000, 1..5),
        quantity in 1u64..20,
        returned_seed in 0u64..20,
        fraction in 0i64..=100,
    ) {
        let returned = returned_seed % quantity + 1;
        let item = LineItem { quantity, components: components(&amounts) };
        let probe = itemized_refund(&item, returned, &money(0, "EUR").unwrap()).unwrap();
        let cap = probe.max_refundable.amount();
        let negotiated = cap * fraction / 100;
        let result = itemized_refund(&item, returned, &money(negotiated, "EUR").unwrap()).unwrap();
        let total: i64 = result.refunded.iter().map(|c| c.amount.amount()).sum();
        prop_assert_eq!(total, negotiated);
        for (part, scoped) in result.refunded.iter().zip(&result.scope) {
            prop_assert!(part.amount.amount() <= scoped.amount.amount());
        }
    }
}
