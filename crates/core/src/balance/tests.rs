//! Property-based tests for prefix aggregation.

use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::aggregator::{self, PrefixAggregator};
use super::summary::BalanceSummary;
use super::types::{AMOUNT_LIMIT, BalanceEntry, BalanceField, bounded};

/// Strategy to generate non-negative amounts (0.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate account codes from the OHADA classes.
fn account_code() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("101".to_string()),
        Just("2411".to_string()),
        Just("31".to_string()),
        Just("401".to_string()),
        Just("411".to_string()),
        Just("521".to_string()),
        Just("601".to_string()),
        Just("6031".to_string()),
        Just("661".to_string()),
        Just("701".to_string()),
        Just("706".to_string()),
        Just("89".to_string()),
    ]
}

fn entry_strategy() -> impl Strategy<Value = BalanceEntry> {
    (account_code(), amount(), amount())
        .prop_map(|(code, debit, credit)| BalanceEntry::new(code, "", debit, credit))
}

const FIELDS: [BalanceField; 8] = [
    BalanceField::Debit,
    BalanceField::Credit,
    BalanceField::DebitBalance,
    BalanceField::CreditBalance,
    BalanceField::Signed,
    BalanceField::Magnitude,
    BalanceField::DebitExcess,
    BalanceField::CreditExcess,
];

proptest! {
    /// Signed balance equals charges minus produits over the same prefixes.
    #[test]
    fn test_signed_is_charges_minus_produits(
        entries in prop::collection::vec(entry_strategy(), 0..30),
    ) {
        for prefixes in [&["6"][..], &["70", "71"][..], &["4"][..], &[""][..]] {
            prop_assert_eq!(
                aggregator::signed_balance(&entries, prefixes),
                aggregator::charges(&entries, prefixes) - aggregator::produits(&entries, prefixes)
            );
        }
    }

    /// Debit and credit excess split the signed balance line by line.
    #[test]
    fn test_excess_split(
        entries in prop::collection::vec(entry_strategy(), 0..30),
    ) {
        let prefixes = &["3", "4"][..];
        let debit_excess = aggregator::sum(&entries, prefixes, BalanceField::DebitExcess);
        let credit_excess = aggregator::sum(&entries, prefixes, BalanceField::CreditExcess);
        prop_assert!(debit_excess >= Decimal::ZERO);
        prop_assert!(credit_excess >= Decimal::ZERO);
        prop_assert_eq!(
            debit_excess - credit_excess,
            aggregator::signed_balance(&entries, prefixes)
        );
    }

    /// Entry order never changes an aggregate.
    #[test]
    fn test_order_independent(
        entries in prop::collection::vec(entry_strategy(), 0..30),
    ) {
        let mut reversed = entries.clone();
        reversed.reverse();
        for field in FIELDS {
            prop_assert_eq!(
                aggregator::sum(&entries, &["6", "7"], field),
                aggregator::sum(&reversed, &["6", "7"], field)
            );
        }
    }

    /// The memoizing view returns the same values as the free functions.
    #[test]
    fn test_memo_matches_direct(
        entries in prop::collection::vec(entry_strategy(), 0..30),
    ) {
        let agg = PrefixAggregator::new(&entries);
        for field in FIELDS {
            let first = agg.sum(&["60", "66"], field);
            let second = agg.sum(&["60", "66"], field);
            prop_assert_eq!(first, second);
            prop_assert_eq!(first, aggregator::sum(&entries, &["60", "66"], field));
        }
        prop_assert_eq!(agg.cached(), FIELDS.len());
    }
}

#[test]
fn test_single_sales_line_only_feeds_sales() {
    let entries = vec![BalanceEntry::new("701", "Ventes de marchandises", Decimal::ZERO, dec!(1000000))];

    assert_eq!(aggregator::produits(&entries, &["701"]), dec!(1000000));
    assert_eq!(aggregator::charges(&entries, &["701"]), Decimal::ZERO);
    assert_eq!(aggregator::produits(&entries, &["702", "703"]), Decimal::ZERO);
    assert_eq!(aggregator::charges(&entries, &["6"]), Decimal::ZERO);
    assert_eq!(aggregator::signed_balance(&entries, &["73"]), Decimal::ZERO);
}

#[rstest]
#[case(BalanceField::Debit)]
#[case(BalanceField::Credit)]
#[case(BalanceField::DebitBalance)]
#[case(BalanceField::CreditBalance)]
#[case(BalanceField::Signed)]
#[case(BalanceField::Magnitude)]
#[case(BalanceField::DebitExcess)]
#[case(BalanceField::CreditExcess)]
fn test_empty_input_is_zero(#[case] field: BalanceField) {
    assert_eq!(aggregator::sum(&[], &["1", "2", "6", "7"], field), Decimal::ZERO);
}

#[test]
fn test_duplicate_codes_are_summed() {
    let entries = vec![
        BalanceEntry::new("601", "Achats A", dec!(100), Decimal::ZERO),
        BalanceEntry::new("601", "Achats B", dec!(250), Decimal::ZERO),
    ];
    assert_eq!(aggregator::charges(&entries, &["601"]), dec!(350));
}

#[test]
fn test_overlapping_prefixes_count_twice() {
    let entries = vec![BalanceEntry::new("6011", "", dec!(100), Decimal::ZERO)];
    assert_eq!(aggregator::charges(&entries, &["60", "601"]), dec!(200));
}

#[test]
fn test_sum_excluding() {
    let entries = vec![
        BalanceEntry::new("401", "Fournisseurs", Decimal::ZERO, dec!(500)),
        BalanceEntry::new("409", "Avances fournisseurs", dec!(80), Decimal::ZERO),
    ];
    assert_eq!(
        aggregator::sum_excluding(&entries, &["40"], &["409"], BalanceField::Magnitude),
        dec!(500)
    );
    assert_eq!(aggregator::sum(&entries, &["40"], BalanceField::Magnitude), dec!(580));
}

#[test]
fn test_aggregation_does_not_mutate_input() {
    let entries = vec![
        BalanceEntry::new("601", "", dec!(10), Decimal::ZERO),
        BalanceEntry::new("701", "", Decimal::ZERO, dec!(30)),
    ];
    let before = entries.clone();
    let agg = PrefixAggregator::new(&entries);
    let _ = agg.charges(&["6"]);
    let _ = agg.produits(&["7"]);
    assert_eq!(entries, before);
}

#[test]
fn test_balance_summary() {
    let entries = vec![
        BalanceEntry::new("521", "Banque", dec!(700), Decimal::ZERO),
        BalanceEntry::new("101", "Capital", Decimal::ZERO, dec!(700)),
    ];
    let summary = BalanceSummary::from_entries(&entries);
    assert_eq!(summary.entry_count, 2);
    assert_eq!(summary.total_debit_balance, dec!(700));
    assert_eq!(summary.total_credit_balance, dec!(700));
    assert!(summary.is_balanced);

    let unbalanced = BalanceSummary::from_entries(&entries[..1]);
    assert!(!unbalanced.is_balanced);

    let empty = BalanceSummary::from_entries(&[]);
    assert_eq!(empty.entry_count, 0);
    assert!(empty.is_balanced);
}

#[test]
fn test_extreme_amounts_saturate_at_the_limit() {
    let entries = vec![
        BalanceEntry::new("701", "Ventes", Decimal::ZERO, Decimal::MAX),
        BalanceEntry::new("701", "Ventes", Decimal::ZERO, Decimal::MAX),
        BalanceEntry::new("601", "Achats", Decimal::MAX, Decimal::ZERO),
    ];

    assert_eq!(aggregator::produits(&entries, &["701"]), AMOUNT_LIMIT);
    assert_eq!(aggregator::signed_balance(&entries, &["701"]), -AMOUNT_LIMIT);
    assert_eq!(aggregator::charges(&entries, &["601"]), AMOUNT_LIMIT);

    let reversed = BalanceEntry::new("411", "Clients", Decimal::MAX, Decimal::MIN);
    assert_eq!(reversed.signed_balance(), AMOUNT_LIMIT);
    assert_eq!(BalanceField::CreditBalance.value(&reversed), -AMOUNT_LIMIT);

    let summary = BalanceSummary::from_entries(&entries);
    assert_eq!(summary.total_credit_balance, AMOUNT_LIMIT);
    assert_eq!(summary.total_debit_balance, AMOUNT_LIMIT);
}

#[test]
fn test_amounts_within_the_limit_are_untouched() {
    assert_eq!(bounded(dec!(-1234.56)), dec!(-1234.56));
    assert_eq!(bounded(AMOUNT_LIMIT), AMOUNT_LIMIT);
    assert_eq!(AMOUNT_LIMIT, dec!(1000000000000000000));
}
