//! Property-based tests for operation apply/reverse laws
//!
//! Each variant must be its own inverse when reversed with the amount it was
//! applied with, for any starting item and any amount in range.

use inventory_ledger::{
    item::{Item, Location},
    operation::{Operation, truncate},
};
use proptest::prelude::*;
use rust_decimal::Decimal;

// PROPERTY TEST STRATEGIES

/// Strategy for decimals with up to four fractional digits, either sign
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..=1_000_000_000, 0u32..=4).prop_map(|(units, scale)| Decimal::new(units, scale))
}

/// Strategy for items with arbitrary (possibly negative) stock and price
fn item_strategy() -> impl Strategy<Value = Item> {
    (
        "[A-Za-z]{1,12}",
        -1_000_000i64..=1_000_000,
        (0i64..=100_000_000, 0u32..=2),
    )
        .prop_map(|(name, quantity, (units, scale))| {
            Item::new(name, quantity, Decimal::new(units, scale))
        })
}

fn location_strategy() -> impl Strategy<Value = Location> {
    "[A-Za-z][A-Za-z ]{0,15}".prop_map(|name| Location::parse(&name).unwrap())
}

// PROPERTY TESTS
proptest! {
    /// Property: add stock then reverse restores quantity exactly
    #[test]
    fn prop_add_stock_round_trips(item in item_strategy(), amount in amount_strategy()) {
        let mut subject = item.clone();
        let mut op = Operation::add_stock();

        op.apply(&mut subject, amount).unwrap();
        prop_assert_eq!(subject.quantity(), item.quantity() + truncate(amount).unwrap());

        op.reverse(&mut subject, amount).unwrap();
        prop_assert_eq!(subject, item);
    }

    /// Property: remove stock then reverse restores quantity exactly
    #[test]
    fn prop_remove_stock_round_trips(item in item_strategy(), amount in amount_strategy()) {
        let mut subject = item.clone();
        let mut op = Operation::remove_stock();

        op.apply(&mut subject, amount).unwrap();
        prop_assert_eq!(subject.quantity(), item.quantity() - truncate(amount).unwrap());

        op.reverse(&mut subject, amount).unwrap();
        prop_assert_eq!(subject, item);
    }

    /// Property: relocate then reverse restores the original location
    #[test]
    fn prop_relocate_round_trips(
        item in item_strategy(),
        target in location_strategy(),
        amount in amount_strategy(),
    ) {
        let mut subject = item.clone();
        let mut op = Operation::relocate(target.clone());

        op.apply(&mut subject, amount).unwrap();
        prop_assert_eq!(subject.location(), &target);

        op.reverse(&mut subject, amount).unwrap();
        prop_assert_eq!(subject, item);
    }

    /// Property: reprice moves price by exactly `amount` and reverses exactly
    #[test]
    fn prop_reprice_round_trips(item in item_strategy(), amount in amount_strategy()) {
        let mut subject = item.clone();
        let mut op = Operation::reprice();

        op.apply(&mut subject, amount).unwrap();
        prop_assert_eq!(subject.price() - item.price(), amount);

        op.reverse(&mut subject, amount).unwrap();
        prop_assert_eq!(subject, item);
    }

    /// Property: truncation never moves a value away from zero
    #[test]
    fn prop_truncate_toward_zero(amount in amount_strategy()) {
        let whole = Decimal::from(truncate(amount).unwrap());

        prop_assert!(whole.abs() <= amount.abs());
        prop_assert!((amount - whole).abs() < Decimal::ONE);
    }
}
