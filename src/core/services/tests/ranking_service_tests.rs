use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::services::{RankingService, TOP_CATEGORY_LIMIT};
use crate::domain::{CategoryDirectory, CategoryTotals, DEFAULT_CATEGORIES};

fn totals(entries: &[(&str, Decimal)]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for (category, amount) in entries {
        totals.add(category, *amount);
    }
    totals
}

fn directory() -> CategoryDirectory {
    CategoryDirectory::from_visible(&DEFAULT_CATEGORIES)
}

#[test]
fn labels_known_keys_and_falls_back_to_raw_key() {
    let totals = totals(&[("food", dec!(60)), ("pets", dec!(40))]);
    let ranked = RankingService::top_categories(&totals, dec!(100), &directory());
    assert_eq!(ranked[0].name, "Food & Dining");
    assert_eq!(ranked[0].percentage, dec!(60));
    assert_eq!(ranked[1].name, "pets");
    assert_eq!(ranked[1].percentage, dec!(40));
}

#[test]
fn keeps_only_the_top_five() {
    let totals = totals(&[
        ("a", dec!(1)),
        ("b", dec!(6)),
        ("c", dec!(3)),
        ("d", dec!(5)),
        ("e", dec!(2)),
        ("f", dec!(4)),
    ]);
    let ranked = RankingService::top_categories(&totals, dec!(21), &directory());
    assert_eq!(ranked.len(), TOP_CATEGORY_LIMIT);
    let names: Vec<_> = ranked.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, ["b", "d", "f", "c", "e"]);
}

#[test]
fn ties_keep_first_seen_order_across_runs() {
    let totals = totals(&[("shopping", dec!(25)), ("health", dec!(25)), ("bills", dec!(25))]);
    for _ in 0..3 {
        let ranked = RankingService::top_categories(&totals, dec!(75), &directory());
        let names: Vec<_> = ranked.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["Shopping", "Health", "Bills & Utilities"]);
    }
}

#[test]
fn zero_total_yields_zero_percentages() {
    let totals = totals(&[("food", dec!(0))]);
    let ranked = RankingService::top_categories(&totals, Decimal::ZERO, &directory());
    assert_eq!(ranked[0].percentage, Decimal::ZERO);
}

#[test]
fn empty_totals_rank_to_nothing() {
    let ranked = RankingService::top_categories(&CategoryTotals::default(), dec!(0), &directory());
    assert!(ranked.is_empty());
}

#[test]
fn percentages_stay_within_bounds() {
    let totals = totals(&[("a", dec!(1)), ("b", dec!(1)), ("c", dec!(1))]);
    let ranked = RankingService::top_categories(&totals, dec!(3), &directory());
    let sum: Decimal = ranked.iter().map(|entry| entry.percentage).sum();
    assert!(sum <= dec!(100));
    assert!(ranked
        .iter()
        .all(|entry| entry.percentage >= Decimal::ZERO && entry.percentage <= dec!(100)));
}

#[test]
fn share_of_very_large_totals_stays_finite() {
    let whole = Decimal::from_i128_with_scale(6 * 10i128.pow(28), 0);
    let part = Decimal::from_i128_with_scale(3 * 10i128.pow(28), 0);
    assert_eq!(RankingService::share(part, whole), dec!(50));
    assert_eq!(RankingService::share(part, Decimal::ZERO), Decimal::ZERO);
}
