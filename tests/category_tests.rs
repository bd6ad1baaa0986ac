// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde_json::json;
use spendlens::engine::{group_by_category, group_by_category_scoped};
use spendlens::models::{CategoryBucket, RecordKind, Scope, SortBy, SortMode, SortOrder, Transaction};
use spendlens::normalize::normalize_all;
use spendlens::sort::sort_categories;

fn expenses(v: serde_json::Value) -> Vec<Transaction> {
    let raws: Vec<_> = v
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r.as_object().unwrap().clone())
        .collect();
    normalize_all(&raws, RecordKind::Expense)
}

fn bucket(category: &str, total: i64) -> CategoryBucket {
    CategoryBucket {
        category: category.to_string(),
        total_cost: Decimal::from(total),
        percentage: Decimal::ZERO,
    }
}

fn names(buckets: &[CategoryBucket]) -> Vec<&str> {
    buckets.iter().map(|b| b.category.as_str()).collect()
}

#[test]
fn sums_per_category_within_year() {
    let txns = expenses(json!([
        {"category": "Food", "cost": "100", "year": 2024, "month": 1},
        {"category": "Food", "cost": "50", "year": "2024", "month": 2},
        {"category": "Travel", "cost": "150", "date": "2024-06-01"},
        {"category": "Food", "cost": "999", "year": 2023, "month": 2}
    ]));
    let buckets = group_by_category(&txns, 2024);
    assert_eq!(buckets.len(), 2);
    let food = buckets.iter().find(|b| b.category == "Food").unwrap();
    assert_eq!(food.total_cost, Decimal::from(150));
    assert_eq!(food.percentage, "50.0".parse::<Decimal>().unwrap());
}

#[test]
fn category_keys_are_exact() {
    let txns = expenses(json!([
        {"category": "Food", "cost": "10", "year": 2024, "month": 1},
        {"category": "food", "cost": "10", "year": 2024, "month": 1},
        {"category": "Food ", "cost": "10", "year": 2024, "month": 1}
    ]));
    assert_eq!(group_by_category(&txns, 2024).len(), 3);
}

#[test]
fn records_without_category_are_left_out() {
    let txns = expenses(json!([
        {"category": "Food", "cost": "30", "year": 2024, "month": 1},
        {"cost": "70", "year": 2024, "month": 1}
    ]));
    let buckets = group_by_category(&txns, 2024);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].percentage, Decimal::ONE_HUNDRED);
}

#[test]
fn percentages_sum_to_about_one_hundred() {
    let txns = expenses(json!([
        {"category": "A", "cost": "1", "year": 2024, "month": 1},
        {"category": "B", "cost": "1", "year": 2024, "month": 1},
        {"category": "C", "cost": "1", "year": 2024, "month": 1}
    ]));
    let buckets = group_by_category(&txns, 2024);
    let total: Decimal = buckets.iter().map(|b| b.percentage).sum();
    assert!((total - Decimal::ONE_HUNDRED).abs() <= "0.1".parse::<Decimal>().unwrap());
    assert_eq!(buckets[0].percentage, "33.3".parse::<Decimal>().unwrap());
}

#[test]
fn zero_total_gives_zero_percentages() {
    let txns = expenses(json!([
        {"category": "Food", "cost": "abc", "year": 2024, "month": 1},
        {"category": "Bills", "cost": "0", "year": 2024, "month": 1}
    ]));
    let buckets = group_by_category(&txns, 2024);
    assert_eq!(buckets.len(), 2);
    assert!(buckets.iter().all(|b| b.percentage.is_zero()));
}

#[test]
fn empty_scope_gives_empty_result() {
    let txns = expenses(json!([{"category": "Food", "cost": "10", "year": 2023, "month": 1}]));
    assert!(group_by_category(&txns, 2024).is_empty());
}

#[test]
fn month_scope_narrows_the_total() {
    let txns = expenses(json!([
        {"category": "Food", "cost": "100", "year": 2024, "month": 1},
        {"category": "Bills", "cost": "300", "year": 2024, "month": 1},
        {"category": "Food", "cost": "500", "year": 2024, "month": 2}
    ]));
    let jan = group_by_category_scoped(&txns, &Scope::month(2024, 1));
    let food = jan.iter().find(|b| b.category == "Food").unwrap();
    assert_eq!(food.total_cost, Decimal::from(100));
    assert_eq!(food.percentage, Decimal::from(25));
}

#[test]
fn sort_by_amount_desc_and_name_asc() {
    let input = vec![bucket("Food", 100), bucket("Travel", 300), bucket("Bills", 200)];

    let by_amount = sort_categories(input.clone(), SortBy::Amount, SortOrder::Desc);
    assert_eq!(names(&by_amount), vec!["Travel", "Bills", "Food"]);

    let by_name = sort_categories(input.clone(), SortBy::Name, SortOrder::Asc);
    assert_eq!(names(&by_name), vec!["Bills", "Food", "Travel"]);

    let by_amount_asc = sort_categories(input, SortBy::Amount, SortOrder::Asc);
    assert_eq!(names(&by_amount_asc), vec!["Food", "Bills", "Travel"]);
}

#[test]
fn name_sort_ignores_case() {
    let input = vec![bucket("banana", 1), bucket("Apple", 1), bucket("cherry", 1)];
    let sorted = sort_categories(input, SortBy::Name, SortOrder::Asc);
    assert_eq!(names(&sorted), vec!["Apple", "banana", "cherry"]);
}

#[test]
fn equal_amounts_keep_input_order() {
    let input = vec![bucket("X", 5), bucket("Y", 5), bucket("Z", 9)];
    let sorted = sort_categories(input, SortBy::Amount, SortOrder::Desc);
    assert_eq!(names(&sorted), vec!["Z", "X", "Y"]);
}

#[test]
fn toggle_couples_field_and_order() {
    let mode = SortMode::default();
    assert_eq!(mode, SortMode::new(SortBy::Amount, SortOrder::Desc));
    let flipped = mode.toggle();
    assert_eq!(flipped, SortMode::new(SortBy::Name, SortOrder::Asc));
    assert_eq!(flipped.toggle(), mode);
}

#[test]
fn huge_amounts_do_not_overflow_shares() {
    let one = expenses(json!([
        {"category": "Island", "cost": "1000000000000000000000000000", "year": 2024, "month": 1}
    ]));
    let buckets = group_by_category(&one, 2024);
    assert_eq!(buckets[0].percentage, Decimal::from(100));

    let two = expenses(json!([
        {"category": "Island", "cost": "70000000000000000000000000000", "year": 2024, "month": 1},
        {"category": "Castle", "cost": "70000000000000000000000000000", "year": 2024, "month": 1}
    ]));
    let buckets = group_by_category(&two, 2024);
    assert_eq!(names(&buckets), vec!["Island", "Castle"]);
    let share: Decimal = "88.4".parse().unwrap();
    assert!(buckets.iter().all(|b| b.percentage == share));
}

#[test]
fn accented_names_sort_with_their_base_letter() {
    let input = vec![
        bucket("Zoo", 1),
        bucket("Éclair", 2),
        bucket("apple", 3),
        bucket("eclair", 4),
        bucket("Ölkännchen", 5),
    ];
    let sorted = sort_categories(input, SortBy::Name, SortOrder::Asc);
    assert_eq!(
        names(&sorted),
        vec!["apple", "eclair", "Éclair", "Ölkännchen", "Zoo"]
    );
}

#[test]
fn scope_rejects_months_outside_the_calendar() {
    assert!(Scope::parse("2024", Some("0")).is_err());
    assert!(Scope::parse("2024", Some("13")).is_err());
    assert_eq!(Scope::parse("2024", Some("12")).unwrap(), Scope::month(2024, 12));
    assert_eq!(Scope::parse("2024", Some("march")).unwrap(), Scope::month(2024, 3));
}
