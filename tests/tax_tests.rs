// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde_json::json;
use spendlens::engine::{TaxPolicy, group_by_category, tax_summary};
use spendlens::models::{RecordKind, Scope, Transaction};
use spendlens::normalize::normalize_all;

fn expenses(v: serde_json::Value) -> Vec<Transaction> {
    let raws: Vec<_> = v
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r.as_object().unwrap().clone())
        .collect();
    normalize_all(&raws, RecordKind::Expense)
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn sample() -> Vec<Transaction> {
    expenses(json!([
        {"category": "Electronics", "cost": "1000", "tax_applicable": "yes", "year": 2024, "month": 1},
        {"category": "Electronics", "cost": "500", "tax_applicable": "Yes", "tax_amount": "50", "year": 2024, "month": 2},
        {"category": "Food", "cost": "200", "tax_applicable": "no", "tax_amount": "99", "year": 2024, "month": 1},
        {"category": "Rent", "cost": "300", "tax_applicable": "yes", "tax_amount": "12", "year": 2024, "month": 1},
        {"category": "Rent", "cost": "300", "tax_applicable": "yes", "tax_amount": "12", "year": 2023, "month": 1}
    ]))
}

#[test]
fn fallback_rate_fills_missing_tax() {
    let report = tax_summary(&sample(), &Scope::year(2024), &TaxPolicy::default());
    assert_eq!(report.rows.len(), 2);

    let electronics = &report.rows[0];
    assert_eq!(electronics.category, "Electronics");
    assert_eq!(electronics.records, 2);
    assert_eq!(electronics.taxable_amount, dec("1500"));
    // 18% of 1000 plus the recorded 50
    assert_eq!(electronics.tax, dec("230"));

    assert_eq!(report.rows[1].category, "Rent");
    assert_eq!(report.total_tax, dec("242"));
    assert_eq!(report.total_taxable, dec("1800"));
}

#[test]
fn recorded_only_policy_skips_fallback() {
    let report = tax_summary(&sample(), &Scope::year(2024), &TaxPolicy::recorded_only());
    assert_eq!(report.total_tax, dec("62"));
    assert_eq!(report.rows[0].category, "Electronics");
    assert_eq!(report.rows[0].tax, dec("50"));
}

#[test]
fn month_scope_and_non_taxable_records() {
    let report = tax_summary(&sample(), &Scope::month(2024, 1), &TaxPolicy::default());
    let cats: Vec<&str> = report.rows.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(cats, vec!["Electronics", "Rent"]);
    assert_eq!(report.total_tax, dec("192"));
}

#[test]
fn fallback_does_not_leak_into_category_totals() {
    let buckets = group_by_category(&sample(), 2024);
    let electronics = buckets.iter().find(|b| b.category == "Electronics").unwrap();
    assert_eq!(electronics.total_cost, dec("1500"));
}

#[test]
fn custom_rate() {
    let policy = TaxPolicy {
        fallback_rate: Some(dec("5")),
    };
    let report = tax_summary(&sample(), &Scope::month(2024, 1), &policy);
    assert_eq!(report.rows[0].tax, dec("50"));
}

#[test]
fn fallback_on_huge_cost_saturates() {
    let txns = expenses(json!([
        {"category": "Jets", "cost": "70000000000000000000000000000", "tax_applicable": "yes", "year": 2024, "month": 1},
        {"category": "Jets", "cost": "70000000000000000000000000000", "tax_applicable": "yes", "year": 2024, "month": 2}
    ]));
    let report = tax_summary(&txns, &Scope::year(2024), &TaxPolicy::default());
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].taxable_amount, Decimal::MAX);
    assert_eq!(report.total_taxable, Decimal::MAX);
    assert!(report.rows[0].tax > Decimal::ZERO);

    let one = &txns[..1];
    let report = tax_summary(one, &Scope::year(2024), &TaxPolicy::default());
    assert_eq!(report.rows[0].tax, Decimal::MAX / Decimal::ONE_HUNDRED);
}

#[test]
fn records_without_category_get_no_row() {
    let txns = expenses(json!([
        {"category": "Uncategorized", "cost": "100", "tax_applicable": "yes", "tax_amount": "10", "year": 2024, "month": 1},
        {"cost": "500", "tax_applicable": "yes", "tax_amount": "50", "year": 2024, "month": 1}
    ]));
    let report = tax_summary(&txns, &Scope::year(2024), &TaxPolicy::default());
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].category, "Uncategorized");
    assert_eq!(report.rows[0].records, 1);
    assert_eq!(report.rows[0].tax, dec("10"));
    assert_eq!(report.total_tax, dec("10"));
}
