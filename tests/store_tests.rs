// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendlens::config::{IconRule, Settings, data_dir};
use spendlens::error::Error;
use spendlens::store::{Ledger, RecordSet, Sources, load_records};
use tempfile::tempdir;

#[test]
fn loads_bare_arrays_and_envelopes() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("expenses.json"),
        r#"[{"id": 1, "category": "Food", "cost": "120", "month": 1, "year": 2024}, 5]"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("income.json"),
        r#"{"data": [{"id": "a", "source": "Salary", "amount": 5000, "date": "2024-01-31"}]}"#,
    )
    .unwrap();

    let ledger = Ledger::load(&Sources::in_dir(dir.path())).unwrap();
    assert_eq!(ledger.expenses.len(), 1);
    assert_eq!(ledger.income.len(), 1);
    assert!(ledger.savings.is_empty());
    assert_eq!(ledger.income[0].id.as_deref(), Some("a"));
    assert_eq!(ledger.income[0].month, Some(1));
    assert_eq!(ledger.expenses[0].amount, Decimal::from(120));
}

#[test]
fn csv_cells_arrive_as_loose_strings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("expenses.csv");
    std::fs::write(
        &path,
        "id,category,cost,tax_applicable,month,year\n\
         1,Food,\"1,250.00\",YES,2,2024\n\
         2,Travel,,no,2,2024\n",
    )
    .unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert!(!records[1].contains_key("cost"));

    let set = RecordSet {
        expenses: records,
        ..RecordSet::default()
    };
    let ledger = Ledger::from_records(&set);
    assert_eq!(ledger.expenses[0].amount, "1250.00".parse::<Decimal>().unwrap());
    assert!(ledger.expenses[0].tax_applicable);
    assert_eq!(ledger.expenses[1].amount, Decimal::ZERO);
}

#[test]
fn missing_file_is_an_empty_collection() {
    let dir = tempdir().unwrap();
    let records = load_records(&dir.path().join("nope.json")).unwrap();
    assert!(records.is_empty());
}

#[test]
fn wrong_shape_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("expenses.json");
    std::fs::write(&path, r#"{"items": []}"#).unwrap();
    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, Error::UnexpectedShape { .. }));

    std::fs::write(&path, "not json").unwrap();
    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
    assert!(err.to_string().contains("expenses.json"));
}

#[test]
fn category_names_merge_collection_and_usage() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("categories.json"),
        r#"[{"name": "Food"}, {"name": "Rent"}]"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("expenses.json"),
        r#"[{"category": "Food", "cost": "1"}, {"category": "Hair Cut", "cost": "1"}]"#,
    )
    .unwrap();
    let ledger = Ledger::load(&Sources::in_dir(dir.path())).unwrap();
    assert_eq!(ledger.category_names(), vec!["Food", "Rent", "Hair Cut"]);
}

#[test]
fn settings_default_when_absent_and_round_trip() {
    let dir = tempdir().unwrap();
    let d = data_dir(Some(dir.path())).unwrap();

    let defaults = Settings::load(&d).unwrap();
    assert_eq!(defaults.currency, "USD");
    assert_eq!(defaults.tax_fallback_rate, Some(Decimal::from(18)));

    let mut s = defaults.clone();
    s.currency = "INR".into();
    s.icons.push(IconRule {
        category: "Pets".into(),
        icon: "paw".into(),
    });
    s.save(&d).unwrap();

    let loaded = Settings::load(&d).unwrap();
    assert_eq!(loaded, s);
    assert_eq!(loaded.icon_resolver().resolve("Pets").as_str(), "paw");
}

#[test]
fn partial_settings_file_fills_defaults() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("settings.json"), r#"{"currency": "EUR"}"#).unwrap();
    let s = Settings::load(dir.path()).unwrap();
    assert_eq!(s.currency, "EUR");
    assert_eq!(s.tax_fallback_rate, Some(Decimal::from(18)));
    assert!(s.icons.is_empty());
}

#[test]
fn invalid_settings_are_rejected() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{"currency": "USD", "tax_fallback_rate": "150"}"#,
    )
    .unwrap();
    let err = Settings::load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidSetting(_)));
}
