// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Turns raw API records into canonical [`Transaction`]s.
//!
//! Nothing here fails: unreadable numbers become zero, absent fields become
//! `None` or their defaults. [`diagnose`] reports what was degraded.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::models::{RawRecord, RecordKind, Transaction};
use crate::utils::{parse_amount_value, parse_loose_date, parse_month_value_json, parse_year_value};

const TAX_FLAG_KEYS: [&str; 2] = ["tax_applicable", "taxApplicable"];
const TAX_AMOUNT_KEYS: [&str; 2] = ["tax_amount", "taxAmount"];

pub fn normalize(raw: &RawRecord, kind: RecordKind) -> Transaction {
    let amount = match amount_source(raw, kind) {
        Some(v) => coerce_amount(v, kind.amount_key()),
        None => Decimal::ZERO,
    };
    let tax_amount = TAX_AMOUNT_KEYS
        .iter()
        .find_map(|k| raw.get(*k))
        .map(|v| coerce_amount(v, "tax_amount"))
        .unwrap_or(Decimal::ZERO);
    let date = raw.get("date").and_then(text).and_then(|s| {
        let parsed = parse_loose_date(&s);
        if parsed.is_none() {
            tracing::debug!(date = %s, "unparseable date, month/year must come from explicit fields");
        }
        parsed
    });

    // Explicit month/year win over the date field, each independently.
    let month = raw
        .get("month")
        .and_then(parse_month_value_json)
        .or_else(|| date.map(|d| d.month()));
    let year = raw
        .get("year")
        .and_then(parse_year_value)
        .or_else(|| date.map(|d| d.year()));

    Transaction {
        id: raw.get("id").and_then(text),
        kind,
        category: label(raw, kind),
        amount,
        tax_amount,
        tax_applicable: tax_applicable(raw),
        date,
        month,
        year,
        description: raw.get("description").and_then(text),
        image: raw.get("image").and_then(text),
    }
}

pub fn normalize_all(raws: &[RawRecord], kind: RecordKind) -> Vec<Transaction> {
    raws.iter().map(|r| normalize(r, kind)).collect()
}

/// `true` only when the tax flag reads `"yes"` in any casing (or is a JSON `true`).
pub fn tax_applicable(raw: &RawRecord) -> bool {
    match TAX_FLAG_KEYS.iter().find_map(|k| raw.get(*k)) {
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("yes"),
        Some(Value::Bool(b)) => *b,
        _ => false,
    }
}

/// The kind's own amount key, falling back to the other spelling (`cost`/`amount`).
fn amount_source(raw: &RawRecord, kind: RecordKind) -> Option<&Value> {
    let fallback = match kind {
        RecordKind::Expense => "amount",
        RecordKind::Income | RecordKind::Savings => "cost",
    };
    raw.get(kind.amount_key()).or_else(|| raw.get(fallback))
}

fn coerce_amount(v: &Value, field: &str) -> Decimal {
    match parse_amount_value(v) {
        Some(d) => d,
        None => {
            tracing::debug!(field, value = %v, "unparseable amount coerced to 0");
            Decimal::ZERO
        }
    }
}

fn label(raw: &RawRecord, kind: RecordKind) -> Option<String> {
    raw.get(kind.label_key())
        .or_else(|| match kind {
            RecordKind::Savings => raw.get("source"),
            RecordKind::Expense | RecordKind::Income => None,
        })
        .and_then(text)
}

fn text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    MissingAmount,
    UnparseableAmount,
    UnparseableTaxAmount,
    MissingLabel,
    UnparseableDate,
    NoPeriod,
}

impl Issue {
    pub fn describe(self) -> &'static str {
        match self {
            Issue::MissingAmount => "amount field absent, counted as 0",
            Issue::UnparseableAmount => "amount unreadable, counted as 0",
            Issue::UnparseableTaxAmount => "tax amount unreadable, counted as 0",
            Issue::MissingLabel => "no category/source, left out of category reports",
            Issue::UnparseableDate => "date unreadable",
            Issue::NoPeriod => "no month/year, left out of period reports",
        }
    }
}

/// Lists every degradation [`normalize`] would silently apply to this record.
pub fn diagnose(raw: &RawRecord, kind: RecordKind) -> Vec<Issue> {
    let mut issues = Vec::new();
    match amount_source(raw, kind) {
        None => issues.push(Issue::MissingAmount),
        Some(v) if parse_amount_value(v).is_none() => issues.push(Issue::UnparseableAmount),
        Some(_) => {}
    }
    if let Some(v) = TAX_AMOUNT_KEYS.iter().find_map(|k| raw.get(*k)) {
        if !v.is_null() && parse_amount_value(v).is_none() {
            issues.push(Issue::UnparseableTaxAmount);
        }
    }
    if label(raw, kind).is_none() {
        issues.push(Issue::MissingLabel);
    }
    if let Some(s) = raw.get("date").and_then(text) {
        if parse_loose_date(&s).is_none() {
            issues.push(Issue::UnparseableDate);
        }
    }
    let txn = normalize(raw, kind);
    if txn.month.is_none() || txn.year.is_none() {
        issues.push(Issue::NoPeriod);
    }
    issues
}
