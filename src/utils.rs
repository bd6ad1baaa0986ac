// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{DateTime, Month, NaiveDate, NaiveDateTime};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

static NON_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9.\-]").expect("invalid non-numeric regex"));

static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?(?:\d+(?:\.\d*)?|\.\d+)").expect("invalid number regex"));

/// Currency-tolerant amount parsing.
///
/// Everything except digits, `.` and `-` is stripped, then the longest leading
/// number is read. Anything unreadable is `None`; callers decide the default.
/// Magnitudes beyond the `Decimal` range saturate at `Decimal::MAX`/`MIN`.
pub fn parse_amount_str(s: &str) -> Option<Decimal> {
    let cleaned = NON_NUMERIC.replace_all(s, "");
    let m = LEADING_NUMBER.find(&cleaned)?;
    decimal_from_number(m.as_str())
}

/// Reads a loosely-typed JSON value as an amount.
pub fn parse_amount_value(v: &Value) -> Option<Decimal> {
    match v {
        Value::Number(n) => decimal_from_number(&n.to_string()),
        Value::String(s) => parse_amount_str(s),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

fn decimal_from_number(raw: &str) -> Option<Decimal> {
    let raw = raw.strip_suffix('.').unwrap_or(raw);
    let text = match raw.strip_prefix('-') {
        Some(rest) if rest.starts_with('.') => format!("-0{}", rest),
        None if raw.starts_with('.') => format!("0{}", raw),
        _ => raw.to_string(),
    };
    if let Ok(d) = Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text)) {
        return Some(d);
    }
    // Too many digits or too large an exponent for `Decimal`.
    let f = text.parse::<f64>().ok().filter(|f| f.is_finite())?;
    let d = Decimal::from_f64(f).unwrap_or(if f.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    });
    tracing::debug!(raw = %raw, value = %d, "amount outside decimal range, clamped");
    Some(d)
}

/// Sum that clamps at the `Decimal` bounds instead of overflowing.
pub fn saturating_sum<I: IntoIterator<Item = Decimal>>(values: I) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
}

/// `income - (expenses + savings)`, clamped at the `Decimal` bounds.
pub fn balance_of(income: Decimal, expenses: Decimal, savings: Decimal) -> Decimal {
    income.saturating_sub(expenses.saturating_add(savings))
}

/// Strict parsing for amounts typed by the user on the command line.
pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Accepts the date shapes the API has been seen to emit: RFC 3339 timestamps,
/// `YYYY-MM-DD` with or without a time part, and slash-separated variants.
pub fn parse_loose_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

/// Month as 1..=12 from a number (`3`, `"03"`) or a name (`"March"`, `"mar"`).
pub fn parse_month_value_json(v: &Value) -> Option<u32> {
    match v {
        Value::Number(n) => n.as_u64().and_then(|m| u32::try_from(m).ok()),
        Value::String(s) => parse_month_value(s),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

pub fn parse_month_value(s: &str) -> Option<u32> {
    let s = s.trim();
    if let Ok(m) = s.parse::<u32>() {
        return Some(m);
    }
    Month::from_str(s).ok().map(|m| m.number_from_month())
}

pub fn parse_year_value(v: &Value) -> Option<i32> {
    match v {
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

/// English month name for a 1-indexed month; out-of-range months read as `"Unknown"`.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

/// `part / total * 100` to one decimal place, zero when the total is zero.
pub fn percentage_of(part: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    let share = part
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|p| p.checked_div(total))
        .or_else(|| {
            part.checked_div(total)
                .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        })
        .unwrap_or(Decimal::ZERO);
    share.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    format!("{} {:.2}", ccy, d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
