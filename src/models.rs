// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::Error;
use crate::utils::month_name;

/// A record exactly as the remote API handed it over: string keys, loose values.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Expense,
    Income,
    Savings,
}

impl RecordKind {
    /// Key holding the monetary value for this kind of record.
    pub fn amount_key(self) -> &'static str {
        match self {
            RecordKind::Expense => "cost",
            RecordKind::Income | RecordKind::Savings => "amount",
        }
    }

    /// Key holding the label used for category grouping.
    pub fn label_key(self) -> &'static str {
        match self {
            RecordKind::Expense | RecordKind::Savings => "category",
            RecordKind::Income => "source",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Expense => "expense",
            RecordKind::Income => "income",
            RecordKind::Savings => "savings",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expense" | "expenses" => Ok(RecordKind::Expense),
            "income" => Ok(RecordKind::Income),
            "savings" | "saving" => Ok(RecordKind::Savings),
            other => Err(Error::InvalidScope(format!(
                "unknown record kind '{}' (use expense|income|savings)",
                other
            ))),
        }
    }
}

/// Canonical transaction produced by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Option<String>,
    pub kind: RecordKind,
    /// `category` for expenses and savings, `source` for income.
    pub category: Option<String>,
    pub amount: Decimal,
    pub tax_amount: Decimal,
    pub tax_applicable: bool,
    pub date: Option<NaiveDate>,
    /// 1-indexed calendar month.
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl Transaction {
    pub fn in_year(&self, year: i32) -> bool {
        self.year == Some(year)
    }

    pub fn in_period(&self, year: i32, month: u32) -> bool {
        self.year == Some(year) && self.month == Some(month)
    }

    pub fn matches(&self, scope: &Scope) -> bool {
        match scope.month {
            Some(m) => self.in_period(scope.year, m),
            None => self.in_year(scope.year),
        }
    }
}

/// Filter context for sums and percentages: a year, optionally narrowed to a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    pub year: i32,
    pub month: Option<u32>,
}

impl Scope {
    pub fn year(year: i32) -> Self {
        Scope { year, month: None }
    }

    pub fn month(year: i32, month: u32) -> Self {
        Scope {
            year,
            month: Some(month),
        }
    }

    /// Builds a scope from user-facing text such as `"2024"` and `"3"` or `"March"`.
    pub fn parse(year: &str, month: Option<&str>) -> Result<Self, Error> {
        let y = year
            .trim()
            .parse::<i32>()
            .map_err(|_| Error::InvalidScope(format!("invalid year '{}'", year)))?;
        let m = match month {
            Some(raw) => Some(
                crate::utils::parse_month_value(raw)
                    .filter(|m| (1..=12).contains(m))
                    .ok_or_else(|| Error::InvalidScope(format!("invalid month '{}'", raw)))?,
            ),
            None => None,
        };
        Ok(Scope { year: y, month: m })
    }
}

/// Income, expenses and savings summed for one `(year, month)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBucket {
    pub year: i32,
    #[serde(serialize_with = "serialize_month_name")]
    pub month: u32,
    pub income: Decimal,
    pub expenses: Decimal,
    pub savings: Decimal,
    pub balance: Decimal,
}

impl MonthlyBucket {
    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }
}

fn serialize_month_name<S: Serializer>(month: &u32, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(month_name(*month))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBucket {
    pub category: String,
    pub total_cost: Decimal,
    /// Share of the scope total, one decimal place.
    pub percentage: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PeriodTotals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub savings: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxRow {
    pub category: String,
    pub taxable_amount: Decimal,
    pub tax: Decimal,
    pub records: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaxReport {
    pub rows: Vec<TaxRow>,
    pub total_taxable: Decimal,
    pub total_tax: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Amount,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amount" => Ok(SortBy::Amount),
            "name" => Ok(SortBy::Name),
            other => Err(Error::InvalidScope(format!(
                "unknown sort field '{}' (use amount|name)",
                other
            ))),
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(Error::InvalidScope(format!(
                "unknown sort order '{}' (use asc|desc)",
                other
            ))),
        }
    }
}

/// Sort selection as a UI toggle sees it: field and order move together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortMode {
    pub by: SortBy,
    pub order: SortOrder,
}

impl Default for SortMode {
    fn default() -> Self {
        SortMode {
            by: SortBy::Amount,
            order: SortOrder::Desc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(pub String);

impl IconId {
    pub fn new(id: &str) -> Self {
        IconId(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
