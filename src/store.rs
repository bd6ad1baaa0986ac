// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Loads raw record exports from disk and normalizes them into a [`Ledger`].
//!
//! Files are the stand-in for the remote API: one collection per record type.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::{RawRecord, RecordKind, Transaction};
use crate::normalize::normalize_all;

/// Where each collection is read from. `None` means "not provided".
#[derive(Debug, Clone, Default)]
pub struct Sources {
    pub expenses: Option<PathBuf>,
    pub income: Option<PathBuf>,
    pub savings: Option<PathBuf>,
    pub categories: Option<PathBuf>,
}

impl Sources {
    /// Conventional file names in `dir`, preferring `.json` over `.csv`.
    pub fn in_dir(dir: &Path) -> Self {
        let pick = |stem: &str| -> Option<PathBuf> {
            ["json", "csv"]
                .iter()
                .map(|ext| dir.join(format!("{}.{}", stem, ext)))
                .find(|p| p.is_file())
        };
        Sources {
            expenses: pick("expenses"),
            income: pick("income"),
            savings: pick("savings"),
            categories: pick("categories"),
        }
    }
}

/// Raw collections exactly as loaded.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub expenses: Vec<RawRecord>,
    pub income: Vec<RawRecord>,
    pub savings: Vec<RawRecord>,
    pub categories: Vec<RawRecord>,
}

impl RecordSet {
    pub fn load(sources: &Sources) -> Result<Self> {
        let load = |p: &Option<PathBuf>| -> Result<Vec<RawRecord>> {
            match p {
                Some(path) => load_records(path),
                None => Ok(Vec::new()),
            }
        };
        let set = RecordSet {
            expenses: load(&sources.expenses)?,
            income: load(&sources.income)?,
            savings: load(&sources.savings)?,
            categories: load(&sources.categories)?,
        };
        tracing::info!(
            expenses = set.expenses.len(),
            income = set.income.len(),
            savings = set.savings.len(),
            categories = set.categories.len(),
            "loaded records"
        );
        Ok(set)
    }

    pub fn raw(&self, kind: RecordKind) -> &[RawRecord] {
        match kind {
            RecordKind::Expense => &self.expenses,
            RecordKind::Income => &self.income,
            RecordKind::Savings => &self.savings,
        }
    }
}

/// Normalized snapshot the reports run against.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub expenses: Vec<Transaction>,
    pub income: Vec<Transaction>,
    pub savings: Vec<Transaction>,
    /// Category names from the categories collection, in file order.
    pub categories: Vec<String>,
}

impl Ledger {
    pub fn from_records(set: &RecordSet) -> Self {
        let categories = set
            .categories
            .iter()
            .filter_map(|r| {
                ["name", "category"]
                    .iter()
                    .find_map(|k| r.get(*k))
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .collect();
        Ledger {
            expenses: normalize_all(&set.expenses, RecordKind::Expense),
            income: normalize_all(&set.income, RecordKind::Income),
            savings: normalize_all(&set.savings, RecordKind::Savings),
            categories,
        }
    }

    pub fn load(sources: &Sources) -> Result<Self> {
        Ok(Ledger::from_records(&RecordSet::load(sources)?))
    }

    pub fn of_kind(&self, kind: RecordKind) -> &[Transaction] {
        match kind {
            RecordKind::Expense => &self.expenses,
            RecordKind::Income => &self.income,
            RecordKind::Savings => &self.savings,
        }
    }

    /// Categories collection plus any label used by an expense, first seen first.
    pub fn category_names(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        let used = self.expenses.iter().filter_map(|t| t.category.as_deref());
        for name in self.categories.iter().map(String::as_str).chain(used) {
            if seen.insert(name) {
                out.push(name.to_string());
            }
        }
        out
    }
}

/// Reads one collection. A missing file is an empty collection, not an error.
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "record file missing, treating as empty");
        return Ok(Vec::new());
    }
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        load_csv(path)
    } else {
        load_json(path)
    }
}

fn load_json(path: &Path) -> Result<Vec<RawRecord>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    // Either a bare array or the API's `{"data": [...]}` envelope.
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("data") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(Error::UnexpectedShape {
                    path: path.to_path_buf(),
                });
            }
        },
        _ => {
            return Err(Error::UnexpectedShape {
                path: path.to_path_buf(),
            });
        }
    };
    let total = items.len();
    let records: Vec<RawRecord> = items
        .into_iter()
        .filter_map(|v| match v {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect();
    if records.len() < total {
        tracing::warn!(
            path = %path.display(),
            skipped = total - records.len(),
            "skipped non-object entries"
        );
    }
    Ok(records)
}

fn load_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let csv_err = |source| Error::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;
    let headers: Vec<String> = rdr
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row.map_err(csv_err)?;
        let mut map = RawRecord::new();
        for (key, cell) in headers.iter().zip(row.iter()) {
            let cell = cell.trim();
            // Empty cells count as absent fields.
            if !cell.is_empty() {
                map.insert(key.clone(), Value::String(cell.to_string()));
            }
        }
        records.push(map);
    }
    Ok(records)
}
