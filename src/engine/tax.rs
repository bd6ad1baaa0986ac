// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{Scope, TaxReport, TaxRow, Transaction};
use crate::utils::saturating_sum;

pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 0);

/// How the tax report treats records flagged taxable but carrying no tax amount.
///
/// Only this report applies a fallback; category and monthly reports always
/// use the amounts as recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxPolicy {
    /// Percent of cost charged when the record has no explicit tax.
    pub fallback_rate: Option<Decimal>,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        TaxPolicy {
            fallback_rate: Some(DEFAULT_TAX_RATE),
        }
    }
}

impl TaxPolicy {
    pub fn recorded_only() -> Self {
        TaxPolicy {
            fallback_rate: None,
        }
    }

    pub fn tax_for(&self, t: &Transaction) -> Decimal {
        if !t.tax_applicable {
            return Decimal::ZERO;
        }
        match self.fallback_rate {
            Some(rate) if t.tax_amount.is_zero() => {
                t.amount.saturating_mul(rate) / Decimal::ONE_HUNDRED
            }
            _ => t.tax_amount,
        }
    }
}

/// Tax-applicable expenses in scope, summed per category, largest tax first.
pub fn tax_summary(expenses: &[Transaction], scope: &Scope, policy: &TaxPolicy) -> TaxReport {
    let mut rows: HashMap<&str, TaxRow> = HashMap::new();
    let mut unlabeled = 0usize;

    for t in expenses
        .iter()
        .filter(|t| t.tax_applicable && t.matches(scope))
    {
        // Same rule as category grouping: no label, no row.
        let Some(cat) = t.category.as_deref() else {
            unlabeled += 1;
            continue;
        };
        let row = rows.entry(cat).or_insert_with(|| TaxRow {
            category: cat.to_string(),
            taxable_amount: Decimal::ZERO,
            tax: Decimal::ZERO,
            records: 0,
        });
        row.taxable_amount = row.taxable_amount.saturating_add(t.amount);
        row.tax = row.tax.saturating_add(policy.tax_for(t));
        row.records += 1;
    }

    if unlabeled > 0 {
        tracing::debug!(unlabeled, "taxable records without a category left out");
    }

    let mut rows: Vec<TaxRow> = rows.into_values().collect();
    rows.sort_by(|a, b| b.tax.cmp(&a.tax).then_with(|| a.category.cmp(&b.category)));

    TaxReport {
        total_taxable: saturating_sum(rows.iter().map(|r| r.taxable_amount)),
        total_tax: saturating_sum(rows.iter().map(|r| r.tax)),
        rows,
    }
}
