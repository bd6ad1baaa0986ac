// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{CategoryBucket, Scope, Transaction};
use crate::utils::{percentage_of, saturating_sum};

/// Spend per category within `year`, with each category's share of the year.
///
/// Output follows first appearance of each category; ordering for display is
/// left to [`crate::sort::sort_categories`].
pub fn group_by_category(transactions: &[Transaction], year: i32) -> Vec<CategoryBucket> {
    group_by_category_scoped(transactions, &Scope::year(year))
}

pub fn group_by_category_scoped(transactions: &[Transaction], scope: &Scope) -> Vec<CategoryBucket> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, Decimal> = HashMap::new();

    for t in transactions.iter().filter(|t| t.matches(scope)) {
        // Records without a label are left out of the grouping and the total.
        let Some(cat) = t.category.as_deref() else {
            continue;
        };
        let entry = totals.entry(cat).or_insert_with(|| {
            order.push(cat);
            Decimal::ZERO
        });
        *entry = entry.saturating_add(t.amount);
    }

    let scope_total = saturating_sum(totals.values().copied());
    order
        .into_iter()
        .map(|cat| {
            let total_cost = totals.get(cat).copied().unwrap_or_default();
            CategoryBucket {
                category: cat.to_string(),
                total_cost,
                percentage: percentage_of(total_cost, scope_total),
            }
        })
        .collect()
}
