// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::models::{MonthlyBucket, PeriodTotals, Scope, Transaction};
use crate::utils::{balance_of, saturating_sum};

/// Which collections contribute the years a monthly report walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearSource {
    /// Years seen in any of income, expenses or savings.
    #[default]
    All,
    /// Years seen in the income collection only. Spending in a year with no
    /// recorded income is then left out of the report.
    Income,
}

/// Monthly income/expense/savings buckets, newest first.
pub fn group_by_month(
    income: &[Transaction],
    expenses: &[Transaction],
    savings: &[Transaction],
) -> Vec<MonthlyBucket> {
    group_by_month_with(income, expenses, savings, YearSource::All)
}

pub fn group_by_month_with(
    income: &[Transaction],
    expenses: &[Transaction],
    savings: &[Transaction],
    years_from: YearSource,
) -> Vec<MonthlyBucket> {
    let years: BTreeSet<i32> = match years_from {
        YearSource::All => years_of(income.iter().chain(expenses).chain(savings)),
        YearSource::Income => years_of(income.iter()),
    };

    let mut buckets = Vec::new();
    for &year in years.iter().rev() {
        for month in (1..=12).rev() {
            let income_sum = sum_period(income, year, month);
            let expenses_sum = sum_period(expenses, year, month);
            let savings_sum = sum_period(savings, year, month);
            if income_sum > Decimal::ZERO
                || expenses_sum > Decimal::ZERO
                || savings_sum > Decimal::ZERO
            {
                buckets.push(MonthlyBucket {
                    year,
                    month,
                    income: income_sum,
                    expenses: expenses_sum,
                    savings: savings_sum,
                    balance: balance_of(income_sum, expenses_sum, savings_sum),
                });
            }
        }
    }
    tracing::debug!(buckets = buckets.len(), years = years.len(), "grouped by month");
    buckets
}

/// Totals for a year or a single month of it.
pub fn period_totals(
    income: &[Transaction],
    expenses: &[Transaction],
    savings: &[Transaction],
    scope: &Scope,
) -> PeriodTotals {
    let sum = |txns: &[Transaction]| -> Decimal {
        saturating_sum(txns.iter().filter(|t| t.matches(scope)).map(|t| t.amount))
    };
    let income = sum(income);
    let expenses = sum(expenses);
    let savings = sum(savings);
    PeriodTotals {
        income,
        expenses,
        savings,
        balance: balance_of(income, expenses, savings),
    }
}

/// Distinct years across all collections, newest first.
pub fn available_years(
    income: &[Transaction],
    expenses: &[Transaction],
    savings: &[Transaction],
) -> Vec<i32> {
    years_of(income.iter().chain(expenses).chain(savings))
        .into_iter()
        .rev()
        .collect()
}

fn years_of<'a>(txns: impl Iterator<Item = &'a Transaction>) -> BTreeSet<i32> {
    txns.filter_map(|t| t.year).collect()
}

fn sum_period(txns: &[Transaction], year: i32, month: u32) -> Decimal {
    saturating_sum(
        txns.iter()
            .filter(|t| t.in_period(year, month))
            .map(|t| t.amount),
    )
}
