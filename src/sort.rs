// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::models::{CategoryBucket, SortBy, SortMode, SortOrder, Transaction};

/// Orders category buckets for display. The sort is stable, so ties keep
/// their incoming order.
pub fn sort_categories(
    mut buckets: Vec<CategoryBucket>,
    by: SortBy,
    order: SortOrder,
) -> Vec<CategoryBucket> {
    buckets.sort_by(|a, b| {
        let ord = match by {
            SortBy::Amount => a.total_cost.cmp(&b.total_cost),
            SortBy::Name => compare_names(&a.category, &b.category),
        };
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    buckets
}

/// Case-insensitive first, then exact text so `"food"` and `"Food"` still order deterministically.
/// Name order for people rather than code points: base letters first, so
/// `Éclair` lands among the `e`s. Accents, then case, then the exact text
/// break ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

impl SortMode {
    pub fn new(by: SortBy, order: SortOrder) -> Self {
        SortMode { by, order }
    }

    /// Flips between amount-descending and name-ascending.
    pub fn toggle(self) -> Self {
        match self.by {
            SortBy::Amount => SortMode::new(SortBy::Name, SortOrder::Asc),
            SortBy::Name => SortMode::new(SortBy::Amount, SortOrder::Desc),
        }
    }

    pub fn apply(self, buckets: Vec<CategoryBucket>) -> Vec<CategoryBucket> {
        sort_categories(buckets, self.by, self.order)
    }
}

/// Newest first: year, month, day, then id. Records with no period sink to the end.
pub fn sort_reverse_chronological(txns: &mut [Transaction]) {
    txns.sort_by(|a, b| {
        b.year
            .cmp(&a.year)
            .then_with(|| b.month.cmp(&a.month))
            .then_with(|| b.date.cmp(&a.date))
            .then_with(|| b.id.cmp(&a.id))
    });
}
