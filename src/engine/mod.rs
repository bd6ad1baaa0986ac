// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over normalized transactions. Every function takes plain
//! slices and returns fresh values; nothing is cached between calls.

pub mod category;
pub mod monthly;
pub mod tax;

pub use category::{group_by_category, group_by_category_scoped};
pub use monthly::{YearSource, available_years, group_by_month, group_by_month_with, period_totals};
pub use tax::{TaxPolicy, tax_summary};
