// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod doctor;
pub mod exporter;
pub mod reports;
pub mod settings;
pub mod transactions;

use anyhow::Result;

use crate::models::{RecordKind, Scope, SortBy, SortMode, SortOrder};

/// Reads `--year`/`--month`. `None` when the command was run without a year.
pub(crate) fn scope_from(sub: &clap::ArgMatches) -> Result<Option<Scope>> {
    let Some(year) = sub.get_one::<String>("year") else {
        return Ok(None);
    };
    let month = sub.get_one::<String>("month").map(String::as_str);
    Ok(Some(Scope::parse(year, month)?))
}

pub(crate) fn required_scope(sub: &clap::ArgMatches) -> Result<Scope> {
    scope_from(sub)?.ok_or_else(|| anyhow::anyhow!("--year is required"))
}

/// `--sort`/`--order`; without an explicit order the field picks its usual one.
pub(crate) fn sort_mode_from(sub: &clap::ArgMatches) -> Result<SortMode> {
    let by: SortBy = match sub.get_one::<String>("sort") {
        Some(s) => s.parse()?,
        None => SortBy::Amount,
    };
    let order = match sub.get_one::<String>("order") {
        Some(s) => s.parse()?,
        None => match by {
            SortBy::Amount => SortOrder::Desc,
            SortBy::Name => SortOrder::Asc,
        },
    };
    Ok(SortMode::new(by, order))
}

pub(crate) fn kind_from(sub: &clap::ArgMatches) -> Result<Option<RecordKind>> {
    match sub.get_one::<String>("kind") {
        Some(k) => Ok(Some(k.parse()?)),
        None => Ok(None),
    }
}
