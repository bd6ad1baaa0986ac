// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Best-effort mapping from free-text category names to display icons.
//!
//! Rules are tried in a fixed order:
//! 1. exact match against the table,
//! 2. case-insensitive match against the table,
//! 3. substring match either way, first table entry wins,
//! 4. hardcoded keyword groups,
//! 5. the default icon.

use once_cell::sync::Lazy;

use crate::models::IconId;

pub const DEFAULT_ICON: &str = "tag-outline";

const BUILTIN_TABLE: &[(&str, &str)] = &[
    ("Food", "food"),
    ("Groceries", "cart"),
    ("Restaurant", "silverware-fork-knife"),
    ("Transport", "bus"),
    ("Travel", "airplane"),
    ("Fuel", "gas-station"),
    ("Shopping", "shopping"),
    ("Clothing", "tshirt-crew"),
    ("Bills", "file-document"),
    ("Rent", "home"),
    ("Electricity", "flash"),
    ("Water", "water"),
    ("Internet", "wifi"),
    ("Mobile Recharge", "cellphone"),
    ("Health", "hospital-box"),
    ("Medicine", "pill"),
    ("Insurance", "shield-check"),
    ("Education", "school"),
    ("Entertainment", "movie"),
    ("Subscriptions", "youtube-subscription"),
    ("Gifts", "gift"),
    ("Hair Cut", "content-cut"),
    ("Bike Service", "motorbike"),
    ("Salary", "cash"),
    ("Business", "briefcase"),
    ("Freelance", "laptop"),
    ("Investment", "chart-line"),
    ("Interest", "percent"),
    ("Savings", "piggy-bank"),
    ("Other", "dots-horizontal"),
];

const KEYWORD_GROUPS: &[(&[&str], &str)] = &[
    (&["recharge", "mobile"], "cellphone"),
    (&["cut", "salon"], "content-cut"),
    (&["bike", "vehicle"], "motorbike"),
];

static BUILTIN: Lazy<IconResolver> = Lazy::new(IconResolver::builtin);

/// Resolves with the built-in table. Total: always returns an icon.
pub fn resolve_icon(category: &str) -> IconId {
    BUILTIN.resolve(category)
}

#[derive(Debug, Clone)]
pub struct IconResolver {
    /// (category key, lowercased key, icon), in priority order.
    table: Vec<(String, String, IconId)>,
    keywords: Vec<(Vec<String>, IconId)>,
    default: IconId,
}

impl IconResolver {
    pub fn builtin() -> Self {
        let mut r = IconResolver {
            table: Vec::with_capacity(BUILTIN_TABLE.len()),
            keywords: KEYWORD_GROUPS
                .iter()
                .map(|(words, icon)| {
                    (
                        words.iter().map(|w| w.to_string()).collect(),
                        IconId::new(icon),
                    )
                })
                .collect(),
            default: IconId::new(DEFAULT_ICON),
        };
        for (key, icon) in BUILTIN_TABLE {
            r.push(key, icon);
        }
        r
    }

    /// Built-in table with `overrides` placed ahead of it.
    pub fn with_overrides<'a>(overrides: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let builtin = IconResolver::builtin();
        let mut r = IconResolver {
            table: Vec::new(),
            keywords: builtin.keywords,
            default: builtin.default,
        };
        for (key, icon) in overrides {
            r.push(key, icon);
        }
        r.table.extend(builtin.table);
        r
    }

    fn push(&mut self, key: &str, icon: &str) {
        self.table
            .push((key.to_string(), key.to_lowercase(), IconId::new(icon)));
    }

    pub fn default_icon(&self) -> &IconId {
        &self.default
    }

    pub fn resolve(&self, category: &str) -> IconId {
        if let Some((_, _, icon)) = self.table.iter().find(|(key, _, _)| key == category) {
            return icon.clone();
        }

        let needle = category.trim().to_lowercase();
        if needle.is_empty() {
            return self.default.clone();
        }

        if let Some((_, _, icon)) = self.table.iter().find(|(_, lower, _)| *lower == needle) {
            return icon.clone();
        }

        if let Some((_, _, icon)) = self
            .table
            .iter()
            .find(|(_, lower, _)| needle.contains(lower.as_str()) || lower.contains(&needle))
        {
            return icon.clone();
        }

        if let Some((_, icon)) = self
            .keywords
            .iter()
            .find(|(words, _)| words.iter().any(|w| needle.contains(w.as_str())))
        {
            return icon.clone();
        }

        self.default.clone()
    }
}

impl Default for IconResolver {
    fn default() -> Self {
        IconResolver::builtin()
    }
}
