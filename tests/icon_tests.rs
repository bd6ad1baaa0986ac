// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use spendlens::icons::{DEFAULT_ICON, IconResolver, resolve_icon};

#[test]
fn exact_match_is_stable() {
    let first = resolve_icon("Mobile Recharge");
    assert_eq!(first.as_str(), "cellphone");
    for _ in 0..5 {
        assert_eq!(resolve_icon("Mobile Recharge"), first);
    }
}

#[test]
fn unknown_category_gets_default() {
    assert_eq!(resolve_icon("xyz-unknown-category").as_str(), DEFAULT_ICON);
    assert_eq!(resolve_icon("").as_str(), DEFAULT_ICON);
    assert_eq!(resolve_icon("   ").as_str(), DEFAULT_ICON);
}

#[test]
fn case_insensitive_match() {
    assert_eq!(resolve_icon("groceries").as_str(), "cart");
    assert_eq!(resolve_icon("TRAVEL").as_str(), "airplane");
}

#[test]
fn substring_match_both_directions() {
    // category contains a key
    assert_eq!(resolve_icon("Weekend Travel Plans").as_str(), "airplane");
    // key contains the category
    assert_eq!(resolve_icon("Groc").as_str(), "cart");
}

#[test]
fn keyword_groups_catch_the_rest() {
    assert_eq!(resolve_icon("Phone recharge plan").as_str(), "cellphone");
    assert_eq!(resolve_icon("Salon visit").as_str(), "content-cut");
    assert_eq!(resolve_icon("Vehicle repair").as_str(), "motorbike");
}

#[test]
fn overrides_take_priority() {
    let r = IconResolver::with_overrides([("Food", "pizza"), ("Pets", "paw")]);
    assert_eq!(r.resolve("Food").as_str(), "pizza");
    assert_eq!(r.resolve("pets").as_str(), "paw");
    assert_eq!(r.resolve("Travel").as_str(), "airplane");
    assert_eq!(r.default_icon().as_str(), DEFAULT_ICON);
}
