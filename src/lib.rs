// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod icons;
pub mod models;
pub mod normalize;
pub mod sort;
pub mod store;
pub mod utils;

pub use engine::{group_by_category, group_by_month};
pub use icons::resolve_icon;
pub use normalize::normalize;
pub use sort::sort_categories;
