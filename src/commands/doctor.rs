// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::models::RecordKind;
use crate::normalize::{Issue, diagnose};
use crate::store::RecordSet;
use crate::utils::{maybe_print_json, pretty_table};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub kind: RecordKind,
    /// Position in the loaded collection.
    pub index: usize,
    pub id: Option<String>,
    pub issue: Issue,
}

pub fn findings(records: &RecordSet) -> Vec<Finding> {
    let mut out = Vec::new();
    for kind in [RecordKind::Expense, RecordKind::Income, RecordKind::Savings] {
        for (index, raw) in records.raw(kind).iter().enumerate() {
            let id = raw.get("id").map(|v| match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            });
            for issue in diagnose(raw, kind) {
                out.push(Finding {
                    kind,
                    index,
                    id: id.clone(),
                    issue,
                });
            }
        }
    }
    out
}

pub fn handle(records: &RecordSet, m: &clap::ArgMatches) -> Result<()> {
    let found = findings(records);
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &found)? {
        return Ok(());
    }
    if found.is_empty() {
        println!("doctor: no issues found");
    } else {
        let rows = found
            .iter()
            .map(|f| {
                vec![
                    f.kind.to_string(),
                    f.index.to_string(),
                    f.id.clone().unwrap_or_default(),
                    f.issue.describe().to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Kind", "Index", "Id", "Issue"], rows)
        );
    }
    Ok(())
}
