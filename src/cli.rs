// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn scope_args(cmd: Command, year_required: bool) -> Command {
    cmd.arg(
        Arg::new("year")
            .long("year")
            .required(year_required)
            .help("Year to report on, e.g. 2024"),
    )
    .arg(
        Arg::new("month")
            .long("month")
            .help("Month number or name, e.g. 3 or March"),
    )
}

fn sort_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("sort")
            .long("sort")
            .value_parser(["amount", "name"])
            .default_value("amount"),
    )
    .arg(
        Arg::new("order")
            .long("order")
            .value_parser(["asc", "desc"])
            .help("Defaults to desc for amount and asc for name"),
    )
}

fn kind_arg(default: Option<&'static str>) -> Arg {
    let arg = Arg::new("kind")
        .long("kind")
        .value_parser(["expense", "income", "savings"]);
    match default {
        Some(d) => arg.default_value(d),
        None => arg,
    }
}

fn source_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .global(true)
        .value_parser(value_parser!(std::path::PathBuf))
        .help(help)
}

pub fn build_cli() -> Command {
    Command::new("spendlens")
        .about("Monthly balances, category breakdowns and tax summaries from exported records")
        .version(clap::crate_version!())
        .arg(source_arg("data-dir", "Directory holding record files and settings.json"))
        .arg(source_arg("expenses", "Expenses file (.json or .csv)"))
        .arg(source_arg("income", "Income file (.json or .csv)"))
        .arg(source_arg("savings", "Savings file (.json or .csv)"))
        .arg(source_arg("categories", "Categories file (.json or .csv)"))
        .subcommand(Command::new("init").about("Create the data dir and default settings"))
        .subcommand(
            Command::new("report")
                .about("Aggregated reports")
                .subcommand_required(true)
                .subcommand(json_args(
                    Command::new("monthly")
                        .about("Income, expenses, savings and balance per month, newest first")
                        .arg(
                            Arg::new("year-source")
                                .long("year-source")
                                .value_parser(["all", "income"])
                                .default_value("all")
                                .help("Collections whose years are reported"),
                        )
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .value_parser(value_parser!(usize))
                                .help("Only the most recent N months"),
                        ),
                ))
                .subcommand(json_args(sort_args(scope_args(
                    Command::new("categories")
                        .about("Totals and shares per category")
                        .arg(kind_arg(Some("expense"))),
                    true,
                ))))
                .subcommand(json_args(scope_args(
                    Command::new("tax")
                        .about("Tax on taxable expenses per category")
                        .arg(
                            Arg::new("no-fallback")
                                .long("no-fallback")
                                .action(ArgAction::SetTrue)
                                .help("Only count tax amounts actually recorded"),
                        ),
                    true,
                )))
                .subcommand(json_args(scope_args(
                    Command::new("summary").about("Income, expenses, savings and balance for a period"),
                    true,
                )))
                .subcommand(json_args(
                    Command::new("years").about("Years present in the records, newest first"),
                )),
        )
        .subcommand(
            Command::new("tx")
                .about("Normalized transactions")
                .subcommand_required(true)
                .subcommand(json_args(scope_args(
                    Command::new("list")
                        .about("List transactions newest first")
                        .arg(kind_arg(None))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                    false,
                ))),
        )
        .subcommand(
            Command::new("category")
                .about("Categories and their icons")
                .subcommand_required(true)
                .subcommand(json_args(Command::new("list")))
                .subcommand(
                    Command::new("icon")
                        .about("Show the icon a category name resolves to")
                        .arg(Arg::new("name").long("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write report data for downstream documents")
                .subcommand_required(true)
                .subcommand(sort_args(scope_args(
                    Command::new("categories")
                        .arg(kind_arg(Some("expense")))
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .required(true)
                                .help("csv or json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                    true,
                ))),
        )
        .subcommand(json_args(
            Command::new("doctor").about("Find records whose fields could not be read"),
        ))
        .subcommand(
            Command::new("settings")
                .about("Show or change settings.json")
                .subcommand_required(true)
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("currency").long("currency"))
                        .arg(
                            Arg::new("tax-rate")
                                .long("tax-rate")
                                .help("Fallback tax percent for the tax report"),
                        )
                        .arg(
                            Arg::new("no-tax-fallback")
                                .long("no-tax-fallback")
                                .action(ArgAction::SetTrue)
                                .conflicts_with("tax-rate"),
                        )
                        .arg(
                            Arg::new("icon")
                                .long("icon")
                                .num_args(2)
                                .value_names(["CATEGORY", "ICON"])
                                .action(ArgAction::Append)
                                .help("Add an icon rule checked before the built-in table"),
                        ),
                ),
        )
}
