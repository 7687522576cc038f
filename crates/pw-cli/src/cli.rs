//! Command-line definition

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

/// Build the `projectwizard` command tree
#[must_use]
pub fn build_cli() -> Command {
    Command::new("projectwizard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Academic project outline generator")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to a TOML config file"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding persisted history"),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate a project outline and record it in history")
                .arg(
                    Arg::new("topic")
                        .long("topic")
                        .short('t')
                        .required(true)
                        .help("Project topic (at least 10 characters)"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .short('c')
                        .required(true)
                        .help("Field of study key, see `categories`"),
                )
                .arg(
                    Arg::new("no-delay")
                        .long("no-delay")
                        .action(ArgAction::SetTrue)
                        .help("Skip the simulated processing delay"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("history")
                .about("Inspect recent submissions")
                .subcommand_required(true)
                .subcommand(
                    Command::new("list")
                        .about("List recent submissions, most recent first")
                        .arg(json_flag()),
                )
                .subcommand(
                    Command::new("load")
                        .about("Show a recorded submission as a ready-to-run request")
                        .arg(
                            Arg::new("number")
                                .required(true)
                                .value_parser(value_parser!(usize))
                                .help("Entry number as shown by `history list`"),
                        ),
                )
                .subcommand(Command::new("clear").about("Delete all recorded submissions")),
        )
        .subcommand(
            Command::new("categories")
                .about("List fields of study")
                .arg(json_flag()),
        )
}
