//! This file is used by the build script. Therefore all functions generating the command line parser must be included
//! here and must not use anything from the rest of the crate, because the build script compiles this file on its own.

use clap::{Arg, ArgAction, Command};

pub fn create_parser() -> Command {
    Command::new("nsexport")
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("output")
                .value_name("OUTPUT FILE")
                .num_args(1..)
                .allow_hyphen_values(true)
                .help("Writes the discovered nameserver entries to this file")
                .long_help(
                    "Writes the discovered nameserver entries to this file, creating or truncating it. \
Without an output file, nsexport does nothing and exits successfully. \
Arguments after the first output file are ignored.",
                ),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .action(ArgAction::Count)
                .help("Sets the level of verbosity"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Disables colorful and emoji output"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Uses debug formatting for logging -- only useful for debugging"),
        )
}
