// Copyright 2026 nsexport developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::path::PathBuf;

use clap::ArgMatches;

#[derive(Debug)]
pub struct AppConfig {
    pub output_file: Option<PathBuf>,
    pub verbosity: u8,
    pub color: bool,
    pub debug: bool,
}

impl TryFrom<&ArgMatches> for AppConfig {
    type Error = anyhow::Error;

    fn try_from(args: &ArgMatches) -> std::result::Result<Self, Self::Error> {
        // Only the first positional argument counts; everything after it is ignored.
        let output_file = args
            .get_many::<String>("output")
            .and_then(|mut values| values.next().cloned())
            .map(PathBuf::from);

        let config = AppConfig {
            output_file,
            verbosity: args.get_count("verbosity"),
            color: !args.get_flag("no-color"),
            debug: args.get_flag("debug"),
        };

        Ok(config)
    }
}
