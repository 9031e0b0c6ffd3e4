// Copyright 2026 nsexport developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use anyhow::Result;
use clap::ArgMatches;
use tracing::debug;

use nsexport::app::logging::Logging;
use nsexport::app::{self, AppConfig};

fn main() {
    let args = app::cli_parser::create_parser().get_matches();

    // Best effort by contract: the run result is deliberately discarded and
    // the process terminates as if successful, whatever happened. Raise the
    // verbosity to see what went wrong.
    if let Err(err) = start(&args) {
        debug!("Run failed: {:#}", err);
    }
}

fn start(args: &ArgMatches) -> Result<()> {
    let config = AppConfig::try_from(args)?;

    Logging::new(config.verbosity, std::env::var_os("RUST_LOG"), config.color, config.debug).start()?;
    debug!("Set up logging.");

    app::run::run(&config)
}
