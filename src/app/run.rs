// Copyright 2026 nsexport developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::app::AppConfig;
use crate::export;
use crate::system_config::SystemConfig;

/// Runs the export against the host's resolver configuration.
///
/// Fallible on purpose, so the behavior stays inspectable in tests; the binary
/// is the only place that discards the result.
pub fn run(config: &AppConfig) -> Result<()> {
    let path = match &config.output_file {
        Some(path) => path,
        None => {
            debug!("No output file given, nothing to do.");
            return Ok(());
        }
    };

    let lines = export::export_to_file(&SystemConfig, path)
        .with_context(|| format!("failed to export resolver list to '{}'", path.display()))?;
    info!("Wrote {} nameserver entries to '{}'.", lines, path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;

    #[test]
    fn without_output_file_run_is_a_noop() {
        crate::utils::tests::logging::init();
        let config = AppConfig {
            output_file: None,
            verbosity: 0,
            color: true,
            debug: false,
        };

        let res = run(&config);

        assert_that(&res).is_ok();
    }
}
