// Copyright 2026 nsexport developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use thiserror::Error;

/// Main Error type of this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse '{what}' because {why}")]
    ParserError { what: &'static str, why: String },
    #[error("failed to execute IO operation")]
    IoError {
        #[from]
        source: std::io::Error,
    },
    #[cfg(windows)]
    #[error("failed to enumerate network adapters")]
    AdapterError {
        #[from]
        source: ipconfig::error::Error,
    },
}
