// Copyright 2026 nsexport developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! nsexport collects the DNS resolver addresses reported by the host's network
//! interfaces and writes them to a file, one `nameserver <ip>` line per
//! address, in the textual convention of Unix resolver configuration files.
//!
//! The crate is split into the OS-query capability ([`system_config`]), the
//! serialization of the resolver list ([`export`]), and the application layer
//! ([`app`]) used by the `nsexport` binary. The binary deliberately swallows
//! every failure and always terminates successfully; the library surface keeps
//! all operations fallible so the behavior stays testable.

pub mod app;
pub mod error;
pub mod export;
pub mod system_config;

pub use error::Error;

/// Result type of this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
pub(crate) mod utils;
