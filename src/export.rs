// Copyright 2026 nsexport developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Serialization of the resolver list in resolv.conf nameserver format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::system_config::ResolverSource;
use crate::Result;

/// Writes one `nameserver <address>` line per resolver address found on the
/// interfaces enumerated by `source`, in interface order and, within an
/// interface, in the order the addresses are reported. Interfaces without
/// resolver addresses contribute nothing. Returns the number of lines written.
///
/// Addresses are rendered with `IpAddr`'s `Display`, i.e., the native
/// dotted-decimal or colon-hex form; no normalization, deduplication, or
/// reordering takes place.
pub fn write_resolver_list<S: ResolverSource, W: Write>(source: &S, mut out: W) -> Result<usize> {
    let interfaces = source.network_interfaces()?;
    debug!("Enumerated {} network interfaces.", interfaces.len());

    let mut lines = 0;
    for interface in &interfaces {
        for resolver in &interface.resolvers {
            writeln!(out, "nameserver {}", resolver)?;
            lines += 1;
        }
        debug!(
            "Wrote {} nameserver entries for interface '{}'.",
            interface.resolvers.len(),
            interface.name
        );
    }
    out.flush()?;

    Ok(lines)
}

/// Exports the resolver list of `source` to the file at `path`, creating or
/// truncating it. Returns the number of lines written.
///
/// The file is created before enumeration starts, so a failing source still
/// leaves an empty file behind. The handle is scope-owned and closes on every
/// path out of this function; lines buffered before a mid-enumeration error
/// are flushed on drop, committing partial output instead of losing it.
pub fn export_to_file<S: ResolverSource, P: AsRef<Path>>(source: &S, path: P) -> Result<usize> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    write_resolver_list(source, writer)
}
