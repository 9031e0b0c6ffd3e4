// Copyright 2026 nsexport developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Read-only access to the operating system's resolver configuration.

use std::net::IpAddr;

use crate::Result;

#[cfg(unix)]
#[path = "unix.rs"]
mod os;

#[cfg(windows)]
#[path = "windows.rs"]
mod os;

/// One network interface as enumerated by the operating system, together with
/// the DNS resolver addresses it reports.
///
/// Interfaces are reported in OS-enumeration order and addresses in the order
/// the OS lists them for the interface. No filtering by operational status or
/// interface type takes place, and no deduplication across interfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterface {
    pub name: String,
    pub resolvers: Vec<IpAddr>,
}

impl NetworkInterface {
    pub fn new<S: Into<String>>(name: S, resolvers: Vec<IpAddr>) -> NetworkInterface {
        NetworkInterface {
            name: name.into(),
            resolvers,
        }
    }
}

/// The single OS-facing capability of this crate: list the network interfaces
/// together with their resolver addresses.
///
/// A trait so the export path can be exercised with synthetic interface data
/// instead of real network hardware.
pub trait ResolverSource {
    fn network_interfaces(&self) -> Result<Vec<NetworkInterface>>;
}

/// Resolver source backed by the host operating system.
#[derive(Debug, Default)]
pub struct SystemConfig;

impl ResolverSource for SystemConfig {
    fn network_interfaces(&self) -> Result<Vec<NetworkInterface>> {
        os::network_interfaces()
    }
}
