use std::fs::File;
use std::io::Read;
use std::net::IpAddr;

use resolv_conf::ScopedIp;

use super::NetworkInterface;
use crate::{Error, Result};

const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

pub fn network_interfaces() -> Result<Vec<NetworkInterface>> {
    let mut buf = Vec::with_capacity(4096);
    let mut f = File::open(RESOLV_CONF_PATH)?;
    f.read_to_end(&mut buf)?;

    parse(&buf)
}

/// Unix keeps resolver configuration host-global in resolv.conf, so the whole
/// file surfaces as a single pseudo-interface carrying all nameserver entries
/// in file order.
fn parse(buf: &[u8]) -> Result<Vec<NetworkInterface>> {
    let cfg = resolv_conf::Config::parse(buf).map_err(|e| Error::ParserError {
        what: "resolv.conf",
        why: e.to_string(),
    })?;

    let resolvers: Vec<IpAddr> = cfg
        .nameservers
        .into_iter()
        .map(|ip| match ip {
            ScopedIp::V4(ip) => IpAddr::V4(ip),
            ScopedIp::V6(ip, _) => IpAddr::V6(ip),
        })
        .collect();

    Ok(vec![NetworkInterface::new("resolv.conf", resolvers)])
}
