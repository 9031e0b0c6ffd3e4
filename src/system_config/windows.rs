use ipconfig::get_adapters;

use super::NetworkInterface;
use crate::Result;

/// Windows reports resolver addresses per adapter. Every adapter is included,
/// whether up or down, physical or virtual.
pub fn network_interfaces() -> Result<Vec<NetworkInterface>> {
    let interfaces = get_adapters()?
        .iter()
        .map(|adapter| NetworkInterface::new(adapter.friendly_name(), adapter.dns_servers().to_vec()))
        .collect();

    Ok(interfaces)
}
