//! First/last address derivation for virtual network definitions.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use pnet::ipnetwork::IpNetwork;
use tracing::debug;

use crate::network::mask;

/// The span of addresses a hypervisor may hand out inside a subnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressRange {
    pub first_addr: IpAddr,
    pub last_addr: IpAddr,
}

impl AddressRange {
    pub fn new(first_addr: IpAddr, last_addr: IpAddr) -> Self {
        Self {
            first_addr,
            last_addr,
        }
    }

    /// Number of addresses covered, network address included.
    pub fn size(&self) -> u128 {
        match (self.first_addr, self.last_addr) {
            (IpAddr::V4(first), IpAddr::V4(last)) => {
                u128::from(u32::from(last) - u32::from(first)) + 1
            }
            (IpAddr::V6(first), IpAddr::V6(last)) => u128::from(last) - u128::from(first) + 1,
            // mixed families never come out of network_range
            _ => 0,
        }
    }

    /// Iterates the IPv4 addresses of the range. IPv6 ranges yield
    /// nothing; per-address enumeration only happens for IPv4 host
    /// entries.
    pub fn to_iter(&self) -> impl Iterator<Item = IpAddr> {
        let (start, end) = match (self.first_addr, self.last_addr) {
            (IpAddr::V4(first), IpAddr::V4(last)) => (u32::from(first), u32::from(last)),
            _ => (1, 0),
        };
        (start..=end).map(|ip| IpAddr::V4(Ipv4Addr::from(ip)))
    }
}

/// Calculates the first and last address assignable within `network`.
///
/// The first address is the masked base. The last address sets every
/// host bit of the capped mask on top of that base, so a subnet wider
/// than [`mask::MAX_HOST_BITS`] ends at the top of its 65536-address
/// window rather than at its true broadcast address.
pub fn network_range(network: IpNetwork) -> AddressRange {
    match network {
        IpNetwork::V4(net) => {
            let prefix = net.prefix();
            let capped = mask::capped_prefix(prefix, 32);
            if capped != prefix {
                debug!("narrowing /{prefix} to /{capped} for range computation");
            }
            let first = u32::from(net.ip()) & u32::from(net.mask());
            let hosts = if capped == 32 { 0 } else { u32::MAX >> capped };
            AddressRange::new(
                IpAddr::V4(Ipv4Addr::from(first)),
                IpAddr::V4(Ipv4Addr::from(first | hosts)),
            )
        }
        IpNetwork::V6(net) => {
            let prefix = net.prefix();
            let capped = mask::capped_prefix(prefix, 128);
            if capped != prefix {
                debug!("narrowing /{prefix} to /{capped} for range computation");
            }
            let first = u128::from(net.ip()) & u128::from(net.mask());
            let hosts = if capped == 128 { 0 } else { u128::MAX >> capped };
            AddressRange::new(
                IpAddr::V6(Ipv6Addr::from(first)),
                IpAddr::V6(Ipv6Addr::from(first | hosts)),
            )
        }
    }
}
