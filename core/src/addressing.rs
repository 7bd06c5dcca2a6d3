//! Provisioning-facing addressing helpers.
//!
//! The network-definition builder hands over either a CIDR literal or
//! the separate address/netmask fields of a descriptor and gets back
//! the bounds it may assign to guest interfaces.

use std::net::IpAddr;

use virtnet_common::error::NetworkError;
use virtnet_common::network::range::{self, AddressRange};
use virtnet_common::network::subnet;

/// Resolves a CIDR literal into its assignable address range.
pub fn range_from_cidr(cidr: &str) -> Result<AddressRange, NetworkError> {
    Ok(range::network_range(subnet::from_cidr(cidr)?))
}

/// Resolves a descriptor's address/netmask field pair into its
/// assignable address range.
pub fn range_from_parts(addr: IpAddr, mask: IpAddr) -> Result<AddressRange, NetworkError> {
    Ok(range::network_range(subnet::from_parts(addr, mask)?))
}
