//! Construction and validation of virtual subnet definitions.

use std::net::IpAddr;

use pnet::ipnetwork::IpNetwork;

use crate::error::NetworkError;

/// Parses a CIDR literal (`"10.0.0.0/8"`, `"2001:db8::/32"`) into a
/// network definition.
pub fn from_cidr(cidr: &str) -> Result<IpNetwork, NetworkError> {
    Ok(cidr.parse::<IpNetwork>()?)
}

/// Builds a network definition from the separate address and netmask
/// fields of a hypervisor network descriptor.
///
/// Fails fast on a family mismatch or a netmask with holes instead of
/// silently truncating or padding either side.
pub fn from_parts(addr: IpAddr, mask: IpAddr) -> Result<IpNetwork, NetworkError> {
    let prefix = prefix_from_mask(addr, mask)?;
    Ok(IpNetwork::new(addr, prefix)?)
}

fn prefix_from_mask(addr: IpAddr, mask: IpAddr) -> Result<u8, NetworkError> {
    match (addr, mask) {
        (IpAddr::V4(_), IpAddr::V4(m)) => {
            let bits = u32::from(m);
            let ones = bits.leading_ones();
            if bits.checked_shl(ones).unwrap_or(0) != 0 {
                return Err(NetworkError::NonContiguousMask(mask));
            }
            Ok(ones as u8)
        }
        (IpAddr::V6(_), IpAddr::V6(m)) => {
            let bits = u128::from(m);
            let ones = bits.leading_ones();
            if bits.checked_shl(ones).unwrap_or(0) != 0 {
                return Err(NetworkError::NonContiguousMask(mask));
            }
            Ok(ones as u8)
        }
        _ => Err(NetworkError::FamilyMismatch { addr, mask }),
    }
}
