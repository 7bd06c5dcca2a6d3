//! Netmask capping for hypervisor-sized subnets.

use pnet::ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};

/// Most host bits a single virtual subnet may carry.
///
/// libvirt supports at most 65536 addresses per virtual network (2^16,
/// minus broadcast and .1), so wider masks are narrowed before any
/// range computation. The caller's configured mask stays untouched.
pub const MAX_HOST_BITS: u8 = 16;

/// Host bits left free by the network's mask.
pub fn host_bits(network: &IpNetwork) -> u8 {
    match network {
        IpNetwork::V4(net) => 32 - net.prefix(),
        IpNetwork::V6(net) => 128 - net.prefix(),
    }
}

/// Caps `prefix` so it leaves at most [`MAX_HOST_BITS`] host bits in an
/// address of `width` bits. Prefixes already inside the limit come back
/// unchanged, which makes the operation idempotent.
pub fn capped_prefix(prefix: u8, width: u8) -> u8 {
    if width - prefix > MAX_HOST_BITS {
        width - MAX_HOST_BITS
    } else {
        prefix
    }
}

/// Returns `network` with its mask capped to [`MAX_HOST_BITS`] host bits.
pub fn cap_mask(network: IpNetwork) -> IpNetwork {
    match network {
        IpNetwork::V4(net) => Ipv4Network::new(net.ip(), capped_prefix(net.prefix(), 32))
            .map(IpNetwork::V4)
            .unwrap_or(network),
        IpNetwork::V6(net) => Ipv6Network::new(net.ip(), capped_prefix(net.prefix(), 128))
            .map(IpNetwork::V6)
            .unwrap_or(network),
    }
}
