//! MAC address synthesis for guest interfaces.

use pnet::util::MacAddr;

/// OUI libvirt assigns to KVM/QEMU guest interfaces.
pub const VENDOR_PREFIX: [u8; 3] = [0x52, 0x54, 0x00];

// libvirt treats a leading 0xfe in the vendor-free part specially, so
// generated addresses swap it out. Known, size-one exclusion list.
const RESERVED_OCTET: u8 = 0xfe;
const RESERVED_FALLBACK: u8 = 0xee;

/// Builds a guest MAC address from three freely chosen octets.
///
/// The first octet gets the locally-administered bit set and the low
/// bit cleared (unicast) before the reserved-value check, so the
/// substitution preserves both properties.
pub fn from_suffix(suffix: [u8; 3]) -> MacAddr {
    // set local bit, keep unicast
    let mut lead = (suffix[0] | 0x02) & 0xfe;
    if lead == RESERVED_OCTET {
        lead = RESERVED_FALLBACK;
    }
    MacAddr::new(
        VENDOR_PREFIX[0],
        VENDOR_PREFIX[1],
        VENDOR_PREFIX[2],
        lead,
        suffix[1],
        suffix[2],
    )
}

/// Whether `mac` carries the generated vendor prefix.
pub fn is_generated(mac: &MacAddr) -> bool {
    [mac.0, mac.1, mac.2] == VENDOR_PREFIX
}
