//! Randomized identifiers for freshly provisioned interfaces.
//!
//! Neither generator tracks what it handed out before; a caller that
//! needs uniqueness has to check the value against its own state (or,
//! for ports, try to bind) and draw again.

use pnet::util::MacAddr;
use rand::TryRngCore;
use rand::rngs::OsRng;
use tracing::trace;

use virtnet_common::network::mac;

/// Bounds of the window handed to transient listeners, above the
/// well-known ports.
const PORT_MIN: u16 = 1024;
const PORT_MAX: u16 = 65535;

#[derive(Debug, thiserror::Error)]
pub enum IdentError {
    #[error("entropy source unavailable: {0}")]
    RandomSource(String),
}

/// Returns a randomized MAC address with the libvirt vendor prefix.
pub fn random_mac() -> Result<MacAddr, IdentError> {
    let mut suffix = [0u8; 3];
    OsRng
        .try_fill_bytes(&mut suffix)
        .map_err(|e| IdentError::RandomSource(e.to_string()))?;

    let mac = mac::from_suffix(suffix);
    trace!("generated guest mac {mac}");
    Ok(mac)
}

/// Returns a random port in `[1024, 65535)`.
pub fn random_port() -> u16 {
    rand::random_range(PORT_MIN..PORT_MAX)
}
