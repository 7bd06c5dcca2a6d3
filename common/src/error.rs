use std::net::IpAddr;

use pnet::ipnetwork::IpNetworkError;

/// Errors raised while validating a virtual network definition.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("address {addr} and netmask {mask} belong to different families")]
    FamilyMismatch { addr: IpAddr, mask: IpAddr },

    #[error("netmask {0} is not a contiguous prefix")]
    NonContiguousMask(IpAddr),

    #[error("invalid network definition: {0}")]
    Invalid(#[from] IpNetworkError),
}
