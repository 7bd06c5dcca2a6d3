//! Operations the provisioning layer calls when it builds hypervisor
//! network definitions: address-range resolution and randomized
//! identifiers for new guest interfaces.

pub mod addressing;
pub mod ident;
