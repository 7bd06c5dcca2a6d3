//! Shared network models for the virtnet provisioning layer.

pub mod error;
pub mod network;
