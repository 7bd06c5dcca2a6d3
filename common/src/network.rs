pub mod mac;
pub mod mask;
pub mod range;
pub mod subnet;
