//! Bit-level operations on binary addresses.
//!
//! - [`mask`] - CIDR mask generation, network and broadcast addresses
//! - [`range`] - Range membership and common prefix length
//! - [`classify`] - Reserved-range tables and membership
//! - [`embed`] - IPv4 addresses embedded in IPv6 addresses

pub mod classify;
pub mod embed;
pub mod mask;
pub mod range;

pub use classify::{classify, is_public_use, Reserved, ReservedRange};
pub use embed::{detect, Embedding};
pub use mask::{broadcast_address, generate_mask, network_address, validate_cidr};
pub use range::{common_cidr, in_range};
