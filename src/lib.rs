//! Immutable IPv4/IPv6 address values.
//!
//! Addresses are parsed from dotted-decimal, colon-hex or raw bytes into a
//! fixed-width [`BinaryAddress`], and every further operation is a pure
//! function of those bytes:
//! - [`parser`] - text and binary notations to [`BinaryAddress`]
//! - [`processing`] - CIDR masks, range checks, reserved-range classification
//!   and IPv4-in-IPv6 embeddings
//! - [`output`] - text rendering and the `ipinfo` report
//! - [`models`] - [`BinaryAddress`] and the public [`IpAddress`] type
//!
//! ```
//! use ip_binary::IpAddress;
//!
//! let ip = IpAddress::parse("::ffff:c22:384e").unwrap();
//! assert!(ip.is_mapped());
//! assert_eq!(ip.embedded_ipv4().unwrap().to_string(), "12.34.56.78");
//! ```

pub mod error;
pub mod models;
pub mod output;
pub mod parser;
pub mod processing;

pub use error::{IpError, Supplied};
pub use models::{BinaryAddress, Family, IpAddress, V4_WIDTH, V6_WIDTH};
pub use processing::{
    broadcast_address, common_cidr, generate_mask, in_range, network_address, Embedding, Reserved,
    ReservedRange,
};
