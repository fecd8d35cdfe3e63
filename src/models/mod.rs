//! Address value types.
//!
//! - [`BinaryAddress`] - fixed 4- or 16-byte substrate every operation works on
//! - [`IpAddress`] - the public value type with parsing, rendering and predicates
//! - [`Family`] - narrow (IPv4) or wide (IPv6), derived from the byte width

mod address;
mod binary;

// Re-export public types
pub use address::IpAddress;
pub use binary::{BinaryAddress, Family, V4_WIDTH, V6_WIDTH};
