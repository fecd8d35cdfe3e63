//! Error kinds reported by parsing, construction and mask generation.

use crate::output::text::hex_bytes;
use std::fmt;
use thiserror::Error;

/// The value a caller handed to the parser, kept verbatim for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Supplied {
    /// Textual notation (dotted-decimal or colon-hex).
    Text(String),
    /// Raw binary buffer.
    Binary(Vec<u8>),
}

impl fmt::Display for Supplied {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Supplied::Text(text) => write!(f, "\"{text}\""),
            Supplied::Binary(bytes) => {
                write!(f, "0x{} ({} bytes)", hex_bytes(bytes), bytes.len())
            }
        }
    }
}

impl From<&str> for Supplied {
    fn from(text: &str) -> Self {
        Supplied::Text(text.to_string())
    }
}

impl From<&[u8]> for Supplied {
    fn from(bytes: &[u8]) -> Self {
        Supplied::Binary(bytes.to_vec())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IpError {
    /// The supplied value is not a 4- or 16-byte address in any supported notation.
    #[error("The IP address supplied is not valid: {supplied}")]
    InvalidIpAddress { supplied: Supplied },

    /// A raw buffer handed to [`crate::BinaryAddress::new`] was not 4 or 16 bytes long.
    #[error("A binary address must be 4 or 16 bytes long, got {length}")]
    InvalidAddressLength { length: usize },

    /// A CIDR prefix outside `[0, max]` for the address family.
    #[error("The CIDR supplied is not valid; it must be an integer between 0 and {max}, got {cidr}.")]
    InvalidCidr { cidr: i32, max: u8 },

    /// Two addresses of different families were given where one family is required.
    #[error("Expected an IPv{expected} address, got IPv{actual}")]
    WrongVersion { expected: u8, actual: u8 },

    /// An IPv4 address that the requested layout cannot carry, such as
    /// `0.0.0.1` as a compatible address (it would read back as `::1`).
    #[error("{address} cannot be embedded as a {embedding} IPv6 address")]
    NotEmbeddable {
        address: String,
        embedding: &'static str,
    },
}

impl IpError {
    pub(crate) fn invalid_ip(supplied: impl Into<Supplied>) -> Self {
        IpError::InvalidIpAddress {
            supplied: supplied.into(),
        }
    }

    /// The original value for an [`IpError::InvalidIpAddress`].
    pub fn supplied_ip(&self) -> Option<&Supplied> {
        match self {
            IpError::InvalidIpAddress { supplied } => Some(supplied),
            _ => None,
        }
    }

    /// The rejected prefix for an [`IpError::InvalidCidr`].
    pub fn supplied_cidr(&self) -> Option<i32> {
        match self {
            IpError::InvalidCidr { cidr, .. } => Some(*cidr),
            _ => None,
        }
    }
}
