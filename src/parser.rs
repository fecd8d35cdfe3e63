//! Parsing of textual and binary notations into [`BinaryAddress`].
//!
//! Supported text is dotted-decimal (`12.34.56.78`) for IPv4 and colon-hex
//! for IPv6, with at most one `::` zero-run and an optional dotted-decimal
//! tail (`::ffff:12.34.56.78`), as read by [`std::net`]. Octets with leading
//! zeros, host names, zone identifiers, brackets and CIDR suffixes are
//! rejected.
//!
//! Every failure is reported as [`IpError::InvalidIpAddress`] carrying the
//! value exactly as it was supplied.

use crate::error::IpError;
use crate::models::{BinaryAddress, V4_WIDTH, V6_WIDTH};
use crate::processing::embed;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Parse dotted-decimal or colon-hex text.
///
/// # Examples
/// ```
/// use ip_binary::parser::parse;
/// assert_eq!(parse("12.34.56.78").unwrap().as_bytes(), &[12, 34, 56, 78]);
/// assert_eq!(parse("::1").unwrap().as_bytes()[15], 1);
/// assert!(parse("12.34.56.789").is_err());
/// ```
pub fn parse(text: &str) -> Result<BinaryAddress, IpError> {
    let parsed = if text.contains(':') {
        parse_colon_hex(text).map(BinaryAddress::from_v6)
    } else {
        parse_dotted(text).map(BinaryAddress::from_v4)
    };
    parsed.ok_or_else(|| reject(text))
}

/// Accept a raw 4- or 16-byte buffer as-is.
pub fn parse_bytes(bytes: &[u8]) -> Result<BinaryAddress, IpError> {
    BinaryAddress::new(bytes).map_err(|_| {
        log::debug!("rejected {} byte buffer as an IP address", bytes.len());
        IpError::invalid_ip(bytes)
    })
}

/// Parse an IPv4 address from dotted-decimal, or from an IPv6 address that
/// embeds one (mapped, compatible or 6to4 derived).
pub fn parse_v4(text: &str) -> Result<BinaryAddress, IpError> {
    if let Some(octets) = parse_dotted(text) {
        return Ok(BinaryAddress::from_v4(octets));
    }
    let octets = parse_colon_hex(text)
        .map(BinaryAddress::from_v6)
        .and_then(|wide| embed::detect(&wide).and_then(|embedding| embedding.extract(&wide)))
        .ok_or_else(|| reject(text))?;
    log::trace!("extracted IPv4 address from \"{text}\"");
    Ok(BinaryAddress::from_v4(octets))
}

/// Parse colon-hex text only.
pub fn parse_v6(text: &str) -> Result<BinaryAddress, IpError> {
    parse_colon_hex(text)
        .map(BinaryAddress::from_v6)
        .ok_or_else(|| reject(text))
}

fn reject(text: &str) -> IpError {
    log::debug!("rejected \"{text}\" as an IP address");
    IpError::invalid_ip(text)
}

fn parse_dotted(text: &str) -> Option<[u8; V4_WIDTH]> {
    text.parse::<Ipv4Addr>().ok().map(|addr| addr.octets())
}

fn parse_colon_hex(text: &str) -> Option<[u8; V6_WIDTH]> {
    text.parse::<Ipv6Addr>().ok().map(|addr| addr.octets())
}
