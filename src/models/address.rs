//! The public IP address value type.
//!
//! [`IpAddress`] wraps a [`BinaryAddress`] and exposes parsing, rendering,
//! CIDR operations and classification for both families through one type.
//! Family specific answers (dotted-decimal text, embedding predicates) are
//! `None` or `false` for the other family rather than errors.

use super::binary::{BinaryAddress, Family};
use crate::error::IpError;
use crate::output::text;
use crate::parser;
use crate::processing::{self, Embedding, Reserved};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// An immutable IPv4 or IPv6 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IpAddress {
    binary: BinaryAddress,
}

impl IpAddress {
    /// Parse dotted-decimal or colon-hex text.
    ///
    /// # Examples
    /// ```
    /// use ip_binary::IpAddress;
    /// let ip = IpAddress::parse("12.34.56.78").unwrap();
    /// assert_eq!(ip.network_ip(24).unwrap().to_string(), "12.34.56.0");
    /// assert!(ip.in_range(&IpAddress::parse("12.34.56.200").unwrap(), 24));
    /// ```
    pub fn parse(text: &str) -> Result<IpAddress, IpError> {
        parser::parse(text).map(IpAddress::from)
    }

    /// Parse an IPv4 address, unwrapping one embedded in IPv6 notation.
    pub fn parse_v4(text: &str) -> Result<IpAddress, IpError> {
        parser::parse_v4(text).map(IpAddress::from)
    }

    /// Parse an IPv6 address; dotted-decimal text is rejected.
    pub fn parse_v6(text: &str) -> Result<IpAddress, IpError> {
        parser::parse_v6(text).map(IpAddress::from)
    }

    /// Take a raw 4- or 16-byte buffer as the address.
    pub fn from_binary(bytes: &[u8]) -> Result<IpAddress, IpError> {
        parser::parse_bytes(bytes).map(IpAddress::from)
    }

    pub fn binary(&self) -> BinaryAddress {
        self.binary
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.binary.as_bytes()
    }

    pub fn family(&self) -> Family {
        self.binary.family()
    }

    /// 4 or 6.
    pub fn version(&self) -> u8 {
        self.family().version()
    }

    pub fn is_version(&self, version: u8) -> bool {
        self.version() == version
    }

    pub fn is_version4(&self) -> bool {
        self.family() == Family::V4
    }

    pub fn is_version6(&self) -> bool {
        self.family() == Family::V6
    }

    /// Dotted-decimal text, IPv4 only.
    pub fn dot_address(&self) -> Option<String> {
        self.binary.v4_octets().map(text::dot_address)
    }

    /// Canonical colon-hex text with the longest zero run compressed, IPv6 only.
    pub fn compressed_address(&self) -> Option<String> {
        self.binary
            .v6_octets()
            .map(|octets| text::compressed_address(&octets))
    }

    /// Colon-hex text with all eight groups zero padded, IPv6 only.
    pub fn expanded_address(&self) -> Option<String> {
        self.binary
            .v6_octets()
            .map(|octets| text::expanded_address(&octets))
    }

    /// Network address of the CIDR block this address falls in.
    pub fn network_ip(&self, cidr: i32) -> Result<IpAddress, IpError> {
        processing::network_address(&self.binary, cidr).map(IpAddress::from)
    }

    /// Broadcast (highest) address of the CIDR block this address falls in.
    pub fn broadcast_ip(&self, cidr: i32) -> Result<IpAddress, IpError> {
        processing::broadcast_address(&self.binary, cidr).map(IpAddress::from)
    }

    /// Whether `other` is in the same `/cidr` network.
    ///
    /// Returns `false` rather than an error for a different family or an
    /// out of range `cidr`; see [`processing::in_range`].
    pub fn in_range(&self, other: &IpAddress, cidr: i32) -> bool {
        processing::in_range(&self.binary, &other.binary, cidr)
    }

    /// Longest prefix shared with `other`; both must be the same family.
    pub fn common_cidr(&self, other: &IpAddress) -> Result<u8, IpError> {
        processing::common_cidr(&self.binary, &other.binary)
    }

    pub fn is_loopback(&self) -> bool {
        Reserved::Loopback.contains(&self.binary)
    }

    pub fn is_link_local(&self) -> bool {
        Reserved::LinkLocal.contains(&self.binary)
    }

    pub fn is_multicast(&self) -> bool {
        Reserved::Multicast.contains(&self.binary)
    }

    pub fn is_private_use(&self) -> bool {
        Reserved::PrivateUse.contains(&self.binary)
    }

    pub fn is_unspecified(&self) -> bool {
        Reserved::Unspecified.contains(&self.binary)
    }

    pub fn is_broadcast(&self) -> bool {
        Reserved::Broadcast.contains(&self.binary)
    }

    pub fn is_shared(&self) -> bool {
        Reserved::Shared.contains(&self.binary)
    }

    pub fn is_documentation(&self) -> bool {
        Reserved::Documentation.contains(&self.binary)
    }

    pub fn is_benchmarking(&self) -> bool {
        Reserved::Benchmarking.contains(&self.binary)
    }

    pub fn is_future_reserved(&self) -> bool {
        Reserved::FutureReserved.contains(&self.binary)
    }

    /// Not in any reserved block.
    pub fn is_public_use(&self) -> bool {
        processing::is_public_use(&self.binary)
    }

    /// Reserved blocks this address belongs to.
    pub fn reserved(&self) -> Vec<Reserved> {
        processing::classify(&self.binary)
    }

    pub fn is_mapped(&self) -> bool {
        Embedding::Mapped.is_embedded(&self.binary)
    }

    pub fn is_compatible(&self) -> bool {
        Embedding::Compatible.is_embedded(&self.binary)
    }

    pub fn is_derived(&self) -> bool {
        Embedding::Derived.is_embedded(&self.binary)
    }

    pub fn is_embedded(&self) -> bool {
        self.embedding().is_some()
    }

    pub fn embedding(&self) -> Option<Embedding> {
        processing::detect(&self.binary)
    }

    /// The IPv4 address embedded in this IPv6 address, if there is one.
    pub fn embedded_ipv4(&self) -> Option<IpAddress> {
        self.embedding()
            .and_then(|embedding| embedding.extract(&self.binary))
            .map(|octets| IpAddress::from(BinaryAddress::from_v4(octets)))
    }

    /// The embedded IPv4 address when there is one, otherwise this address.
    pub fn protocol_appropriate(&self) -> IpAddress {
        self.embedded_ipv4().unwrap_or(*self)
    }

    fn embed_as(&self, embedding: Embedding) -> Result<IpAddress, IpError> {
        let octets = self.binary.v4_octets().ok_or(IpError::WrongVersion {
            expected: 4,
            actual: self.version(),
        })?;
        embedding
            .pack(octets)
            .map(IpAddress::from)
            .ok_or_else(|| IpError::NotEmbeddable {
                address: self.to_string(),
                embedding: embedding.name(),
            })
    }

    /// `::ffff:a.b.c.d` for this IPv4 address.
    pub fn to_mapped(&self) -> Result<IpAddress, IpError> {
        self.embed_as(Embedding::Mapped)
    }

    /// `::a.b.c.d` for this IPv4 address; `0.0.0.0` and `0.0.0.1` have no
    /// compatible form.
    pub fn to_compatible(&self) -> Result<IpAddress, IpError> {
        self.embed_as(Embedding::Compatible)
    }

    /// `2002:aabb:ccdd::` for this IPv4 address.
    pub fn to_derived(&self) -> Result<IpAddress, IpError> {
        self.embed_as(Embedding::Derived)
    }

    pub fn to_std(&self) -> IpAddr {
        self.binary.to_std()
    }
}

impl From<BinaryAddress> for IpAddress {
    fn from(binary: BinaryAddress) -> Self {
        IpAddress { binary }
    }
}

impl From<Ipv4Addr> for IpAddress {
    fn from(addr: Ipv4Addr) -> Self {
        IpAddress::from(BinaryAddress::from_v4(addr.octets()))
    }
}

impl From<Ipv6Addr> for IpAddress {
    fn from(addr: Ipv6Addr) -> Self {
        IpAddress::from(BinaryAddress::from_v6(addr.octets()))
    }
}

impl From<IpAddr> for IpAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => IpAddress::from(v4),
            IpAddr::V6(v6) => IpAddress::from(v6),
        }
    }
}

impl From<IpAddress> for IpAddr {
    fn from(addr: IpAddress) -> Self {
        addr.to_std()
    }
}

impl FromStr for IpAddress {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IpAddress::parse(s)
    }
}

impl TryFrom<&str> for IpAddress {
    type Error = IpError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        IpAddress::parse(text)
    }
}

impl TryFrom<&[u8]> for IpAddress {
    type Error = IpError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        IpAddress::from_binary(bytes)
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.binary, f)
    }
}

impl Serialize for IpAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for IpAddress {
    fn deserialize<D>(deserializer: D) -> Result<IpAddress, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IpAddress::parse(&s).map_err(de::Error::custom)
    }
}
