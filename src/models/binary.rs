//! Fixed-width binary address substrate.
//!
//! [`BinaryAddress`] holds exactly 4 or 16 octets in network (big-endian)
//! order. The length invariant is carried by the representation, so every
//! value that exists is well-formed and nothing can change its bytes after
//! construction.

use crate::error::IpError;
use crate::output::text;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Byte width of a narrow (IPv4) address.
pub const V4_WIDTH: usize = 4;
/// Byte width of a wide (IPv6) address.
pub const V6_WIDTH: usize = 16;

/// Address family, derived from the byte width of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    /// 4 bytes, 32 bits.
    V4,
    /// 16 bytes, 128 bits.
    V6,
}

impl Family {
    /// Family for a byte width, `None` for anything but 4 or 16.
    pub const fn from_width(width: usize) -> Option<Family> {
        match width {
            V4_WIDTH => Some(Family::V4),
            V6_WIDTH => Some(Family::V6),
            _ => None,
        }
    }

    pub const fn width(self) -> usize {
        match self {
            Family::V4 => V4_WIDTH,
            Family::V6 => V6_WIDTH,
        }
    }

    /// Total bit width, also the largest valid CIDR prefix.
    pub const fn bits(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// Protocol version number, 4 or 6.
    pub const fn version(self) -> u8 {
        match self {
            Family::V4 => 4,
            Family::V6 => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Octets {
    V4([u8; V4_WIDTH]),
    V6([u8; V6_WIDTH]),
}

/// An immutable 4- or 16-byte address.
///
/// Ordering is by family first (narrow before wide), then by the bytes as a
/// big-endian unsigned integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BinaryAddress {
    octets: Octets,
}

impl BinaryAddress {
    /// Build from raw bytes; the slice must be exactly 4 or 16 bytes long.
    ///
    /// # Examples
    /// ```
    /// use ip_binary::{BinaryAddress, Family};
    /// let addr = BinaryAddress::new(&[127, 0, 0, 1]).unwrap();
    /// assert_eq!(addr.family(), Family::V4);
    /// assert!(BinaryAddress::new(&[1, 2, 3]).is_err());
    /// ```
    pub fn new(bytes: &[u8]) -> Result<BinaryAddress, IpError> {
        match Family::from_width(bytes.len()) {
            Some(family) => Ok(BinaryAddress::from_fn(family, |i| bytes[i])),
            None => {
                log::trace!("rejected binary address of {} bytes", bytes.len());
                Err(IpError::InvalidAddressLength {
                    length: bytes.len(),
                })
            }
        }
    }

    pub const fn from_v4(octets: [u8; V4_WIDTH]) -> BinaryAddress {
        BinaryAddress {
            octets: Octets::V4(octets),
        }
    }

    pub const fn from_v6(octets: [u8; V6_WIDTH]) -> BinaryAddress {
        BinaryAddress {
            octets: Octets::V6(octets),
        }
    }

    /// Build an address of `family` whose byte `i` is `f(i)`.
    pub(crate) fn from_fn(family: Family, f: impl FnMut(usize) -> u8) -> BinaryAddress {
        match family {
            Family::V4 => BinaryAddress::from_v4(std::array::from_fn(f)),
            Family::V6 => BinaryAddress::from_v6(std::array::from_fn(f)),
        }
    }

    /// Read-only view of the raw bytes, network order.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.octets {
            Octets::V4(octets) => octets,
            Octets::V6(octets) => octets,
        }
    }

    pub fn family(&self) -> Family {
        match self.octets {
            Octets::V4(_) => Family::V4,
            Octets::V6(_) => Family::V6,
        }
    }

    /// Number of bytes, 4 or 16.
    pub fn width(&self) -> usize {
        self.family().width()
    }

    pub fn v4_octets(&self) -> Option<[u8; V4_WIDTH]> {
        match self.octets {
            Octets::V4(octets) => Some(octets),
            Octets::V6(_) => None,
        }
    }

    pub fn v6_octets(&self) -> Option<[u8; V6_WIDTH]> {
        match self.octets {
            Octets::V4(_) => None,
            Octets::V6(octets) => Some(octets),
        }
    }

    /// Number of one-bits across all bytes.
    pub fn count_ones(&self) -> u32 {
        self.as_bytes().iter().map(|b| b.count_ones()).sum()
    }

    pub fn to_std(&self) -> IpAddr {
        match self.octets {
            Octets::V4(octets) => IpAddr::V4(Ipv4Addr::from(octets)),
            Octets::V6(octets) => IpAddr::V6(Ipv6Addr::from(octets)),
        }
    }
}

/// Dotted-decimal for IPv4, compressed colon-hex for IPv6.
impl fmt::Display for BinaryAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.octets {
            Octets::V4(octets) => f.write_str(&text::dot_address(*octets)),
            Octets::V6(octets) => f.write_str(&text::compressed_address(octets)),
        }
    }
}

impl TryFrom<&[u8]> for BinaryAddress {
    type Error = IpError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        BinaryAddress::new(bytes)
    }
}

impl AsRef<[u8]> for BinaryAddress {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_only_4_or_16_bytes() {
        for length in [0, 1, 3, 5, 8, 12, 15, 17, 32] {
            let bytes = vec![0u8; length];
            assert_eq!(
                BinaryAddress::new(&bytes),
                Err(IpError::InvalidAddressLength { length }),
                "length {length} should be rejected"
            );
        }
        assert_eq!(BinaryAddress::new(&[0u8; 4]).unwrap().family(), Family::V4);
        let wide: Vec<u8> = (0..16).collect();
        let addr = BinaryAddress::new(&wide).unwrap();
        assert_eq!(addr.family(), Family::V6);
        assert_eq!(addr.as_bytes(), wide.as_slice());
    }

    #[test]
    fn test_bytes_are_kept_verbatim() {
        let raw = [0x77, 0x0e, 0x71, 0x2c];
        let addr = BinaryAddress::new(&raw).unwrap();
        assert_eq!(addr.as_bytes(), &raw);
        assert_eq!(addr.v4_octets(), Some(raw));
        assert_eq!(addr.v6_octets(), None);
    }

    #[test]
    fn test_family() {
        assert_eq!(Family::from_width(4), Some(Family::V4));
        assert_eq!(Family::from_width(16), Some(Family::V6));
        assert_eq!(Family::from_width(8), None);
        assert_eq!(Family::V4.bits(), 32);
        assert_eq!(Family::V6.bits(), 128);
        assert_eq!(Family::V4.version(), 4);
        assert_eq!(Family::V6.version(), 6);
    }

    #[test]
    fn test_ordering_is_big_endian() {
        let lo = BinaryAddress::from_v4([10, 0, 0, 255]);
        let hi = BinaryAddress::from_v4([10, 0, 1, 0]);
        assert!(lo < hi);
        // narrow sorts before wide regardless of bytes
        assert!(BinaryAddress::from_v4([255; 4]) < BinaryAddress::from_v6([0; 16]));
    }

    #[test]
    fn test_display() {
        assert_eq!(BinaryAddress::from_v4([12, 34, 56, 78]).to_string(), "12.34.56.78");
        let mut octets = [0u8; 16];
        octets[15] = 1;
        assert_eq!(BinaryAddress::from_v6(octets).to_string(), "::1");
    }

    #[test]
    fn test_from_fn_and_count_ones() {
        let addr = BinaryAddress::from_fn(Family::V6, |i| if i < 2 { 0xff } else { 0 });
        assert_eq!(addr.width(), 16);
        assert_eq!(addr.count_ones(), 16);
        assert_eq!(&addr.as_bytes()[..3], &[0xff, 0xff, 0x00]);
    }
}
