//! IPv4 addresses carried inside IPv6 addresses.
//!
//! Three layouts are recognised:
//! - mapped, `::ffff:a.b.c.d` (`::ffff:0:0/96`);
//! - compatible, `::a.b.c.d` (`::/96` except `::` and `::1`);
//! - derived, 6to4 `2002:aabb:ccdd::/48` with the address in bits 16 to 47.

use super::classify::Reserved;
use super::range::in_range;
use crate::models::{BinaryAddress, V4_WIDTH, V6_WIDTH};

const MAPPED_PREFIX: BinaryAddress =
    BinaryAddress::from_v6([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 0, 0, 0, 0]);
const MAPPED_CIDR: i32 = 96;
const COMPATIBLE_PREFIX: BinaryAddress = BinaryAddress::from_v6([0; V6_WIDTH]);
const COMPATIBLE_CIDR: i32 = 96;
const DERIVED_PREFIX: BinaryAddress =
    BinaryAddress::from_v6([0x20, 0x02, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
const DERIVED_CIDR: i32 = 16;

/// Where an IPv4 address sits inside an IPv6 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Embedding {
    Mapped,
    Compatible,
    Derived,
}

impl Embedding {
    /// Checked in this order by [`detect`].
    pub const ALL: [Embedding; 3] = [
        Embedding::Mapped,
        Embedding::Compatible,
        Embedding::Derived,
    ];

    /// Byte offset of the IPv4 address within the IPv6 bytes.
    fn offset(self) -> usize {
        match self {
            Embedding::Mapped | Embedding::Compatible => 12,
            Embedding::Derived => 2,
        }
    }

    /// Whether `addr` is a wide address laid out this way. Narrow addresses never are.
    pub fn is_embedded(self, addr: &BinaryAddress) -> bool {
        match self {
            Embedding::Mapped => in_range(addr, &MAPPED_PREFIX, MAPPED_CIDR),
            Embedding::Compatible => {
                in_range(addr, &COMPATIBLE_PREFIX, COMPATIBLE_CIDR)
                    && !Reserved::Unspecified.contains(addr)
                    && !Reserved::Loopback.contains(addr)
            }
            Embedding::Derived => in_range(addr, &DERIVED_PREFIX, DERIVED_CIDR),
        }
    }

    /// The embedded IPv4 bytes, if `addr` uses this layout.
    pub fn extract(self, addr: &BinaryAddress) -> Option<[u8; V4_WIDTH]> {
        if !self.is_embedded(addr) {
            return None;
        }
        let offset = self.offset();
        let mut octets = [0u8; V4_WIDTH];
        octets.copy_from_slice(&addr.as_bytes()[offset..offset + V4_WIDTH]);
        Some(octets)
    }

    /// Place `octets` into an IPv6 address using this layout.
    ///
    /// `None` when the result would not read back as this layout: the
    /// compatible layout cannot carry `0.0.0.0` or `0.0.0.1`, which pack
    /// to `::` and `::1`.
    pub fn pack(self, octets: [u8; V4_WIDTH]) -> Option<BinaryAddress> {
        let prefix = match self {
            Embedding::Mapped => MAPPED_PREFIX,
            Embedding::Compatible => COMPATIBLE_PREFIX,
            Embedding::Derived => DERIVED_PREFIX,
        };
        let offset = self.offset();
        let mut wide = [0u8; V6_WIDTH];
        wide.copy_from_slice(prefix.as_bytes());
        wide[offset..offset + V4_WIDTH].copy_from_slice(&octets);
        let wide = BinaryAddress::from_v6(wide);
        self.is_embedded(&wide).then_some(wide)
    }

    pub fn name(self) -> &'static str {
        match self {
            Embedding::Mapped => "mapped",
            Embedding::Compatible => "compatible",
            Embedding::Derived => "derived",
        }
    }
}

/// The first layout `addr` matches, if any.
pub fn detect(addr: &BinaryAddress) -> Option<Embedding> {
    Embedding::ALL
        .into_iter()
        .find(|embedding| embedding.is_embedded(addr))
}
