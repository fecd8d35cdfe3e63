//! Reserved-range classification.
//!
//! Each [`Reserved`] block has one compiled-in table per family. An address
//! is only ever tested against the table for its own family, and a family
//! with no such block has an empty table.

use super::range::in_range;
use crate::models::{BinaryAddress, Family, V6_WIDTH};

/// A network prefix: `network` with its leading `cidr` bits significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReservedRange {
    network: BinaryAddress,
    cidr: u8,
}

impl ReservedRange {
    const fn v4(octets: [u8; 4], cidr: u8) -> ReservedRange {
        ReservedRange {
            network: BinaryAddress::from_v4(octets),
            cidr,
        }
    }

    /// Wide prefix from its leading bytes, the rest zero.
    const fn v6<const N: usize>(head: [u8; N], cidr: u8) -> ReservedRange {
        let mut octets = [0u8; V6_WIDTH];
        let mut i = 0;
        while i < N {
            octets[i] = head[i];
            i += 1;
        }
        ReservedRange {
            network: BinaryAddress::from_v6(octets),
            cidr,
        }
    }

    pub fn network(&self) -> &BinaryAddress {
        &self.network
    }

    pub fn cidr(&self) -> u8 {
        self.cidr
    }

    pub fn contains(&self, addr: &BinaryAddress) -> bool {
        in_range(&self.network, addr, i32::from(self.cidr))
    }
}

const V4_LOOPBACK: &[ReservedRange] = &[ReservedRange::v4([127, 0, 0, 0], 8)];
const V4_LINK_LOCAL: &[ReservedRange] = &[ReservedRange::v4([169, 254, 0, 0], 16)];
const V4_MULTICAST: &[ReservedRange] = &[ReservedRange::v4([224, 0, 0, 0], 4)];
const V4_PRIVATE_USE: &[ReservedRange] = &[
    ReservedRange::v4([10, 0, 0, 0], 8),
    ReservedRange::v4([172, 16, 0, 0], 12),
    ReservedRange::v4([192, 168, 0, 0], 16),
];
const V4_UNSPECIFIED: &[ReservedRange] = &[ReservedRange::v4([0, 0, 0, 0], 32)];
const V4_BROADCAST: &[ReservedRange] = &[ReservedRange::v4([255, 255, 255, 255], 32)];
const V4_SHARED: &[ReservedRange] = &[ReservedRange::v4([100, 64, 0, 0], 10)];
const V4_DOCUMENTATION: &[ReservedRange] = &[
    ReservedRange::v4([192, 0, 2, 0], 24),
    ReservedRange::v4([198, 51, 100, 0], 24),
    ReservedRange::v4([203, 0, 113, 0], 24),
];
const V4_BENCHMARKING: &[ReservedRange] = &[ReservedRange::v4([198, 18, 0, 0], 15)];
const V4_FUTURE_RESERVED: &[ReservedRange] = &[ReservedRange::v4([240, 0, 0, 0], 4)];

const V6_LOOPBACK: &[ReservedRange] = &[ReservedRange::v6(
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    128,
)];
const V6_LINK_LOCAL: &[ReservedRange] = &[ReservedRange::v6([0xfe, 0x80], 10)];
const V6_MULTICAST: &[ReservedRange] = &[ReservedRange::v6([0xff], 8)];
const V6_PRIVATE_USE: &[ReservedRange] = &[ReservedRange::v6([0xfc], 7)];
const V6_UNSPECIFIED: &[ReservedRange] = &[ReservedRange::v6([0], 128)];
const V6_DOCUMENTATION: &[ReservedRange] = &[ReservedRange::v6([0x20, 0x01, 0x0d, 0xb8], 32)];
const V6_BENCHMARKING: &[ReservedRange] =
    &[ReservedRange::v6([0x20, 0x01, 0x00, 0x02, 0x00, 0x00], 48)];

/// Well-known reserved address blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reserved {
    Loopback,
    LinkLocal,
    Multicast,
    PrivateUse,
    Unspecified,
    /// Limited broadcast, narrow family only.
    Broadcast,
    /// Carrier-grade NAT space, narrow family only.
    Shared,
    Documentation,
    Benchmarking,
    /// Former class E, narrow family only.
    FutureReserved,
}

impl Reserved {
    pub const ALL: [Reserved; 10] = [
        Reserved::Loopback,
        Reserved::LinkLocal,
        Reserved::Multicast,
        Reserved::PrivateUse,
        Reserved::Unspecified,
        Reserved::Broadcast,
        Reserved::Shared,
        Reserved::Documentation,
        Reserved::Benchmarking,
        Reserved::FutureReserved,
    ];

    /// The prefixes making up this block for `family`.
    pub fn ranges(self, family: Family) -> &'static [ReservedRange] {
        match (family, self) {
            (Family::V4, Reserved::Loopback) => V4_LOOPBACK,
            (Family::V4, Reserved::LinkLocal) => V4_LINK_LOCAL,
            (Family::V4, Reserved::Multicast) => V4_MULTICAST,
            (Family::V4, Reserved::PrivateUse) => V4_PRIVATE_USE,
            (Family::V4, Reserved::Unspecified) => V4_UNSPECIFIED,
            (Family::V4, Reserved::Broadcast) => V4_BROADCAST,
            (Family::V4, Reserved::Shared) => V4_SHARED,
            (Family::V4, Reserved::Documentation) => V4_DOCUMENTATION,
            (Family::V4, Reserved::Benchmarking) => V4_BENCHMARKING,
            (Family::V4, Reserved::FutureReserved) => V4_FUTURE_RESERVED,
            (Family::V6, Reserved::Loopback) => V6_LOOPBACK,
            (Family::V6, Reserved::LinkLocal) => V6_LINK_LOCAL,
            (Family::V6, Reserved::Multicast) => V6_MULTICAST,
            (Family::V6, Reserved::PrivateUse) => V6_PRIVATE_USE,
            (Family::V6, Reserved::Unspecified) => V6_UNSPECIFIED,
            (Family::V6, Reserved::Documentation) => V6_DOCUMENTATION,
            (Family::V6, Reserved::Benchmarking) => V6_BENCHMARKING,
            (Family::V6, Reserved::Broadcast | Reserved::Shared | Reserved::FutureReserved) => &[],
        }
    }

    pub fn contains(self, addr: &BinaryAddress) -> bool {
        self.ranges(addr.family())
            .iter()
            .any(|range| range.contains(addr))
    }

    pub fn name(self) -> &'static str {
        match self {
            Reserved::Loopback => "loopback",
            Reserved::LinkLocal => "link-local",
            Reserved::Multicast => "multicast",
            Reserved::PrivateUse => "private-use",
            Reserved::Unspecified => "unspecified",
            Reserved::Broadcast => "broadcast",
            Reserved::Shared => "shared",
            Reserved::Documentation => "documentation",
            Reserved::Benchmarking => "benchmarking",
            Reserved::FutureReserved => "future-reserved",
        }
    }
}

/// Every reserved block `addr` belongs to.
pub fn classify(addr: &BinaryAddress) -> Vec<Reserved> {
    Reserved::ALL
        .into_iter()
        .filter(|reserved| reserved.contains(addr))
        .collect()
}

/// True when `addr` is in none of the reserved blocks.
pub fn is_public_use(addr: &BinaryAddress) -> bool {
    !Reserved::ALL
        .iter()
        .any(|reserved| reserved.contains(addr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::mask::network_address;

    fn v4(octets: [u8; 4]) -> BinaryAddress {
        BinaryAddress::from_v4(octets)
    }

    fn v6(head: &[u8], tail: &[u8]) -> BinaryAddress {
        let mut octets = [0u8; 16];
        octets[..head.len()].copy_from_slice(head);
        octets[16 - tail.len()..].copy_from_slice(tail);
        BinaryAddress::from_v6(octets)
    }

    #[test]
    fn test_tables_hold_network_addresses() {
        for family in [Family::V4, Family::V6] {
            for reserved in Reserved::ALL {
                for range in reserved.ranges(family) {
                    assert_eq!(range.network().family(), family);
                    assert!(range.cidr() <= family.bits());
                    assert_eq!(
                        network_address(range.network(), i32::from(range.cidr())).unwrap(),
                        *range.network(),
                        "{reserved:?} {family:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_v4_loopback() {
        assert!(Reserved::Loopback.contains(&v4([127, 0, 0, 1])));
        assert!(Reserved::Loopback.contains(&v4([127, 255, 255, 255])));
        assert!(!Reserved::Loopback.contains(&v4([128, 0, 0, 1])));
    }

    #[test]
    fn test_v4_link_local() {
        assert!(Reserved::LinkLocal.contains(&v4([169, 254, 0, 0])));
        assert!(Reserved::LinkLocal.contains(&v4([169, 254, 255, 255])));
        assert!(!Reserved::LinkLocal.contains(&v4([169, 253, 255, 255])));
        assert!(!Reserved::LinkLocal.contains(&v4([169, 255, 0, 0])));
    }

    #[test]
    fn test_v4_multicast() {
        assert!(Reserved::Multicast.contains(&v4([224, 0, 0, 1])));
        assert!(Reserved::Multicast.contains(&v4([239, 255, 255, 255])));
        assert!(!Reserved::Multicast.contains(&v4([223, 255, 255, 255])));
        assert!(!Reserved::Multicast.contains(&v4([240, 0, 0, 0])));
    }

    #[test]
    fn test_v4_private_use() {
        for private in [
            v4([10, 0, 0, 0]),
            v4([10, 255, 255, 255]),
            v4([172, 16, 0, 0]),
            v4([172, 31, 255, 255]),
            v4([192, 168, 0, 0]),
            v4([192, 168, 255, 255]),
        ] {
            assert!(Reserved::PrivateUse.contains(&private), "{private:?}");
        }
        for public in [
            v4([9, 255, 255, 255]),
            v4([11, 0, 0, 0]),
            v4([172, 15, 255, 255]),
            v4([172, 32, 0, 0]),
            v4([192, 167, 255, 255]),
            v4([192, 169, 0, 0]),
        ] {
            assert!(!Reserved::PrivateUse.contains(&public), "{public:?}");
        }
    }

    #[test]
    fn test_v4_unspecified() {
        assert!(Reserved::Unspecified.contains(&v4([0, 0, 0, 0])));
        assert!(!Reserved::Unspecified.contains(&v4([0, 0, 0, 1])));
    }

    #[test]
    fn test_v6_blocks() {
        assert!(Reserved::Loopback.contains(&v6(&[], &[1])));
        assert!(!Reserved::Loopback.contains(&v6(&[], &[2])));
        assert!(Reserved::Unspecified.contains(&v6(&[], &[])));
        assert!(!Reserved::Unspecified.contains(&v6(&[], &[1])));
        assert!(Reserved::LinkLocal.contains(&v6(&[0xfe, 0x80], &[1])));
        assert!(Reserved::LinkLocal.contains(&v6(&[0xfe, 0xbf, 0xff], &[])));
        assert!(!Reserved::LinkLocal.contains(&v6(&[0xfe, 0xc0], &[])));
        assert!(Reserved::Multicast.contains(&v6(&[0xff, 0x02], &[1])));
        assert!(!Reserved::Multicast.contains(&v6(&[0xfe, 0xff], &[])));
        assert!(Reserved::PrivateUse.contains(&v6(&[0xfc], &[])));
        assert!(Reserved::PrivateUse.contains(&v6(&[0xfd, 0x12], &[1])));
        assert!(!Reserved::PrivateUse.contains(&v6(&[0xfe], &[])));
        assert!(Reserved::Documentation.contains(&v6(&[0x20, 0x01, 0x0d, 0xb8], &[1])));
    }

    #[test]
    fn test_families_never_share_tables() {
        // 127.0.0.1 packed into the tail of a wide address is not loopback
        let wide = v6(&[], &[127, 0, 0, 1]);
        assert!(!Reserved::Loopback.contains(&wide));
        assert!(Reserved::Broadcast.ranges(Family::V6).is_empty());
        assert!(!Reserved::Broadcast.contains(&v6(&[0xff; 16], &[])));
    }

    #[test]
    fn test_classify_and_public_use() {
        assert_eq!(
            classify(&v4([255, 255, 255, 255])),
            vec![Reserved::Broadcast, Reserved::FutureReserved]
        );
        assert_eq!(classify(&v4([100, 100, 0, 1])), vec![Reserved::Shared]);
        assert_eq!(classify(&v4([198, 19, 0, 1])), vec![Reserved::Benchmarking]);
        assert!(is_public_use(&v4([8, 8, 8, 8])));
        assert!(!is_public_use(&v4([10, 0, 0, 1])));
        assert!(is_public_use(&v6(&[0x26, 0x06, 0x47, 0x00], &[0x11, 0x11])));
        assert!(!is_public_use(&v6(&[], &[1])));
    }
}
