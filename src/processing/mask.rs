//! CIDR mask generation and the network/broadcast addresses derived from it.
//!
//! Masks are built one byte at a time, so the same code serves 32-bit and
//! 128-bit addresses without needing an integer as wide as the address.

use crate::error::IpError;
use crate::models::{BinaryAddress, Family};

/// Check `cidr` against `[0, family.bits()]`.
pub fn validate_cidr(cidr: i32, family: Family) -> Result<u8, IpError> {
    let max = family.bits();
    match u8::try_from(cidr) {
        Ok(len) if len <= max => Ok(len),
        _ => {
            log::debug!("CIDR /{cidr} is out of range for IPv{}", family.version());
            Err(IpError::InvalidCidr { cidr, max })
        }
    }
}

/// Mask byte at `index` for a prefix of `len` bits: leading ones, trailing zeros.
fn mask_byte(len: u8, index: usize) -> u8 {
    let set_bits = (i32::from(len) - 8 * index as i32).clamp(0, 8) as u32;
    // shifting by 8 would overflow a u8, which is the all-zero byte
    0xFFu8.checked_shl(8 - set_bits).unwrap_or(0)
}

/// Generate the network mask for a CIDR prefix.
///
/// # Examples
/// ```
/// use ip_binary::{generate_mask, Family};
/// assert_eq!(generate_mask(24, Family::V4).unwrap().as_bytes(), &[0xff, 0xff, 0xff, 0x00]);
/// assert!(generate_mask(33, Family::V4).is_err());
/// ```
pub fn generate_mask(cidr: i32, family: Family) -> Result<BinaryAddress, IpError> {
    let len = validate_cidr(cidr, family)?;
    Ok(BinaryAddress::from_fn(family, |i| mask_byte(len, i)))
}

fn apply_mask(
    addr: &BinaryAddress,
    cidr: i32,
    combine: impl Fn(u8, u8) -> u8,
) -> Result<BinaryAddress, IpError> {
    let mask = generate_mask(cidr, addr.family())?;
    let (bytes, mask) = (addr.as_bytes(), mask.as_bytes());
    Ok(BinaryAddress::from_fn(addr.family(), |i| {
        combine(bytes[i], mask[i])
    }))
}

/// Lowest address of the network: every bit after the prefix cleared.
pub fn network_address(addr: &BinaryAddress, cidr: i32) -> Result<BinaryAddress, IpError> {
    apply_mask(addr, cidr, |byte, mask| byte & mask)
}

/// Highest address of the network: every bit after the prefix set.
pub fn broadcast_address(addr: &BinaryAddress, cidr: i32) -> Result<BinaryAddress, IpError> {
    apply_mask(addr, cidr, |byte, mask| byte | !mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v4(octets: [u8; 4]) -> BinaryAddress {
        BinaryAddress::from_v4(octets)
    }

    #[test]
    fn test_generate_mask_v4() {
        let cases: [(i32, [u8; 4]); 9] = [
            (0, [0x00, 0x00, 0x00, 0x00]),
            (1, [0x80, 0x00, 0x00, 0x00]),
            (3, [0xe0, 0x00, 0x00, 0x00]),
            (8, [0xff, 0x00, 0x00, 0x00]),
            (12, [0xff, 0xf0, 0x00, 0x00]),
            (17, [0xff, 0xff, 0x80, 0x00]),
            (24, [0xff, 0xff, 0xff, 0x00]),
            (31, [0xff, 0xff, 0xff, 0xfe]),
            (32, [0xff, 0xff, 0xff, 0xff]),
        ];
        for (cidr, expected) in cases {
            assert_eq!(
                generate_mask(cidr, Family::V4).unwrap().as_bytes(),
                &expected,
                "mask /{cidr}"
            );
        }
    }

    #[test]
    fn test_generate_mask_v6() {
        let mask = generate_mask(10, Family::V6).unwrap();
        assert_eq!(mask.width(), 16);
        assert_eq!(&mask.as_bytes()[..3], &[0xff, 0xc0, 0x00]);
        assert!(mask.as_bytes()[2..].iter().all(|b| *b == 0));

        assert!(generate_mask(0, Family::V6)
            .unwrap()
            .as_bytes()
            .iter()
            .all(|b| *b == 0));
        assert!(generate_mask(128, Family::V6)
            .unwrap()
            .as_bytes()
            .iter()
            .all(|b| *b == 0xff));
    }

    #[test]
    fn test_mask_bit_count_matches_prefix() {
        for family in [Family::V4, Family::V6] {
            for cidr in 0..=i32::from(family.bits()) {
                let mask = generate_mask(cidr, family).unwrap();
                assert_eq!(mask.count_ones(), cidr as u32, "{family:?} /{cidr}");
                assert_eq!(mask.width(), family.width());
            }
        }
    }

    #[test]
    fn test_generate_mask_rejects_out_of_range() {
        for (cidr, family) in [
            (-1, Family::V4),
            (33, Family::V4),
            (-1, Family::V6),
            (129, Family::V6),
            (i32::MIN, Family::V4),
            (i32::MAX, Family::V6),
        ] {
            assert_eq!(
                generate_mask(cidr, family),
                Err(IpError::InvalidCidr {
                    cidr,
                    max: family.bits()
                })
            );
        }
    }

    #[test]
    fn test_network_address() {
        let ip = v4([12, 34, 56, 78]);
        assert_eq!(network_address(&ip, 32).unwrap(), ip);
        assert_eq!(network_address(&ip, 24).unwrap(), v4([12, 34, 56, 0]));
        assert_eq!(network_address(&ip, 17).unwrap(), v4([12, 34, 0, 0]));
        assert_eq!(network_address(&ip, 8).unwrap(), v4([12, 0, 0, 0]));
        assert_eq!(network_address(&ip, 0).unwrap(), v4([0, 0, 0, 0]));
        assert!(network_address(&ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_address() {
        let ip = v4([12, 34, 56, 78]);
        assert_eq!(broadcast_address(&ip, 32).unwrap(), ip);
        assert_eq!(broadcast_address(&ip, 24).unwrap(), v4([12, 34, 56, 255]));
        assert_eq!(broadcast_address(&ip, 17).unwrap(), v4([12, 34, 127, 255]));
        assert_eq!(broadcast_address(&ip, 0).unwrap(), v4([255, 255, 255, 255]));
        assert!(broadcast_address(&ip, -1).is_err());
    }

    #[test]
    fn test_network_broadcast_sandwich() {
        let addrs = [
            v4([12, 34, 56, 78]),
            v4([255, 255, 255, 255]),
            v4([0, 0, 0, 0]),
            BinaryAddress::from_v6([
                0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0x0a, 0x60, 0x8a, 0x2e, 0x03, 0x70, 0x73,
                0x34,
            ]),
        ];
        for addr in addrs {
            for cidr in 0..=i32::from(addr.family().bits()) {
                let network = network_address(&addr, cidr).unwrap();
                let broadcast = broadcast_address(&addr, cidr).unwrap();
                assert!(network <= addr, "{addr:?} /{cidr}");
                assert!(addr <= broadcast, "{addr:?} /{cidr}");
                assert_eq!(network.width(), addr.width());
            }
        }
    }
}
