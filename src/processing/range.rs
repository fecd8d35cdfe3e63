//! Range membership and shared-prefix comparison between two addresses.

use super::mask::network_address;
use crate::error::IpError;
use crate::models::BinaryAddress;

/// Whether `a` and `b` fall in the same network of prefix length `cidr`.
///
/// Unlike the rest of the crate this never fails: addresses of different
/// families, or a `cidr` out of range for their family, are simply not in
/// range. This is deliberate so the check can be used directly as a filter
/// predicate, and is the one place an invalid CIDR does not surface as
/// [`IpError::InvalidCidr`].
pub fn in_range(a: &BinaryAddress, b: &BinaryAddress, cidr: i32) -> bool {
    if a.family() != b.family() {
        log::trace!(
            "IPv{} and IPv{} addresses are never in range",
            a.family().version(),
            b.family().version()
        );
        return false;
    }
    match (network_address(a, cidr), network_address(b, cidr)) {
        (Ok(a_network), Ok(b_network)) => a_network == b_network,
        _ => false,
    }
}

/// Length of the longest prefix `a` and `b` have in common.
///
/// This is the largest `cidr` for which [`in_range`] holds.
pub fn common_cidr(a: &BinaryAddress, b: &BinaryAddress) -> Result<u8, IpError> {
    if a.family() != b.family() {
        return Err(IpError::WrongVersion {
            expected: a.family().version(),
            actual: b.family().version(),
        });
    }
    let mut len = 0u8;
    for (x, y) in a.as_bytes().iter().zip(b.as_bytes()) {
        let diff = x ^ y;
        len += diff.leading_zeros() as u8;
        if diff != 0 {
            break;
        }
    }
    Ok(len)
}
