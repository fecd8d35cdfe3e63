//! Textual rendering of binary addresses.

use crate::models::{V4_WIDTH, V6_WIDTH};
use itertools::Itertools;

const GROUPS: usize = V6_WIDTH / 2;

/// Lowercase hex of `bytes`, two digits per byte and no separator.
pub fn hex_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).join("")
}

/// `a.b.c.d`.
pub fn dot_address(octets: [u8; V4_WIDTH]) -> String {
    octets.iter().join(".")
}

fn groups(octets: &[u8; V6_WIDTH]) -> [u16; GROUPS] {
    std::array::from_fn(|i| u16::from_be_bytes([octets[2 * i], octets[2 * i + 1]]))
}

/// Start and length of the longest run of two or more zero groups, first one on ties.
fn longest_zero_run(groups: &[u16; GROUPS]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut i = 0;
    while i < GROUPS {
        if groups[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < GROUPS && groups[i] == 0 {
            i += 1;
        }
        let len = i - start;
        if len >= 2 && best.map_or(true, |(_, best_len)| len > best_len) {
            best = Some((start, len));
        }
    }
    best
}

fn hex_groups(groups: &[u16]) -> String {
    groups.iter().map(|group| format!("{group:x}")).join(":")
}

/// Canonical colon-hex: lowercase, no leading zeros, the longest zero run as `::`.
///
/// # Examples
/// ```
/// use ip_binary::output::compressed_address;
/// let mut octets = [0u8; 16];
/// octets[15] = 1;
/// assert_eq!(compressed_address(&octets), "::1");
/// ```
pub fn compressed_address(octets: &[u8; V6_WIDTH]) -> String {
    let groups = groups(octets);
    match longest_zero_run(&groups) {
        Some((start, len)) => format!(
            "{}::{}",
            hex_groups(&groups[..start]),
            hex_groups(&groups[start + len..])
        ),
        None => hex_groups(&groups),
    }
}

/// All eight groups, four digits each.
pub fn expanded_address(octets: &[u8; V6_WIDTH]) -> String {
    groups(octets)
        .iter()
        .map(|group| format!("{group:04x}"))
        .join(":")
}
