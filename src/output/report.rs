//! Summary of everything the library can say about one address.

use crate::error::IpError;
use crate::models::IpAddress;
use crate::processing::{Embedding, Reserved};
use super::text::hex_bytes;
use serde::Serialize;

/// A named boolean property of an address.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pub name: &'static str,
    pub value: bool,
}

/// Report on an address, optionally with a CIDR block and a second address.
#[derive(Serialize, Debug, Clone)]
pub struct Report {
    pub address: IpAddress,
    pub version: u8,
    /// Raw bytes as lowercase hex.
    pub binary: String,
    pub expanded: Option<String>,
    pub embedded_ipv4: Option<IpAddress>,
    pub flags: Vec<Flag>,
    pub cidr: Option<i32>,
    pub network: Option<IpAddress>,
    pub broadcast: Option<IpAddress>,
    pub other: Option<IpAddress>,
    /// `None` when the two addresses are of different families.
    pub common_cidr: Option<u8>,
    pub in_range: Option<bool>,
}

fn flags(address: &IpAddress) -> Vec<Flag> {
    let reserved = address.reserved();
    let mut flags: Vec<Flag> = Reserved::ALL
        .into_iter()
        .map(|block| Flag {
            name: block.name(),
            value: reserved.contains(&block),
        })
        .collect();
    flags.push(Flag {
        name: "public-use",
        value: reserved.is_empty(),
    });
    flags.extend(Embedding::ALL.into_iter().map(|embedding| Flag {
        name: embedding.name(),
        value: embedding.is_embedded(&address.binary()),
    }));
    flags.push(Flag {
        name: "embedded",
        value: address.is_embedded(),
    });
    flags
}

/// Build a [`Report`]; an out of range `cidr` is an error here.
pub fn build_report(
    address: &IpAddress,
    cidr: Option<i32>,
    other: Option<&IpAddress>,
) -> Result<Report, IpError> {
    let (network, broadcast) = match cidr {
        Some(cidr) => (
            Some(address.network_ip(cidr)?),
            Some(address.broadcast_ip(cidr)?),
        ),
        None => (None, None),
    };
    let common_cidr = other.and_then(|other| match address.common_cidr(other) {
        Ok(len) => Some(len),
        Err(e) => {
            log::warn!("{e}");
            None
        }
    });
    let in_range = other
        .zip(cidr)
        .map(|(other, cidr)| address.in_range(other, cidr));

    log::debug!("built report for {address}");
    Ok(Report {
        address: *address,
        version: address.version(),
        binary: hex_bytes(address.as_bytes()),
        expanded: address.expanded_address(),
        embedded_ipv4: address.embedded_ipv4(),
        flags: flags(address),
        cidr,
        network,
        broadcast,
        other: other.copied(),
        common_cidr,
        in_range,
    })
}
