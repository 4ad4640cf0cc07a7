//! Single CIDR analysis.
//!
//! Turns one `address/prefix` string into a [`NetworkInfo`] report.

use crate::error::Result;
use crate::models::{Address, AddressCount, IpVersion, Network};
use serde::Serialize;

/// Placeholder shown for values that do not apply to a block.
pub const NOT_APPLICABLE: &str = "N/A";

/// Report on one CIDR block, fields in display order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    /// Address family.
    pub version: IpVersion,
    /// CIDR notation of the normalized block.
    pub cidr: Network,
    /// Network address.
    pub network: Address,
    /// Broadcast address (IPv4 only, IPv6 has no broadcast).
    pub broadcast: Option<Address>,
    pub netmask: Address,
    pub prefix_length: u8,
    /// First address of the block.
    pub start: Address,
    /// Last address of the block.
    pub end: Address,
    /// Exact number of addresses, serialized as a decimal string.
    pub address_count: AddressCount,
    /// First usable host address, None for blocks of one or two addresses.
    pub first_usable: Option<Address>,
    /// Last usable host address, None for blocks of one or two addresses.
    pub last_usable: Option<Address>,
    /// Binary renderings (IPv4 only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary: Option<BinaryView>,
}

/// Zero-padded binary strings of a block's bounds and mask.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BinaryView {
    pub start: String,
    pub end: String,
    pub netmask: String,
}

impl NetworkInfo {
    pub fn from_network(network: &Network) -> NetworkInfo {
        let version = network.version();
        let end = network.broadcast();
        NetworkInfo {
            version,
            cidr: *network,
            network: network.base(),
            broadcast: (version == IpVersion::V4).then_some(end),
            netmask: network.mask(),
            prefix_length: network.prefix(),
            start: network.base(),
            end,
            address_count: network.address_count(),
            first_usable: network.first_usable(),
            last_usable: network.last_usable(),
            binary: (version == IpVersion::V4).then(|| BinaryView {
                start: network.base().to_binary_string(),
                end: end.to_binary_string(),
                netmask: network.mask().to_binary_string(),
            }),
        }
    }

    /// Ordered `(label, value)` pairs for display, "N/A" for absent values.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let or_na = |addr: Option<Address>| {
            addr.map(|a| a.to_string())
                .unwrap_or_else(|| NOT_APPLICABLE.to_string())
        };

        let mut entries = vec![
            ("Version", self.version.to_string()),
            ("Network address", self.network.to_string()),
            ("Broadcast address", or_na(self.broadcast)),
            ("Netmask", self.netmask.to_string()),
            ("Prefix length", self.prefix_length.to_string()),
            ("Start IP", self.start.to_string()),
            ("End IP", self.end.to_string()),
            ("Address count", self.address_count.to_string()),
            ("First usable", or_na(self.first_usable)),
            ("Last usable", or_na(self.last_usable)),
        ];
        if let Some(binary) = &self.binary {
            entries.push(("Start IP (binary)", binary.start.clone()));
            entries.push(("End IP (binary)", binary.end.clone()));
            entries.push(("Netmask (binary)", binary.netmask.clone()));
        }
        entries
    }
}

/// Analyze `address/prefix` text. A host address is normalized to its network.
///
/// # Examples
/// ```
/// use cidr_calculator::analyze_network;
/// let info = analyze_network("192.168.1.0/24").unwrap();
/// assert_eq!(info.broadcast.unwrap().to_string(), "192.168.1.255");
/// assert_eq!(info.address_count.to_string(), "256");
/// ```
pub fn analyze_network(cidr_text: &str) -> Result<NetworkInfo> {
    let network = Network::parse(cidr_text)?;
    log::debug!("analyze_network({cidr_text}) -> {network}");
    Ok(NetworkInfo::from_network(&network))
}
