//! CIDR network blocks.
//!
//! [`Network`] is a prefix-aligned block of addresses in either family. The
//! network address is always derived from the input: a host address with a
//! prefix is normalized down to the start of its block.

use super::address::{is_decimal, Address, IpVersion};
use crate::error::{CalcError, FormatError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decimal digits of 2^128, the size of the whole IPv6 space.
const TWO_POW_128: &str = "340282366920938463463374607431768211456";

/// Exact number of addresses in a block, `2^host_bits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressCount {
    host_bits: u32,
}

impl AddressCount {
    /// Count of a block with `host_bits` free bits (at most 128).
    pub fn new(host_bits: u32) -> AddressCount {
        assert!(host_bits <= 128, "host_bits[{host_bits}] > 128 should never happen.");
        AddressCount { host_bits }
    }

    /// The count as `u128`, `None` only for the full IPv6 space (2^128).
    pub fn value(&self) -> Option<u128> {
        1u128.checked_shl(self.host_bits)
    }

    /// The power of two this count equals.
    pub fn exponent(&self) -> u32 {
        self.host_bits
    }
}

impl fmt::Display for AddressCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.value() {
            Some(count) => write!(f, "{count}"),
            None => f.write_str(TWO_POW_128),
        }
    }
}

impl Serialize for AddressCount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// A CIDR block: prefix-aligned base address plus prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Network {
    base: Address,
    prefix: u8,
}

impl Network {
    /// Create the block of length `prefix` that contains `addr`.
    ///
    /// # Examples
    /// ```
    /// use cidr_calculator::models::{Address, Network};
    /// let addr = Address::parse("192.168.1.42").unwrap();
    /// let net = Network::new(addr, 24).unwrap();
    /// assert_eq!(net.to_string(), "192.168.1.0/24");
    /// ```
    pub fn new(addr: Address, prefix: u8) -> Result<Network> {
        let max = addr.bits();
        if u32::from(prefix) > max {
            return Err(FormatError::PrefixTooLong {
                prefix: u32::from(prefix),
                max,
            }
            .into());
        }
        Ok(Network {
            base: addr.with_low_bits_cleared(max - u32::from(prefix)),
            prefix,
        })
    }

    /// Block from an already aligned base, used by the range summarizer.
    pub(crate) fn from_aligned(base: Address, prefix: u8) -> Network {
        debug_assert!(
            u32::from(prefix) <= base.bits()
                && base.with_low_bits_cleared(base.bits() - u32::from(prefix)) == base,
            "{base}/{prefix} is not prefix-aligned"
        );
        Network { base, prefix }
    }

    /// Parse `address/prefix` text, e.g. "10.0.0.0/24" or "2001:db8::/32".
    pub fn parse(text: &str) -> Result<Network> {
        let text = text.trim();
        let parts: Vec<&str> = text.split('/').collect();
        match parts.len() {
            2 => {}
            1 => return Err(FormatError::MissingPrefix(text.to_string()).into()),
            _ => return Err(FormatError::InvalidPrefix(parts[1..].join("/")).into()),
        }

        let addr = Address::parse(parts[0])?;
        let prefix_text = parts[1].trim();
        if !is_decimal(prefix_text) {
            return Err(FormatError::InvalidPrefix(prefix_text.to_string()).into());
        }
        let prefix: u32 = prefix_text
            .parse()
            .map_err(|_| FormatError::InvalidPrefix(prefix_text.to_string()))?;
        if prefix > addr.bits() {
            return Err(FormatError::PrefixTooLong {
                prefix,
                max: addr.bits(),
            }
            .into());
        }
        Network::new(addr, prefix as u8)
    }

    /// The network (first) address.
    pub fn base(&self) -> Address {
        self.base
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn version(&self) -> IpVersion {
        self.base.version()
    }

    /// Number of host bits, `width - prefix`.
    pub fn host_bits(&self) -> u32 {
        self.base.bits() - u32::from(self.prefix)
    }

    /// Netmask: high `prefix` bits set.
    pub fn mask(&self) -> Address {
        Address::max(self.version()).with_low_bits_cleared(self.host_bits())
    }

    /// Host mask (wildcard): low `width - prefix` bits set.
    pub fn host_mask(&self) -> Address {
        Address::zero(self.version()).with_low_bits_set(self.host_bits())
    }

    /// The broadcast address, or for IPv6 simply the last address of the block.
    pub fn broadcast(&self) -> Address {
        self.base.with_low_bits_set(self.host_bits())
    }

    /// First address usable by a host, `None` for /31, /32, /127 and /128.
    pub fn first_usable(&self) -> Option<Address> {
        if self.host_bits() <= 1 {
            return None;
        }
        self.base.increment()
    }

    /// Last address usable by a host, `None` for /31, /32, /127 and /128.
    pub fn last_usable(&self) -> Option<Address> {
        if self.host_bits() <= 1 {
            return None;
        }
        self.broadcast().decrement()
    }

    pub fn address_count(&self) -> AddressCount {
        AddressCount::new(self.host_bits())
    }

    /// True if `addr` is of the same family and lies inside this block.
    pub fn contains(&self, addr: Address) -> bool {
        addr.version() == self.version()
            && addr.with_low_bits_cleared(self.host_bits()) == self.base
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix)
    }
}

impl FromStr for Network {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Network> {
        Network::parse(s)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::parse(&s).map_err(|e| de::Error::custom(format!("invalid CIDR format {s}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(text: &str) -> Network {
        Network::parse(text).unwrap()
    }

    #[test]
    fn test_class_c() {
        let n = net("192.168.1.0/24");
        assert_eq!(n.base().to_string(), "192.168.1.0");
        assert_eq!(n.broadcast().to_string(), "192.168.1.255");
        assert_eq!(n.mask().to_string(), "255.255.255.0");
        assert_eq!(n.host_mask().to_string(), "0.0.0.255");
        assert_eq!(n.address_count().value(), Some(256));
        assert_eq!(n.first_usable().unwrap().to_string(), "192.168.1.1");
        assert_eq!(n.last_usable().unwrap().to_string(), "192.168.1.254");
    }

    #[test]
    fn test_masks() {
        assert_eq!(net("10.0.0.0/0").mask().to_string(), "0.0.0.0");
        assert_eq!(net("10.0.0.0/8").mask().to_string(), "255.0.0.0");
        assert_eq!(net("10.0.0.0/20").mask().to_string(), "255.255.240.0");
        assert_eq!(net("10.0.0.0/32").mask().to_string(), "255.255.255.255");
        assert_eq!(
            net("2001:db8::/32").mask().to_string(),
            "ffff:ffff:0000:0000:0000:0000:0000:0000"
        );
    }

    #[test]
    fn test_host_address_is_normalized_down() {
        let n = net("10.2.3.4/16");
        assert_eq!(n.to_string(), "10.2.0.0/16");
        assert_eq!(n.broadcast().to_string(), "10.2.255.255");
        assert_eq!(net("192.168.1.0/8").broadcast().to_string(), "192.255.255.255");
        assert_eq!(
            net("2001:db8::1/64").to_string(),
            "2001:0db8:0000:0000:0000:0000:0000:0000/64"
        );
    }

    #[test]
    fn test_ipv6_block() {
        let n = net("2001:db8::/32");
        assert_eq!(n.base().to_string(), "2001:0db8:0000:0000:0000:0000:0000:0000");
        assert_eq!(n.broadcast().to_string(), "2001:0db8:ffff:ffff:ffff:ffff:ffff:ffff");
        assert_eq!(n.address_count().value(), Some(1u128 << 96));
        assert_eq!(n.address_count().exponent(), 96);
        assert_eq!(n.address_count().to_string(), "79228162514264337593543950336");
    }

    #[test]
    fn test_whole_ipv6_space_count() {
        let n = net("::/0");
        assert_eq!(n.address_count().value(), None);
        assert_eq!(
            n.address_count().to_string(),
            "340282366920938463463374607431768211456"
        );
        assert_eq!(net("::/1").address_count().value(), Some(1u128 << 127));
        assert_eq!(net("0.0.0.0/0").address_count().value(), Some(1u128 << 32));
    }

    #[test]
    fn test_no_usable_hosts_for_tiny_blocks() {
        for text in ["10.0.0.0/31", "10.0.0.1/32", "::/127", "::1/128"] {
            let n = net(text);
            assert_eq!(n.first_usable(), None, "{text}");
            assert_eq!(n.last_usable(), None, "{text}");
        }
        let n = net("10.0.0.0/30");
        assert_eq!(n.first_usable().unwrap().to_string(), "10.0.0.1");
        assert_eq!(n.last_usable().unwrap().to_string(), "10.0.0.2");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Network::parse("10.0.0.0").unwrap_err(),
            FormatError::MissingPrefix("10.0.0.0".to_string()).into()
        );
        assert_eq!(
            Network::parse("10.0.0.0/-1").unwrap_err(),
            FormatError::InvalidPrefix("-1".to_string()).into()
        );
        assert_eq!(
            Network::parse("10.0.0.0/abc").unwrap_err(),
            FormatError::InvalidPrefix("abc".to_string()).into()
        );
        assert_eq!(
            Network::parse("10.0.0.0/").unwrap_err(),
            FormatError::InvalidPrefix("".to_string()).into()
        );
        assert_eq!(
            Network::parse("10.0.0.0/33").unwrap_err(),
            FormatError::PrefixTooLong { prefix: 33, max: 32 }.into()
        );
        assert_eq!(
            Network::parse("::/129").unwrap_err(),
            FormatError::PrefixTooLong { prefix: 129, max: 128 }.into()
        );
        assert!(Network::parse("10.0.0.0/99999999999999").is_err());
        assert!(Network::parse("10.0.0.0/8/8").is_err());
        assert_eq!(
            Network::parse("300.1.1.1/24").unwrap_err(),
            FormatError::InvalidOctet("300".to_string()).into()
        );
    }

    #[test]
    fn test_new_rejects_long_prefix() {
        let addr = Address::parse("10.0.0.0").unwrap();
        assert!(Network::new(addr, 33).is_err());
        assert!(Network::new(addr, 32).is_ok());
    }

    #[test]
    fn test_contains() {
        let n = net("10.0.10.0/24");
        assert!(n.contains(Address::parse("10.0.10.0").unwrap()));
        assert!(n.contains(Address::parse("10.0.10.255").unwrap()));
        assert!(!n.contains(Address::parse("10.0.11.0").unwrap()));
        assert!(!n.contains(Address::parse("::a00:a00").unwrap()));
    }

    #[test]
    fn test_serde_as_string() {
        let n = net("10.1.1.0/28");
        assert_eq!(serde_json::to_string(&n).unwrap(), "\"10.1.1.0/28\"");
        let back: Network = serde_json::from_str("\"10.1.1.7/28\"").unwrap();
        assert_eq!(back, n);
        assert!(serde_json::from_str::<Network>("\"10.1.1.0\"").is_err());
    }
}
