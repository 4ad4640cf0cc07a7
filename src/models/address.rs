//! IPv4 and IPv6 addresses as fixed-width integers.
//!
//! Provides [`Address`], an address value stored in a `u128` and tagged with its
//! [`IpVersion`], so the same bit arithmetic serves both families.

use crate::error::{CalcError, FormatError, Result};
use itertools::Itertools;
use lazy_static::lazy_static;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Number of 16-bit groups in an IPv6 address.
const V6_GROUPS: usize = 8;

lazy_static! {
    static ref DECIMAL: regex::Regex = regex::Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
    static ref HEX_GROUP: regex::Regex =
        regex::Regex::new(r"^[0-9a-fA-F]{1,4}$").expect("Invalid Regex?");
}

/// True if `text` is a plain run of decimal digits (no sign, no spaces).
pub(crate) fn is_decimal(text: &str) -> bool {
    DECIMAL.is_match(text)
}

/// A value with the low `n` bits set, saturating at all 128 bits.
pub fn low_bits(n: u32) -> u128 {
    if n >= u128::BITS {
        u128::MAX
    } else {
        (1u128 << n) - 1
    }
}

/// Address family, which fixes the width of the address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IpVersion {
    #[serde(rename = "IPv4")]
    V4,
    #[serde(rename = "IPv6")]
    V6,
}

impl IpVersion {
    /// Width of the address space in bits.
    pub const fn bits(self) -> u32 {
        match self {
            IpVersion::V4 => 32,
            IpVersion::V6 => 128,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            IpVersion::V4 => "IPv4",
            IpVersion::V6 => "IPv6",
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An IP address of either family.
///
/// Addresses of the same family are ordered by numeric value. Addresses of
/// different families are never equal and do not compare (`partial_cmp`
/// returns `None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    value: u128,
    version: IpVersion,
}

impl Address {
    /// Build an address from its integer value, `None` if it does not fit the family.
    pub fn new(value: u128, version: IpVersion) -> Option<Address> {
        (value <= low_bits(version.bits())).then_some(Address { value, version })
    }

    pub fn from_u32(value: u32) -> Address {
        Address {
            value: u128::from(value),
            version: IpVersion::V4,
        }
    }

    pub fn from_u128(value: u128) -> Address {
        Address {
            value,
            version: IpVersion::V6,
        }
    }

    pub fn zero(version: IpVersion) -> Address {
        Address { value: 0, version }
    }

    /// The all-ones address of a family (`255.255.255.255` or `ffff:...:ffff`).
    pub fn max(version: IpVersion) -> Address {
        Address {
            value: low_bits(version.bits()),
            version,
        }
    }

    /// Parse either family, choosing IPv6 when the text contains a `:`.
    ///
    /// # Examples
    /// ```
    /// use cidr_calculator::models::{Address, IpVersion};
    /// let addr = Address::parse("10.0.0.1").unwrap();
    /// assert_eq!(addr.version(), IpVersion::V4);
    /// assert_eq!(addr.value(), 0x0A00_0001);
    /// ```
    pub fn parse(text: &str) -> Result<Address> {
        let text = text.trim();
        if text.contains(':') {
            Address::parse_v6(text)
        } else {
            Address::parse_v4(text)
        }
    }

    /// Parse dotted decimal IPv4 text, most significant octet first.
    pub fn parse_v4(text: &str) -> Result<Address> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FormatError::Empty.into());
        }
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 4 {
            return Err(FormatError::OctetCount {
                text: text.to_string(),
                found: parts.len(),
            }
            .into());
        }

        let mut value: u32 = 0;
        for part in parts {
            value = (value << 8) | u32::from(parse_octet(part)?);
        }
        Ok(Address::from_u32(value))
    }

    /// Parse colon separated IPv6 text, with at most one `::` zero run.
    pub fn parse_v6(text: &str) -> Result<Address> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FormatError::Empty.into());
        }

        let halves: Vec<&str> = text.split("::").collect();
        let groups = match halves.as_slice() {
            [all] => parse_groups(text, all)?,
            [head, tail] => {
                let mut groups = parse_groups(text, head)?;
                let tail = parse_groups(text, tail)?;
                let explicit = groups.len() + tail.len();
                // `::` stands for at least one zero group
                if explicit >= V6_GROUPS {
                    return Err(FormatError::GroupCount {
                        text: text.to_string(),
                        found: explicit + 1,
                    }
                    .into());
                }
                groups.resize(V6_GROUPS - tail.len(), 0);
                groups.extend(tail);
                groups
            }
            _ => return Err(FormatError::MultipleCompression(text.to_string()).into()),
        };

        if groups.len() != V6_GROUPS {
            return Err(FormatError::GroupCount {
                text: text.to_string(),
                found: groups.len(),
            }
            .into());
        }

        let value = groups
            .iter()
            .fold(0u128, |acc, group| (acc << 16) | u128::from(*group));
        Ok(Address::from_u128(value))
    }

    pub fn value(&self) -> u128 {
        self.value
    }

    pub fn version(&self) -> IpVersion {
        self.version
    }

    /// Width of this address in bits (32 or 128).
    pub fn bits(&self) -> u32 {
        self.version.bits()
    }

    /// Zero-padded binary digits, exactly [`Address::bits`] long.
    pub fn to_binary_string(&self) -> String {
        format!("{:0width$b}", self.value, width = self.bits() as usize)
    }

    /// This address with the low `n` bits zeroed.
    pub fn with_low_bits_cleared(&self, n: u32) -> Address {
        Address {
            value: self.value & !low_bits(n.min(self.bits())),
            version: self.version,
        }
    }

    /// This address with the low `n` bits set to one.
    pub fn with_low_bits_set(&self, n: u32) -> Address {
        Address {
            value: self.value | low_bits(n.min(self.bits())),
            version: self.version,
        }
    }

    /// The next address, `None` at the top of the address space.
    pub fn increment(&self) -> Option<Address> {
        if self.value == low_bits(self.bits()) {
            return None;
        }
        Some(Address {
            value: self.value + 1,
            version: self.version,
        })
    }

    /// The previous address, `None` at zero.
    pub fn decrement(&self) -> Option<Address> {
        let value = self.value.checked_sub(1)?;
        Some(Address {
            value,
            version: self.version,
        })
    }

    /// Trailing zero bits, bounded by the width (the zero address has `bits()`).
    pub fn trailing_zeros(&self) -> u32 {
        if self.value == 0 {
            self.bits()
        } else {
            self.value.trailing_zeros()
        }
    }
}

fn parse_octet(part: &str) -> Result<u8> {
    if !is_decimal(part) {
        return Err(FormatError::InvalidOctet(part.to_string()).into());
    }
    part.parse::<u8>()
        .map_err(|_| FormatError::InvalidOctet(part.to_string()).into())
}

/// Parse one side of a `::`, or a whole uncompressed address.
fn parse_groups(text: &str, part: &str) -> Result<Vec<u16>> {
    if part.is_empty() {
        return Ok(vec![]);
    }
    part.split(':').map(|group| parse_group(text, group)).collect()
}

fn parse_group(text: &str, group: &str) -> Result<u16> {
    if group.is_empty() {
        return Err(FormatError::EmptyGroup(text.to_string()).into());
    }
    if !HEX_GROUP.is_match(group) {
        return Err(FormatError::InvalidGroup(group.to_string()).into());
    }
    u16::from_str_radix(group, 16).map_err(|_| FormatError::InvalidGroup(group.to_string()).into())
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.version {
            IpVersion::V4 => {
                let bits = self.value as u32;
                write!(
                    f,
                    "{}.{}.{}.{}",
                    bits >> 24,
                    (bits >> 16) & 0xff,
                    (bits >> 8) & 0xff,
                    bits & 0xff
                )
            }
            IpVersion::V6 => {
                let groups = (0..V6_GROUPS as u32)
                    .rev()
                    .map(|i| format!("{:04x}", (self.value >> (i * 16)) as u16))
                    .join(":");
                f.write_str(&groups)
            }
        }
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Address) -> Option<Ordering> {
        if self.version != other.version {
            return None;
        }
        Some(self.value.cmp(&other.value))
    }
}

impl FromStr for Address {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Address> {
        Address::parse(s)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s).map_err(|e| de::Error::custom(format!("invalid IP address {s}: {e}")))
    }
}
