//! Integration tests for cidr-calculator
//!
//! These tests go through the public text entry points the shell uses.

use cidr_calculator::models::{Address, IpVersion, Network};
use cidr_calculator::processing::{summarize, summarize_text, Blocks};
use cidr_calculator::{analyze_network, summarize_range, CalcError, FormatError};
use itertools::Itertools;

#[test]
fn test_analyze_class_c_network() {
    let info = analyze_network("192.168.1.0/24").expect("Failed to analyze");

    assert_eq!(info.network.to_string(), "192.168.1.0");
    assert_eq!(info.broadcast.expect("IPv4 has broadcast").to_string(), "192.168.1.255");
    assert_eq!(info.netmask.to_string(), "255.255.255.0");
    assert_eq!(info.address_count.to_string(), "256");
    assert_eq!(info.first_usable.unwrap().to_string(), "192.168.1.1");
    assert_eq!(info.last_usable.unwrap().to_string(), "192.168.1.254");
}

#[test]
fn test_analyze_ipv6_documentation_prefix() {
    let info = analyze_network("2001:db8::/32").expect("Failed to analyze");

    assert_eq!(
        info.network.to_string(),
        "2001:0db8:0000:0000:0000:0000:0000:0000"
    );
    assert_eq!(info.address_count.exponent(), 96);
    assert_eq!(info.address_count.value(), Some(1u128 << 96));
}

#[test]
fn test_analyze_rejects_bad_octet() {
    let err = analyze_network("300.1.1.1/24").unwrap_err();
    assert_eq!(err, CalcError::Format(FormatError::InvalidOctet("300".to_string())));
    assert!(err.to_string().contains("300"));
}

#[test]
fn test_summarize_examples() {
    assert_eq!(summarize_range("10.0.0.0", "10.0.0.7").unwrap(), ["10.0.0.0/29"]);
    assert_eq!(
        summarize_range("10.0.0.1", "10.0.0.7").unwrap(),
        ["10.0.0.1/32", "10.0.0.2/31", "10.0.0.4/30"]
    );
    assert_eq!(summarize_range("10.0.0.5", "10.0.0.4").unwrap(), ["10.0.0.4/31"]);
}

#[test]
fn test_summarize_blocks_validate_through_analyze() {
    // Every emitted block must re-parse as its own network address.
    for cidr in summarize_range("172.16.3.77", "172.16.200.3").unwrap() {
        let info = analyze_network(&cidr).expect("block must parse");
        assert_eq!(info.cidr.to_string(), cidr);
    }
}

#[test]
fn test_summarize_is_iterative_over_wide_ipv6_range() {
    let start = Address::parse("::1").unwrap();
    let end = Address::parse("ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffe").unwrap();
    let blocks: Vec<Network> = Blocks::new(start, end).unwrap().collect();

    assert_eq!(blocks.len(), 2 * 127);
    assert_eq!(blocks.first().unwrap().base(), start);
    assert_eq!(blocks.last().unwrap().broadcast(), end);
    for (a, b) in blocks.iter().tuple_windows() {
        assert_eq!(a.broadcast().increment(), Some(b.base()));
    }
}

#[test]
fn test_round_trip_of_formatted_addresses() {
    for text in ["1.2.3.4", "::", "2001:db8::8a2e:370:7334", "::ffff:0:1"] {
        let addr = Address::parse(text).unwrap();
        assert_eq!(Address::parse(&addr.to_string()).unwrap().value(), addr.value());
    }
}

#[test]
fn test_family_mismatch() {
    let err = summarize_text("::", "0.0.0.0").unwrap_err();
    assert!(matches!(err, CalcError::Mismatch { .. }));

    let v4 = Address::zero(IpVersion::V4);
    let v6 = Address::zero(IpVersion::V6);
    assert!(summarize(v4, v6).is_err());
}
