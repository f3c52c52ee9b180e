use std::net::IpAddr;
use tracing::debug;
use wilddns_domain::{AddressFamily, DnsAnswer};

/// Turns a resolved address string into exactly one answer record.
pub struct ResponseBuilder;

impl ResponseBuilder {
    /// Build the answer for `name`. An address that does not parse as a
    /// literal of `family` still yields a record, with no address.
    pub fn build(family: AddressFamily, name: &str, address: &str) -> DnsAnswer {
        let parsed = Self::parse_address(family, address);

        if parsed.is_none() {
            debug!(
                name = %name,
                address = %address,
                family = %family,
                "Resolved address does not parse, answering without address"
            );
        }

        DnsAnswer::new(name, family.record_type(), parsed)
    }

    /// IPv4-mapped IPv6 literals are accepted for A, and IPv4 literals are
    /// mapped into IPv6 for AAAA.
    pub fn parse_address(family: AddressFamily, address: &str) -> Option<IpAddr> {
        let ip = address.parse::<IpAddr>().ok()?;

        match (family, ip) {
            (AddressFamily::V4, IpAddr::V4(v4)) => Some(IpAddr::V4(v4)),
            (AddressFamily::V4, IpAddr::V6(v6)) => v6.to_ipv4_mapped().map(IpAddr::V4),
            (AddressFamily::V6, IpAddr::V6(v6)) => Some(IpAddr::V6(v6)),
            (AddressFamily::V6, IpAddr::V4(v4)) => Some(IpAddr::V6(v4.to_ipv6_mapped())),
        }
    }
}
