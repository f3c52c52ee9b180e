use super::RecordType;
use std::net::IpAddr;
use std::sync::Arc;

/// Every answer is served uncached.
pub const ANSWER_TTL: u32 = 0;

/// A single A/AAAA answer record.
///
/// `address` is `None` when the resolved string did not parse as a literal
/// of the requested family; such a record is still sent, with empty RDATA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    pub name: Arc<str>,

    pub record_type: RecordType,

    pub ttl: u32,

    pub address: Option<IpAddr>,
}

impl DnsAnswer {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType, address: Option<IpAddr>) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl: ANSWER_TTL,
            address,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.address.is_none()
    }
}
