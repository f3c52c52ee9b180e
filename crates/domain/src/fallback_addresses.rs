use super::AddressFamily;

/// The server's own public addresses, resolved once at startup.
///
/// An empty string means the address could not be obtained; answers built
/// from it carry no address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackAddresses {
    pub ipv4: String,
    pub ipv6: String,
}

impl FallbackAddresses {
    pub fn new(ipv4: impl Into<String>, ipv6: impl Into<String>) -> Self {
        Self {
            ipv4: ipv4.into(),
            ipv6: ipv6.into(),
        }
    }

    pub fn get(&self, family: AddressFamily) -> &str {
        match family {
            AddressFamily::V4 => &self.ipv4,
            AddressFamily::V6 => &self.ipv6,
        }
    }
}
