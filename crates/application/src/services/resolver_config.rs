use super::address_extractor::{restore_colons, AddressExtractor};
use wilddns_domain::{AddressFamily, DomainError, FallbackAddresses};

/// Immutable resolver state: one matcher set and one fallback per family.
///
/// Built once at startup and shared read-only between request tasks.
pub struct ResolverConfig {
    extractor: AddressExtractor,
    fallback: FallbackAddresses,
}

impl ResolverConfig {
    pub fn new(fallback: FallbackAddresses) -> Result<Self, DomainError> {
        Ok(Self {
            extractor: AddressExtractor::new()?,
            fallback,
        })
    }

    /// The embedded address if the hostname carries one, otherwise the
    /// configured fallback for that family.
    pub fn resolve_address(&self, hostname: &str, family: AddressFamily) -> String {
        match self.extractor.extract(hostname, family) {
            Some(address) => address,
            None => {
                let fallback = self.fallback.get(family);
                match family {
                    AddressFamily::V4 => fallback.to_string(),
                    AddressFamily::V6 => restore_colons(fallback),
                }
            }
        }
    }
}
