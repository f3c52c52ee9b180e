use async_trait::async_trait;
use wilddns_domain::{AddressFamily, DomainError};

/// Reports the server's own public address for one family.
#[async_trait]
pub trait PublicAddressSource: Send + Sync {
    /// Raw textual address as reported by the source, untrimmed.
    async fn fetch(&self, family: AddressFamily) -> Result<String, DomainError>;
}
