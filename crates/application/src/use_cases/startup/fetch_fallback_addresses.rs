use crate::ports::PublicAddressSource;
use std::sync::Arc;
use tracing::{info, warn};
use wilddns_domain::{AddressFamily, FallbackAddresses, FallbackConfig};

/// Use case: determine the server's own public addresses once at startup
///
/// A statically configured address wins for its family; otherwise the
/// address source is asked. A failed fetch is logged and leaves that
/// family's fallback empty, it never aborts startup.
pub struct FetchFallbackAddressesUseCase {
    source: Arc<dyn PublicAddressSource>,
    config: FallbackConfig,
}

impl FetchFallbackAddressesUseCase {
    pub fn new(source: Arc<dyn PublicAddressSource>, config: FallbackConfig) -> Self {
        Self { source, config }
    }

    pub async fn execute(&self) -> FallbackAddresses {
        let (ipv4, ipv6) = tokio::join!(
            self.resolve(AddressFamily::V4),
            self.resolve(AddressFamily::V6)
        );

        info!(ipv4 = %ipv4, ipv6 = %ipv6, "Fallback addresses resolved");
        FallbackAddresses::new(ipv4, ipv6)
    }

    async fn resolve(&self, family: AddressFamily) -> String {
        if let Some(address) = self.config.static_address(family) {
            info!(family = %family, address = %address, "Using configured fallback address");
            return address.trim().to_string();
        }

        match self.source.fetch(family).await {
            Ok(body) => body.trim().to_string(),
            Err(e) => {
                warn!(error = %e, family = %family, "Failed to fetch public address");
                String::new()
            }
        }
    }
}
