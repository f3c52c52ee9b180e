use async_trait::async_trait;
use tracing::debug;
use wilddns_application::ports::PublicAddressSource;
use wilddns_domain::{AddressFamily, DomainError, FallbackConfig};

/// Asks a plain-text "what is my IP" endpoint for the server's public
/// address. The body is returned as-is; trimming is left to the caller.
pub struct HttpEchoAddressSource {
    client: reqwest::Client,
    config: FallbackConfig,
}

impl HttpEchoAddressSource {
    pub fn new(config: FallbackConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("wilddns/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::HttpClient(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl PublicAddressSource for HttpEchoAddressSource {
    async fn fetch(&self, family: AddressFamily) -> Result<String, DomainError> {
        let url = self.config.echo_url(family);
        let fetch_error = |reason: String| DomainError::AddressFetch {
            family: family.to_string(),
            reason,
        };

        debug!(family = %family, url = %url, "Fetching public address");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(format!("request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(fetch_error(format!(
                "HTTP {} from {}",
                response.status().as_u16(),
                url
            )));
        }

        response
            .text()
            .await
            .map_err(|e| fetch_error(format!("failed to read body from {}: {}", url, e)))
    }
}
