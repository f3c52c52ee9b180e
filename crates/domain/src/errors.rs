use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid address pattern: {0}")]
    InvalidPattern(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Failed to fetch external {family} address: {reason}")]
    AddressFetch { family: String, reason: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
