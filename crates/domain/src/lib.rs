//! wilddns domain layer
pub mod address_family;
pub mod config;
pub mod dns_question;
pub mod dns_record;
pub mod errors;
pub mod fallback_addresses;

pub use address_family::AddressFamily;
pub use config::{CliOverrides, Config, ConfigError, FallbackConfig, LogFormat};
pub use dns_question::DnsQuestion;
pub use dns_record::{DnsAnswer, RecordType, ANSWER_TTL};
pub use errors::DomainError;
pub use fallback_addresses::FallbackAddresses;
