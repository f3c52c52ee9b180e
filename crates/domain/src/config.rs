pub mod errors;
pub mod fallback;
pub mod logging;
pub mod root;
pub mod server;
pub mod web;

pub use errors::ConfigError;
pub use fallback::FallbackConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use web::WebConfig;
