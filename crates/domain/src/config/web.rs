use serde::{Deserialize, Serialize};

/// Static documentation site served next to the DNS listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_web_port")]
    pub port: u16,

    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: default_web_port(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_web_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "./static".to_string()
}
