use crate::AddressFamily;
use serde::{Deserialize, Serialize};

/// Where the fallback addresses come from.
///
/// A static `external_ipv4`/`external_ipv6` wins over the echo endpoint for
/// that family; otherwise the address is fetched once at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FallbackConfig {
    #[serde(default)]
    pub external_ipv4: Option<String>,

    #[serde(default)]
    pub external_ipv6: Option<String>,

    #[serde(default = "default_ipv4_echo_url")]
    pub ipv4_echo_url: String,

    #[serde(default = "default_ipv6_echo_url")]
    pub ipv6_echo_url: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            external_ipv4: None,
            external_ipv6: None,
            ipv4_echo_url: default_ipv4_echo_url(),
            ipv6_echo_url: default_ipv6_echo_url(),
        }
    }
}

impl FallbackConfig {
    pub fn static_address(&self, family: AddressFamily) -> Option<&str> {
        match family {
            AddressFamily::V4 => self.external_ipv4.as_deref(),
            AddressFamily::V6 => self.external_ipv6.as_deref(),
        }
    }

    pub fn echo_url(&self, family: AddressFamily) -> &str {
        match family {
            AddressFamily::V4 => &self.ipv4_echo_url,
            AddressFamily::V6 => &self.ipv6_echo_url,
        }
    }
}

fn default_ipv4_echo_url() -> String {
    "http://ipv4.myexternalip.com/raw".to_string()
}

fn default_ipv6_echo_url() -> String {
    "http://ipv6.myexternalip.com/raw".to_string()
}
