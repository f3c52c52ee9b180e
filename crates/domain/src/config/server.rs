use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: default_dns_port(),
            bind_address: default_bind_address(),
        }
    }
}

impl ServerConfig {
    pub fn dns_socket_addr(&self) -> String {
        self.socket_addr(self.dns_port)
    }

    /// `bind_address:port`, bracketing IPv6 literals.
    pub fn socket_addr(&self, port: u16) -> String {
        if self.bind_address.contains(':') {
            format!("[{}]:{}", self.bind_address, port)
        } else {
            format!("{}:{}", self.bind_address, port)
        }
    }
}

fn default_dns_port() -> u16 {
    5333
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}
