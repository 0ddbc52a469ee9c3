//! Server configuration.

/// Default listen address, reachable from other hosts on port 5000.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";

/// Default limit on the size of a submitted form body.
pub const DEFAULT_MAX_FORM_BYTES: usize = 16 * 1024;

/// Configuration for the calculator web server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:5000")
    pub listen_addr: String,
    /// Largest form body accepted, in bytes
    pub max_form_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            max_form_bytes: DEFAULT_MAX_FORM_BYTES,
        }
    }
}

impl ServerConfig {
    /// Create a new builder for ServerConfig.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for ServerConfig.
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    listen_addr: Option<String>,
    max_form_bytes: Option<usize>,
}

impl ServerConfigBuilder {
    /// Set the listen address.
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.listen_addr = Some(addr.into());
        self
    }

    /// Set the listen address from a host and port.
    pub fn host_port(self, host: &str, port: u16) -> Self {
        // Bracket bare IPv6 hosts so the port separator stays unambiguous.
        if host.contains(':') && !host.starts_with('[') {
            self.listen_addr(format!("[{}]:{}", host, port))
        } else {
            self.listen_addr(format!("{}:{}", host, port))
        }
    }

    /// Set the form body size limit.
    pub fn max_form_bytes(mut self, bytes: usize) -> Self {
        self.max_form_bytes = Some(bytes);
        self
    }

    /// Build the ServerConfig.
    pub fn build(self) -> ServerConfig {
        ServerConfig {
            listen_addr: self
                .listen_addr
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            max_form_bytes: self.max_form_bytes.unwrap_or(DEFAULT_MAX_FORM_BYTES),
        }
    }
}
