//! Error types for the web server.

use std::net::AddrParseError;

use thiserror::Error;

/// Errors that stop the server from running.
///
/// Problems with individual requests never surface here; they become
/// HTTP responses.
#[derive(Debug, Error)]
pub enum WebError {
    /// The configured listen address is not a socket address.
    #[error("Invalid listen address {addr:?}: {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    /// Binding or accepting on the listener failed.
    #[error("Server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
