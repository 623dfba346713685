//! Error types for live-connection establishment
//!
//! Everything here is fatal to the flow that tried to connect: the design
//! has no reconnect loop, so a failed handshake or socket open is reported
//! once and not retried.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ChatSourceError {
    /// Required configuration was absent
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The handshake HTTP call itself failed
    #[error("handshake request failed: {0}")]
    HandshakeRequest(#[from] reqwest::Error),

    /// The handshake response body was not the expected JSON
    #[error("handshake response malformed: {0}")]
    HandshakeDecode(#[from] serde_json::Error),

    /// The chat service answered `ok == false`
    #[error("chat service refused the connection: {0}")]
    HandshakeRefused(String),

    /// The chat service accepted but sent no socket endpoint
    #[error("handshake response carried no socket endpoint")]
    MissingEndpoint,

    /// The socket endpoint in the handshake response did not parse
    #[error("handshake returned an invalid socket endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// Opening the persistent connection failed
    #[error("failed to open live connection: {0}")]
    Connect(#[from] tokio_tungstenite::tungstenite::Error),
}
