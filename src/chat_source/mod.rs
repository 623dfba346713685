//! Live-message ingestion
//!
//! Maintains a single long-lived connection to the chat service's push
//! endpoint, decodes inbound envelopes, and republishes well-formed chat
//! message text as a broadcast stream.

pub mod envelope;
pub mod errors;
pub mod handshake;
pub mod source;

pub use envelope::{Envelope, MessageEvent, decode_message_text};
pub use errors::ChatSourceError;
pub use handshake::{HandshakeResponse, request_socket_endpoint};
pub use source::LiveMessageSource;
