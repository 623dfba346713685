//! One-shot connection handshake
//!
//! A single authenticated GET against the handshake endpoint returns the
//! socket endpoint for the persistent connection. The exchange is consumed
//! once; there is no refresh or retry.

use log::{debug, info};
use serde::Deserialize;
use url::Url;

use super::errors::ChatSourceError;
use crate::utils::parse_uri;

/// Decoded handshake response.
///
/// Unknown fields are ignored; `url` and `error` are both optional because
/// the service populates them on opposite outcomes.
#[derive(Debug, Deserialize)]
pub struct HandshakeResponse {
    pub ok: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Perform the handshake and return the socket endpoint.
///
/// Fails fast on transport errors, non-success status, an undecodable
/// body, `ok == false`, or a missing/invalid endpoint.
pub async fn request_socket_endpoint(
    client: &reqwest::Client,
    handshake_url: &str,
    token: &str,
) -> Result<Url, ChatSourceError> {
    info!("requesting socket endpoint");
    let body = client
        .get(handshake_url)
        .query(&[("token", token)])
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    debug!("handshake response: {body}");

    let response: HandshakeResponse = serde_json::from_str(&body)?;
    if !response.ok {
        let reason = response.error.unwrap_or_else(|| "unspecified".to_string());
        return Err(ChatSourceError::HandshakeRefused(reason));
    }

    let raw = response.url.ok_or(ChatSourceError::MissingEndpoint)?;
    Ok(parse_uri(&raw)?)
}
