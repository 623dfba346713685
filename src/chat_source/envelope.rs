//! Inbound frame envelopes
//!
//! Frames decode in two steps: the outer envelope discriminates the frame
//! `type`, and only `"message"` frames are decoded fully. A frame that
//! fails either step is dropped, never fatal; the connection outlives any
//! single bad frame.

use log::debug;
use serde::Deserialize;

/// Outer envelope of an inbound frame, used only to discriminate `type`.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Typed payload of a `"message"` frame.
///
/// `channel` and `user` ride along as the service sends them; only `text`
/// flows downstream.
#[derive(Debug, Deserialize)]
pub struct MessageEvent {
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub user: String,
    pub text: String,
}

/// Classify one inbound frame, returning the message text if it carries any.
///
/// Returns `None` for frames of any other type, and for frames that do not
/// decode (logged and dropped).
#[must_use]
pub fn decode_message_text(frame: &str) -> Option<String> {
    let envelope: Envelope = match serde_json::from_str(frame) {
        Ok(envelope) => envelope,
        Err(e) => {
            debug!("dropping undecodable frame: {e}");
            return None;
        }
    };

    if envelope.kind != "message" {
        return None;
    }

    match serde_json::from_str::<MessageEvent>(frame) {
        Ok(event) => Some(event.text),
        Err(e) => {
            debug!("dropping malformed message frame: {e}");
            None
        }
    }
}
