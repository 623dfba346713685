//! Live message source
//!
//! Owns the persistent duplex connection and republishes well-formed chat
//! message text on a broadcast channel. The receive loop runs on its own
//! task; subscribers hold read-only receivers and never touch the socket.
//!
//! Broadcast semantics: every current subscriber observes the same message
//! sequence in wire order; a late subscriber sees only what is emitted
//! after it attaches. The channel is a bounded ring with a drop-oldest
//! policy: a subscriber that falls behind observes a lag gap and keeps
//! going, and the producer never blocks on a slow consumer.

use std::sync::Arc;

use futures::SinkExt;
use log::{debug, info, trace, warn};
use tokio::net::TcpStream;
use tokio::sync::{Notify, broadcast};
use tokio::task::JoinHandle;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use super::envelope::decode_message_text;
use super::errors::ChatSourceError;
use super::handshake::request_socket_endpoint;
use crate::config::BridgeConfig;

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// A running live connection to the chat service.
///
/// Dropping the source abandons the connection; [`close`](Self::close)
/// shuts it down cleanly. Either way the receive loop exits, the channel's
/// only sender drops, and every subscriber stream completes. Close is a
/// normal end of stream, not an error.
pub struct LiveMessageSource {
    receiver: broadcast::Receiver<String>,
    shutdown: Arc<Notify>,
    recv_task: JoinHandle<()>,
}

impl LiveMessageSource {
    /// Handshake and open the persistent connection.
    ///
    /// Fails fast if the token is unconfigured, the handshake is refused,
    /// or the socket cannot be opened. No retry, no reconnect.
    pub async fn connect(config: &BridgeConfig) -> Result<Self, ChatSourceError> {
        let token = config.require_token()?;
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        let endpoint =
            request_socket_endpoint(&client, config.handshake_url(), token).await?;
        Self::open(endpoint.as_str(), config.channel_capacity()).await
    }

    /// Open the persistent connection to an already-known endpoint.
    pub async fn open(endpoint: &str, capacity: usize) -> Result<Self, ChatSourceError> {
        info!("opening live connection to {endpoint}");
        let (socket, _response) = connect_async(endpoint).await?;

        let (sender, receiver) = broadcast::channel(capacity);
        let shutdown = Arc::new(Notify::new());
        let recv_task = tokio::spawn(receive_loop(socket, sender, Arc::clone(&shutdown)));

        Ok(Self {
            receiver,
            shutdown,
            recv_task,
        })
    }

    /// Attach a new subscriber.
    ///
    /// The receiver observes only messages emitted after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.receiver.resubscribe()
    }

    /// Attach a new subscriber as a `Stream` of message text.
    ///
    /// Lag gaps are logged and skipped; the stream completes when the
    /// connection closes.
    #[must_use]
    pub fn message_stream(
        &self,
    ) -> impl tokio_stream::Stream<Item = String> + Send + Unpin + use<> {
        BroadcastStream::new(self.subscribe()).filter_map(|item| match item {
            Ok(text) => Some(text),
            Err(BroadcastStreamRecvError::Lagged(missed)) => {
                warn!("subscriber lagged, {missed} messages dropped");
                None
            }
        })
    }

    /// Shut the connection down and wait for the receive loop to exit.
    pub async fn close(mut self) {
        self.shutdown.notify_one();
        if let Err(e) = (&mut self.recv_task).await
            && !e.is_cancelled()
        {
            warn!("receive loop ended abnormally: {e}");
        }
    }
}

impl Drop for LiveMessageSource {
    /// Dropping the source without `close` still tears the stream graph
    /// down: the receive loop is aborted, which drops the socket and
    /// closes the connection.
    fn drop(&mut self) {
        self.recv_task.abort();
    }
}

/// Receive loop: decode inbound frames, publish message text, answer pings.
///
/// Exits on server close, transport error, or shutdown. The broadcast
/// sender drops with the loop, which completes all subscriber streams.
async fn receive_loop(
    mut socket: Socket,
    sender: broadcast::Sender<String>,
    shutdown: Arc<Notify>,
) {
    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                debug!("live connection shutting down");
                let _ = socket.close(None).await;
                break;
            }
            frame = socket.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    trace!("received frame: {text}");
                    if let Some(body) = decode_message_text(&text) {
                        // Err here means no receiver was attached; the
                        // message is dropped, matching at-most-once delivery.
                        let _ = sender.send(body);
                    }
                }
                Some(Ok(Message::Ping(payload))) => {
                    let _ = socket.send(Message::Pong(payload)).await;
                }
                Some(Ok(Message::Close(_))) | None => {
                    info!("live connection closed by server");
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!("live connection error: {e}");
                    break;
                }
            }
        }
    }
}
