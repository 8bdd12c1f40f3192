//! Errors raised while talking to the daemon.

use std::path::PathBuf;

/// Boxed error returned by the `transmission-rpc` client.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Setup, transport, or local-file failure in an RPC call.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The profile does not form a usable endpoint URL.
    #[error("invalid rpc endpoint {endpoint:?}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    /// The runtime driving the async client could not be started.
    #[error("failed to start rpc runtime")]
    Runtime(#[source] std::io::Error),
    /// Connection, HTTP, session handshake or decode failure inside the client library.
    #[error("daemon request failed")]
    Transport(#[source] TransportError),
    /// The daemon processed the call and reported a failure.
    #[error("daemon error: {0}")]
    Rejected(String),
    /// `torrent-add` succeeded but named no torrent.
    #[error("daemon did not report the added torrent")]
    MissingTorrent,
    /// A local torrent file could not be read.
    #[error("failed to read torrent file {}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
