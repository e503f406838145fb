//! One-shot replication of the authoritative location table from server to
//! client, as a compressed payload over a request/response exchange carried
//! by the host's RPC layer.

pub(crate) mod client;
mod error;
pub(crate) mod server;
pub mod wire;

pub use error::ReplicationError;

/// Per-peer progress of the location transfer.
///
/// Server peers never leave `Idle`; their only state is having the request
/// handler registered. Client peers move to `AwaitingTransfer` when the
/// request goes out and terminally to `Received` once a valid payload has
/// been applied. Only a session reset clears the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferState {
    Idle,
    AwaitingTransfer,
    Received,
}
