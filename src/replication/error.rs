use std::io;

use thiserror::Error;

/// Errors that can occur while building or applying a location transfer
/// payload. None of these propagate past the transfer handlers: a failed
/// transfer is logged and the session continues without replicated data.
#[derive(Debug, Error)]
pub enum ReplicationError {
    /// Failed to serialize the reduced location records
    #[error("Failed to encode location records: {0}")]
    Encode(#[source] serde_json::Error),

    /// Failed to gzip the serialized records
    #[error("Failed to compress location payload: {0}")]
    Compress(#[source] io::Error),

    /// Received payload did not decompress
    #[error("Failed to decompress location payload of {payload_size} bytes: {source}")]
    Decompress {
        payload_size: usize,
        #[source]
        source: io::Error,
    },

    /// Decompressed payload did not deserialize into location records
    #[error("Failed to decode location records: {0}")]
    Decode(#[source] serde_json::Error),
}
