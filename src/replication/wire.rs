//! Wire codec for the location transfer payload.
//!
//! The authoritative table can hold thousands of entries and is sent once
//! per connection, so the serialized records are gzip-compressed into a
//! single opaque byte payload.

use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::trace;

use crate::location::SimpleLocation;

use super::error::ReplicationError;

/// Serializes and compresses a reduced-record collection.
pub fn encode(records: &[SimpleLocation]) -> Result<Vec<u8>, ReplicationError> {
    let serialized = serde_json::to_vec(records).map_err(ReplicationError::Encode)?;

    trace!("compressing {} bytes of location data", serialized.len());

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&serialized)
        .map_err(ReplicationError::Compress)?;
    encoder.finish().map_err(ReplicationError::Compress)
}

/// Decompresses and deserializes a received payload.
pub fn decode(payload: &[u8]) -> Result<Vec<SimpleLocation>, ReplicationError> {
    let mut serialized = Vec::new();
    GzDecoder::new(payload)
        .read_to_end(&mut serialized)
        .map_err(|source| ReplicationError::Decompress {
            payload_size: payload.len(),
            source,
        })?;

    trace!("decompressed into {} bytes of location data", serialized.len());

    serde_json::from_slice(&serialized).map_err(ReplicationError::Decode)
}
