//! Client side of the one-shot location transfer.

use log::{debug, error};

use crate::location::LocationRegistry;

use super::wire;
use super::TransferState;

/// Applies a received payload to the replicated tier.
///
/// Idempotent per peer: once a valid payload has been applied the state is
/// `Received` and every later payload is discarded unconditionally, so a
/// duplicate or retried send can never double-apply. A payload that fails
/// to decode is logged and leaves the state unchanged, which keeps the peer
/// able to accept a later valid retry.
pub(crate) fn apply_locations_payload(
    state: &mut TransferState,
    payload: &[u8],
    registry: &mut LocationRegistry,
) {
    if *state == TransferState::Received {
        debug!("Already received locations previously, skipping payload");
        return;
    }

    match wire::decode(payload) {
        Ok(locations) => {
            debug!("Deserialized {} locations", locations.len());
            registry.merge_replicated(locations);
            *state = TransferState::Received;
        }
        Err(err) => {
            error!("Error while reading received locations payload: {}", err);
        }
    }
}
