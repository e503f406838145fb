//! Server side of the one-shot location transfer.

use log::{debug, error, warn};

use crate::host::LocationSource;
use crate::location::SimpleLocation;

use super::wire;

/// Reads the authoritative location table, reduces every record to the
/// wire-safe shape and encodes the collection into a single payload.
///
/// Returns `None` when the table is unavailable or encoding fails; both are
/// logged and leave the connection operating without replicated data.
pub(crate) fn build_locations_payload(source: &dyn LocationSource) -> Option<Vec<u8>> {
    let Some(locations) = source.authoritative_locations() else {
        warn!("Unable to read authoritative locations to send to client");
        return None;
    };

    debug!("Reducing {} location instances for transfer", locations.len());

    let reduced: Vec<SimpleLocation> = locations
        .iter()
        .map(|(zone, instance)| instance.reduce(*zone))
        .collect();

    match wire::encode(&reduced) {
        Ok(payload) => {
            debug!("Serialized {} bytes of location data", payload.len());
            Some(payload)
        }
        Err(err) => {
            error!("Failed to build locations payload: {}", err);
            None
        }
    }
}
