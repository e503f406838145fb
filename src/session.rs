use std::collections::HashMap;

use log::{debug, info, warn};

use crate::host::LocationSource;
use crate::location::LocationRegistry;
use crate::modifier::ModifierPipeline;
use crate::replication::{client, server, TransferState};

/// Which side of the session this process is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldRole {
    Server,
    Client,
}

/// Identity of one connected peer, assigned by the host's networking layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeerId(pub u64);

/// A remote call the host's RPC layer must transmit on our behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundMessage {
    /// Client to server, no payload: ask for the location table.
    RequestLocations,
    /// Server to client: the compressed, serialized reduced records.
    DeliverLocations(Vec<u8>),
}

/// Process-wide context for one world session.
///
/// Owns everything that must die together on world unload or disconnect:
/// the two-tier location registry, the modifier pipeline registrations and
/// the per-peer transfer states. Reset is "rebuild the context", so
/// teardown is atomic and needs no subscription list.
///
/// All calls are expected on the host's single update/network callback
/// thread; nothing here locks.
pub struct WorldSession {
    role: WorldRole,
    pub locations: LocationRegistry,
    pub drops: ModifierPipeline,
    peers: HashMap<PeerId, TransferState>,
}

impl WorldSession {
    pub fn new(role: WorldRole) -> Self {
        Self {
            role,
            locations: LocationRegistry::new(),
            drops: ModifierPipeline::with_defaults(),
            peers: HashMap::new(),
        }
    }

    pub fn role(&self) -> WorldRole {
        self.role
    }

    /// Registers per-peer transfer state for a fresh connection. On a
    /// client this immediately yields the location request for the host to
    /// send; the reply arrives later through
    /// [`handle_location_payload`](Self::handle_location_payload).
    pub fn on_new_connection(&mut self, peer: PeerId) -> Option<OutboundMessage> {
        match self.role {
            WorldRole::Server => {
                debug!("Registering location request handler for peer {}", peer.0);
                self.peers.insert(peer, TransferState::Idle);
                None
            }
            WorldRole::Client => {
                debug!("Requesting location data from server peer {}", peer.0);
                self.peers.insert(peer, TransferState::AwaitingTransfer);
                Some(OutboundMessage::RequestLocations)
            }
        }
    }

    pub fn on_disconnect(&mut self, peer: PeerId) {
        self.peers.remove(&peer);
    }

    /// Server side: answers a client's location request with the encoded
    /// authoritative table. A non-server receiving the request logs and
    /// ignores it; failures while building the payload are logged and the
    /// peer simply gets nothing this session.
    pub fn handle_location_request(
        &self,
        peer: PeerId,
        source: &dyn LocationSource,
    ) -> Option<OutboundMessage> {
        if self.role != WorldRole::Server {
            warn!("Non-server instance received request for location data, ignoring request");
            return None;
        }

        info!("Sending location data to peer {}", peer.0);

        server::build_locations_payload(source).map(OutboundMessage::DeliverLocations)
    }

    /// Client side: applies a delivered payload to the replicated tier,
    /// exactly once per peer. Duplicates, unknown peers and payloads
    /// arriving at a server are logged and dropped.
    pub fn handle_location_payload(&mut self, peer: PeerId, payload: &[u8]) {
        if self.role != WorldRole::Client {
            warn!("Non-client instance received location payload, ignoring");
            return;
        }

        let Some(state) = self.peers.get_mut(&peer) else {
            warn!("Received location payload from unknown peer {}, ignoring", peer.0);
            return;
        };

        client::apply_locations_payload(state, payload, &mut self.locations);
    }

    pub fn peer_state(&self, peer: PeerId) -> Option<TransferState> {
        self.peers.get(&peer).copied()
    }

    /// Tears the whole session down and starts fresh, keeping the role.
    /// Fired by the host on world unload or disconnect.
    pub fn reset(&mut self) {
        *self = Self::new(self.role);
    }
}
