//! Daemon WebSocket protocol.
//!
//! Every frame is a JSON object carrying a request id and an externally
//! tagged payload. The daemon pushes status patches unprompted using the
//! reserved [`BROADCAST_ID`].

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtocolError;
use crate::store::DeviceStore;

/// Id the daemon uses for messages that answer no request.
pub const BROADCAST_ID: u64 = u64::MAX;

/// Requests the UI sends to the daemon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaemonRequest {
    /// Liveness check, answered with `Ok`
    Ping,
    /// Full status for all devices
    GetStatus,
}

/// Responses and broadcasts from the daemon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DaemonResponse {
    /// Request succeeded
    Ok,
    /// Request failed
    Err(String),
    /// Full status document, left undecoded so the store keeps every field
    Status(Value),
    /// RFC 6902 patch against the last status document
    Patch(json_patch::Patch),
}

/// Outgoing frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsocketRequest {
    /// Request id, echoed in the response
    pub id: u64,
    /// Payload
    pub data: DaemonRequest,
}

/// Incoming frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WebsocketResponse {
    /// Id of the request answered, or [`BROADCAST_ID`]
    pub id: u64,
    /// Payload
    pub data: DaemonResponse,
}

/// Hands out request ids and remembers what is still outstanding.
#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    next_id: u64,
    pending: BTreeMap<u64, DaemonRequest>,
}

impl RequestTracker {
    /// Create a tracker starting at id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a request in a frame with a fresh id.
    pub fn track(&mut self, data: DaemonRequest) -> WebsocketRequest {
        let id = self.next_id;
        self.next_id = match self.next_id + 1 {
            BROADCAST_ID => 0,
            next => next,
        };
        self.pending.insert(id, data.clone());
        WebsocketRequest { id, data }
    }

    /// Mark a request as answered, returning what was asked.
    pub fn complete(&mut self, id: u64) -> Option<DaemonRequest> {
        self.pending.remove(&id)
    }

    /// Number of unanswered requests.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Forget every outstanding request (after a disconnect).
    pub fn reset(&mut self) {
        self.pending.clear();
    }
}

/// What a handled frame did to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A request was acknowledged with no payload. `None` for an
    /// unsolicited `Ok` broadcast.
    Ack(Option<DaemonRequest>),
    /// A full status document was installed
    StatusReplaced,
    /// A patch was applied
    Patched,
}

/// One connection's worth of protocol state.
#[derive(Clone, Debug, Default)]
pub struct DaemonSession {
    tracker: RequestTracker,
}

impl DaemonSession {
    /// Create a fresh session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a request frame, tracking its id.
    pub fn request(&mut self, data: DaemonRequest) -> Result<String, ProtocolError> {
        let frame = self.tracker.track(data);
        debug!("Daemon request {}: {:?}", frame.id, frame.data);
        serde_json::to_string(&frame).map_err(ProtocolError::Encode)
    }

    /// Decode one incoming frame and apply it to `store`.
    pub fn handle_message(
        &mut self,
        text: &str,
        store: &mut DeviceStore,
    ) -> Result<SessionEvent, ProtocolError> {
        let frame: WebsocketResponse =
            serde_json::from_str(text).map_err(ProtocolError::Decode)?;

        let request = if frame.id == BROADCAST_ID {
            None
        } else {
            match self.tracker.complete(frame.id) {
                Some(request) => Some(request),
                None => {
                    warn!("Dropping daemon response for unknown id {}", frame.id);
                    return Err(ProtocolError::UnexpectedId(frame.id));
                }
            }
        };

        match frame.data {
            DaemonResponse::Ok => Ok(SessionEvent::Ack(request)),
            DaemonResponse::Err(error) => Err(ProtocolError::Daemon(error)),
            DaemonResponse::Status(document) => {
                store.replace_document(document)?;
                Ok(SessionEvent::StatusReplaced)
            }
            DaemonResponse::Patch(patch) => {
                store.apply_patch(&patch)?;
                Ok(SessionEvent::Patched)
            }
        }
    }

    /// Drop outstanding requests after the socket closes.
    pub fn reset(&mut self) {
        self.tracker.reset();
    }

    /// Number of requests awaiting a response.
    pub fn pending(&self) -> usize {
        self.tracker.pending()
    }
}
