//! In-process transport between the presentation loop and the shell loop.
//!
//! A channel is a pair of endpoints sharing two directional line queues.
//! `send` pushes a framed line and returns immediately; the receiving side
//! drains its queue on its own next scheduling opportunity. Two lines sent
//! in order by the same sender drain in that order. Nothing is acknowledged
//! and nothing is retried; reliability beyond in-order delivery inside one
//! process belongs to the host transport, not this layer.

use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::warn;

use crate::codec;

type LineQueue = Arc<Mutex<Vec<String>>>;

fn push_line(queue: &LineQueue, line: String) {
    if let Ok(mut lines) = queue.lock() {
        lines.push(line);
    } else {
        warn!("bridge queue poisoned, dropping outbound line");
    }
}

/// Constructor for connected endpoint pairs.
pub struct BridgeChannel;

impl BridgeChannel {
    /// Create a connected pair: what one side sends, the other drains.
    pub fn pair() -> (BridgeEndpoint, BridgeEndpoint) {
        let endpoint = BridgeEndpoint::new();
        let peer = endpoint.peer();
        (endpoint, peer)
    }
}

/// One side of the boundary. Cloning shares the underlying queues.
#[derive(Clone)]
pub struct BridgeEndpoint {
    outgoing: LineQueue,
    incoming: LineQueue,
}

impl BridgeEndpoint {
    fn new() -> Self {
        Self {
            outgoing: Arc::new(Mutex::new(Vec::new())),
            incoming: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The opposite side of this endpoint: sends land in this endpoint's
    /// inbox and vice versa.
    pub fn peer(&self) -> Self {
        Self {
            outgoing: self.incoming.clone(),
            incoming: self.outgoing.clone(),
        }
    }

    /// Frame and send a message. Fire-and-forget: returns immediately,
    /// never blocks, never reports delivery.
    pub fn send(&self, kind: &str, payload: &Value) {
        self.send_line(codec::encode(kind, payload));
    }

    /// Send an already-framed line.
    pub fn send_line(&self, line: String) {
        push_line(&self.outgoing, line);
    }

    /// Take every line delivered so far, in send order.
    pub fn drain(&self) -> Vec<String> {
        match self.incoming.lock() {
            Ok(mut lines) => std::mem::take(&mut *lines),
            Err(_) => {
                warn!("bridge queue poisoned, dropping inbound lines");
                Vec::new()
            }
        }
    }

    /// A send-only handle for components that push updates but never read.
    pub fn sender(&self) -> BridgeSender {
        BridgeSender {
            outgoing: self.outgoing.clone(),
        }
    }
}

/// Send half of an endpoint, for constructor injection into services that
/// notify the other side on every write.
#[derive(Clone)]
pub struct BridgeSender {
    outgoing: LineQueue,
}

impl BridgeSender {
    pub fn send(&self, kind: &str, payload: &Value) {
        self.send_line(codec::encode(kind, payload));
    }

    pub fn send_line(&self, line: String) {
        push_line(&self.outgoing, line);
    }
}
