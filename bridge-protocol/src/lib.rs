//! Message protocol shared by both sides of the viewer boundary.
//!
//! The 3D presentation runtime and the application shell run as two
//! independent single-threaded loops and only ever talk through serialized
//! text messages. This crate owns everything both sides must agree on:
//!
//! - **Wire format**: one line of text per message, `KIND|PAYLOAD`, where
//!   `PAYLOAD` is a JSON value ([`codec`]).
//! - **Message catalog**: the payload structures and their stable field
//!   names ([`messages`]).
//! - **Command decoding**: closed enums per receiving side, parsed once at
//!   the boundary ([`commands`]).
//! - **Channel**: the in-process, in-order, fire-and-forget queue pair that
//!   carries lines between the two loops ([`channel`]).
//!
//! ## Message Flow
//!
//! ```text
//! Shell (UI loop)                      Engine (presentation loop)
//!      │                                        │
//!      ├─ REQUEST_EVENTS|{} ──────────────────> │
//!      ├─ NAVIGATE_TO_ROOM|{"roomId":..} ─────> │
//!      │ <───────── EVENTS_UPDATE|{"rooms":..} ─┤
//!      │ <── ROOM_EVENTS_UPDATE|{"roomId":..} ──┤
//! ```
//!
//! Delivery is fire-and-forget: no acknowledgements, no retries. A message
//! nobody drains is simply lost.

pub mod channel;
pub mod codec;
pub mod commands;
pub mod error;
pub mod messages;

pub use channel::{BridgeChannel, BridgeEndpoint, BridgeSender};
pub use commands::{ContentCommand, ShellCommand};
pub use error::BridgeError;
pub use messages::{BuildingSchedule, RoomEvent, RoomSchedule, RoomTarget};
