//! Content side of the viewer boundary.
//!
//! Inbound shell commands drain from the bridge endpoint once per frame and
//! dispatch synchronously into the camera, the schedule store, or the
//! highlight state. Outbound schedule updates are pushed by the store on
//! every write; nothing is polled.
//!
//! ```text
//! Shell (UI loop)              Engine (presentation loop)
//!      │                               │
//!      ├─ NAVIGATE_TO_ROOM ──────────> ├─> CameraController::navigate_to
//!      ├─ HIGHLIGHT_ROOM ────────────> ├─> ActiveHighlight::set
//!      ├─ REQUEST_EVENTS ────────────> ├─> EventStore::push_all
//!      │ <────────── EVENTS_UPDATE ────┤
//!      │ <───── ROOM_EVENTS_UPDATE ────┤   (on every store write)
//! ```

pub mod dispatch;
pub mod interface;
