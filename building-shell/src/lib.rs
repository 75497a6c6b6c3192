//! Shell side of the viewer boundary.
//!
//! The shell owns UI chrome and a read-only mirror of the schedule data
//! whose authoritative copy lives in the presentation runtime. The mirror
//! stays eventually consistent purely through push updates arriving over
//! the bridge; the shell never reaches into engine state directly.
//!
//! [`ShellBridge`] is the one object a host UI needs: it pumps inbound
//! updates into the [`EventMirror`] and exposes typed senders for the
//! commands the engine understands.

pub mod dispatch;
pub mod mirror;

pub use dispatch::ShellBridge;
pub use mirror::EventMirror;
