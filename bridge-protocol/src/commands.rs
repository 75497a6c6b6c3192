//! Typed command dispatch for both sides of the boundary.
//!
//! Each side decodes an inbound line exactly once, at the boundary, into a
//! closed enum and then matches exhaustively. "Unknown command" is one
//! explicit branch (`BridgeError::UnknownCommand`), not an open-ended string
//! switch scattered through the handlers.

use serde::Serialize;
use serde_json::Value;

use crate::codec;
use crate::error::BridgeError;
use crate::messages::{
    BuildingSchedule, KIND_EVENTS_UPDATE, KIND_HIGHLIGHT_ROOM, KIND_NAVIGATE_TO_ROOM,
    KIND_REQUEST_EVENTS, KIND_ROOM_EVENTS_UPDATE, RoomSchedule, RoomTarget,
};

fn parse_payload<T: serde::de::DeserializeOwned>(kind: &str, payload: Value) -> Result<T, BridgeError> {
    serde_json::from_value(payload)
        .map_err(|err| BridgeError::MalformedMessage(format!("bad payload for {kind}: {err}")))
}

fn encode_payload<T: Serialize>(kind: &str, payload: &T) -> String {
    // The catalog payloads are plain data with string keys; serializing them
    // cannot fail.
    let value = serde_json::to_value(payload).unwrap_or(Value::Null);
    codec::encode(kind, &value)
}

/// Commands the presentation runtime accepts from the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentCommand {
    /// Drive the camera to a room's anchor pose, if the room exists.
    NavigateToRoom(RoomTarget),
    /// Visual-only accent on a room, no camera effect.
    HighlightRoom(RoomTarget),
    /// Ask for a full schedule push.
    RequestEvents,
}

impl ContentCommand {
    /// Decode a wire line into a command, or report why it cannot be one.
    pub fn from_line(line: &str) -> Result<Self, BridgeError> {
        let (kind, payload) = codec::decode(line)?;
        Self::parse(&kind, payload)
    }

    pub fn parse(kind: &str, payload: Value) -> Result<Self, BridgeError> {
        match kind {
            KIND_NAVIGATE_TO_ROOM => Ok(Self::NavigateToRoom(parse_payload(kind, payload)?)),
            KIND_HIGHLIGHT_ROOM => Ok(Self::HighlightRoom(parse_payload(kind, payload)?)),
            KIND_REQUEST_EVENTS => Ok(Self::RequestEvents),
            _ => Err(BridgeError::UnknownCommand(kind.to_string())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::NavigateToRoom(_) => KIND_NAVIGATE_TO_ROOM,
            Self::HighlightRoom(_) => KIND_HIGHLIGHT_ROOM,
            Self::RequestEvents => KIND_REQUEST_EVENTS,
        }
    }

    /// Frame the command for the wire.
    pub fn encode(&self) -> String {
        match self {
            Self::NavigateToRoom(target) | Self::HighlightRoom(target) => {
                encode_payload(self.kind(), target)
            }
            Self::RequestEvents => codec::encode(self.kind(), &Value::Object(Default::default())),
        }
    }
}

/// Updates the shell accepts from the presentation runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// Replace the full schedule mirror.
    EventsUpdate(BuildingSchedule),
    /// Merge a single room's agenda into the mirror.
    RoomEventsUpdate(RoomSchedule),
}

impl ShellCommand {
    pub fn from_line(line: &str) -> Result<Self, BridgeError> {
        let (kind, payload) = codec::decode(line)?;
        Self::parse(&kind, payload)
    }

    pub fn parse(kind: &str, payload: Value) -> Result<Self, BridgeError> {
        match kind {
            KIND_EVENTS_UPDATE => Ok(Self::EventsUpdate(parse_payload(kind, payload)?)),
            KIND_ROOM_EVENTS_UPDATE => Ok(Self::RoomEventsUpdate(parse_payload(kind, payload)?)),
            _ => Err(BridgeError::UnknownCommand(kind.to_string())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::EventsUpdate(_) => KIND_EVENTS_UPDATE,
            Self::RoomEventsUpdate(_) => KIND_ROOM_EVENTS_UPDATE,
        }
    }

    pub fn encode(&self) -> String {
        match self {
            Self::EventsUpdate(schedule) => encode_payload(self.kind(), schedule),
            Self::RoomEventsUpdate(room) => encode_payload(self.kind(), room),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_command_round_trips() {
        let command = ContentCommand::NavigateToRoom(RoomTarget::new("conference"));
        let parsed = ContentCommand::from_line(&command.encode()).expect("round trip");
        assert_eq!(parsed, command);
    }

    #[test]
    fn request_events_accepts_empty_payload() {
        assert_eq!(
            ContentCommand::from_line("REQUEST_EVENTS|{}").expect("with braces"),
            ContentCommand::RequestEvents
        );
        assert_eq!(
            ContentCommand::from_line("REQUEST_EVENTS|").expect("bare"),
            ContentCommand::RequestEvents
        );
    }

    #[test]
    fn unknown_kind_is_reported_not_fatal() {
        assert!(matches!(
            ContentCommand::from_line("SELF_DESTRUCT|{}"),
            Err(BridgeError::UnknownCommand(kind)) if kind == "SELF_DESTRUCT"
        ));
        assert!(matches!(
            ShellCommand::from_line("NAVIGATE_TO_ROOM|{\"roomId\":\"lobby\"}"),
            Err(BridgeError::UnknownCommand(_))
        ));
    }

    #[test]
    fn navigate_without_room_id_is_malformed() {
        assert!(matches!(
            ContentCommand::from_line("NAVIGATE_TO_ROOM|{}"),
            Err(BridgeError::MalformedMessage(_))
        ));
    }

    #[test]
    fn shell_update_round_trips() {
        let command = ShellCommand::RoomEventsUpdate(RoomSchedule {
            room_id: "lobby".to_string(),
            room_name: "Lobby".to_string(),
            events: vec![crate::messages::RoomEvent::new(
                "evt_001",
                "Welcome Reception",
                "Daily welcome reception.",
                "09:00 - 10:00",
                "Reception",
            )],
        });
        let parsed = ShellCommand::from_line(&command.encode()).expect("round trip");
        assert_eq!(parsed, command);
    }
}
