use serde::{Deserialize, Serialize};

/// Message kinds sent by the shell, handled by the engine.
pub const KIND_REQUEST_EVENTS: &str = "REQUEST_EVENTS";
pub const KIND_NAVIGATE_TO_ROOM: &str = "NAVIGATE_TO_ROOM";
pub const KIND_HIGHLIGHT_ROOM: &str = "HIGHLIGHT_ROOM";

/// Message kinds sent by the engine, handled by the shell.
pub const KIND_EVENTS_UPDATE: &str = "EVENTS_UPDATE";
pub const KIND_ROOM_EVENTS_UPDATE: &str = "ROOM_EVENTS_UPDATE";

/// One scheduled entry on a room's agenda.
///
/// Field names are wire contract. Every field is defaultable so a payload
/// that omits some of them still decodes; decoders likewise ignore extra
/// fields they do not know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomEvent {
    pub event_id: String,
    pub event_name: String,
    pub event_description: String,
    pub event_time: String,
    pub event_type: String,
}

impl RoomEvent {
    pub fn new(id: &str, name: &str, description: &str, time: &str, event_type: &str) -> Self {
        Self {
            event_id: id.to_string(),
            event_name: name.to_string(),
            event_description: description.to_string(),
            event_time: time.to_string(),
            event_type: event_type.to_string(),
        }
    }
}

/// Payload of `ROOM_EVENTS_UPDATE`: one room's current agenda, in insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomSchedule {
    pub room_id: String,
    pub room_name: String,
    pub events: Vec<RoomEvent>,
}

/// Payload of `EVENTS_UPDATE`: the full schedule, one entry per room that
/// has events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildingSchedule {
    pub rooms: Vec<RoomSchedule>,
}

/// Payload of `NAVIGATE_TO_ROOM` and `HIGHLIGHT_ROOM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTarget {
    pub room_id: String,
}

impl RoomTarget {
    pub fn new(room_id: &str) -> Self {
        Self {
            room_id: room_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_event_decodes_with_missing_fields() {
        let event: RoomEvent =
            serde_json::from_str(r#"{"eventId":"evt_001","eventName":"Welcome Reception"}"#)
                .expect("partial event must decode");
        assert_eq!(event.event_id, "evt_001");
        assert_eq!(event.event_name, "Welcome Reception");
        assert_eq!(event.event_description, "");
        assert_eq!(event.event_time, "");
    }

    #[test]
    fn room_event_ignores_unknown_fields() {
        let event: RoomEvent = serde_json::from_str(
            r#"{"eventId":"evt_002","eventName":"Briefing","attendees":42,"nested":{"a":[1,2]}}"#,
        )
        .expect("extra fields must be tolerated");
        assert_eq!(event.event_id, "evt_002");
    }

    #[test]
    fn schedule_round_trips_through_json() {
        let schedule = BuildingSchedule {
            rooms: vec![RoomSchedule {
                room_id: "conference".to_string(),
                room_name: "Conference Room".to_string(),
                events: vec![RoomEvent::new(
                    "evt_003",
                    "Quarterly Review",
                    "Q4 review with stakeholders.",
                    "10:00 - 12:00",
                    "Meeting",
                )],
            }],
        };
        let json = serde_json::to_string(&schedule).expect("serialize");
        let back: BuildingSchedule = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, schedule);
        assert!(json.contains("\"roomId\""));
        assert!(json.contains("\"eventDescription\""));
    }
}
