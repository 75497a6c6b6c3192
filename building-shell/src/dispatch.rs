use bridge_protocol::channel::BridgeEndpoint;
use bridge_protocol::commands::{ContentCommand, ShellCommand};
use bridge_protocol::messages::RoomTarget;
use tracing::{debug, warn};

use crate::mirror::EventMirror;

/// The shell's end of the boundary: one endpoint, one mirror, and the
/// typed senders the UI calls.
///
/// `pump` is meant to be driven by the shell's own event loop. Inbound
/// lines that fail to decode, or decode to a kind the shell does not
/// handle, are logged and dropped; the loop itself never stops.
pub struct ShellBridge {
    endpoint: BridgeEndpoint,
    mirror: EventMirror,
}

impl ShellBridge {
    pub fn new(endpoint: BridgeEndpoint) -> Self {
        Self {
            endpoint,
            mirror: EventMirror::new(),
        }
    }

    pub fn mirror(&self) -> &EventMirror {
        &self.mirror
    }

    /// Drain inbound updates into the mirror. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        for line in self.endpoint.drain() {
            match ShellCommand::from_line(&line) {
                Ok(ShellCommand::EventsUpdate(schedule)) => {
                    debug!(rooms = schedule.rooms.len(), "full schedule update");
                    self.mirror.apply_full(schedule);
                    applied += 1;
                }
                Ok(ShellCommand::RoomEventsUpdate(room)) => {
                    debug!(room = %room.room_id, events = room.events.len(), "room schedule update");
                    self.mirror.merge_room(room);
                    applied += 1;
                }
                Err(err) => warn!("dropping inbound message: {err}"),
            }
        }
        applied
    }

    /// Ask the engine for a full schedule push.
    pub fn request_events(&self) {
        self.send(ContentCommand::RequestEvents);
    }

    /// Drive the 3D camera to a room. No-op on the engine side if the room
    /// is unknown or a transition is already in flight.
    pub fn navigate_to_room(&self, room_id: &str) {
        self.send(ContentCommand::NavigateToRoom(RoomTarget::new(room_id)));
    }

    /// Visually accent a room without moving the camera.
    pub fn highlight_room(&self, room_id: &str) {
        self.send(ContentCommand::HighlightRoom(RoomTarget::new(room_id)));
    }

    fn send(&self, command: ContentCommand) {
        self.endpoint.send_line(command.encode());
    }
}

#[cfg(test)]
mod tests {
    use bridge_protocol::channel::BridgeChannel;
    use bridge_protocol::commands::ContentCommand;
    use serde_json::json;

    use super::*;

    #[test]
    fn pump_applies_full_then_room_updates_in_order() {
        let (engine, shell_end) = BridgeChannel::pair();
        let mut shell = ShellBridge::new(shell_end);

        engine.send(
            "EVENTS_UPDATE",
            &json!({"rooms": [{"roomId": "lobby", "roomName": "Lobby", "events": []}]}),
        );
        engine.send(
            "ROOM_EVENTS_UPDATE",
            &json!({"roomId": "lobby", "roomName": "Lobby",
                "events": [{"eventId": "evt_001", "eventName": "Welcome Reception"}]}),
        );

        assert_eq!(shell.pump(), 2);
        assert_eq!(shell.mirror().events_for("lobby").len(), 1);
    }

    #[test]
    fn malformed_lines_do_not_stop_the_pump() {
        let (engine, shell_end) = BridgeChannel::pair();
        let mut shell = ShellBridge::new(shell_end);

        engine.send_line("garbage without separator".to_string());
        engine.send_line("EVENTS_UPDATE|{broken".to_string());
        engine.send("EVENTS_UPDATE", &json!({"rooms": []}));

        assert_eq!(shell.pump(), 1);
    }

    #[test]
    fn content_commands_addressed_to_the_other_side_are_dropped() {
        let (engine, shell_end) = BridgeChannel::pair();
        let mut shell = ShellBridge::new(shell_end);

        engine.send("NAVIGATE_TO_ROOM", &json!({"roomId": "lobby"}));
        assert_eq!(shell.pump(), 0);
        assert!(shell.mirror().is_empty());
    }

    #[test]
    fn typed_senders_frame_commands_for_the_engine() {
        let (engine, shell_end) = BridgeChannel::pair();
        let shell = ShellBridge::new(shell_end);

        shell.request_events();
        shell.navigate_to_room("conference");
        shell.highlight_room("ghost");

        let lines = engine.drain();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            ContentCommand::from_line(&lines[0]).expect("decode"),
            ContentCommand::RequestEvents
        );
        assert!(lines[1].starts_with("NAVIGATE_TO_ROOM|"));
        assert!(lines[2].contains("ghost"));
    }
}
