use bridge_protocol::messages::{BuildingSchedule, RoomEvent, RoomSchedule};

/// Read-only copy of the schedule, kept consistent via push updates.
///
/// A full update replaces everything; a room-scoped update replaces only
/// that room's entry and leaves every other room untouched. Room order is
/// arrival order, so repeated merges keep the list stable for the UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventMirror {
    rooms: Vec<RoomSchedule>,
}

impl EventMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole mirror with a fresh full snapshot.
    pub fn apply_full(&mut self, schedule: BuildingSchedule) {
        self.rooms = schedule.rooms;
    }

    /// Merge one room's agenda: replace that room in place, append it if
    /// the mirror has not seen the room yet.
    pub fn merge_room(&mut self, room: RoomSchedule) {
        match self.rooms.iter_mut().find(|r| r.room_id == room.room_id) {
            Some(existing) => *existing = room,
            None => self.rooms.push(room),
        }
    }

    pub fn rooms(&self) -> &[RoomSchedule] {
        &self.rooms
    }

    pub fn events_for(&self, room_id: &str) -> &[RoomEvent] {
        self.rooms
            .iter()
            .find(|r| r.room_id == room_id)
            .map(|r| r.events.as_slice())
            .unwrap_or(&[])
    }

    /// Flat room-qualified event list, the shape an event picker consumes.
    pub fn flattened(&self) -> Vec<(&str, &str, &RoomEvent)> {
        self.rooms
            .iter()
            .flat_map(|room| {
                room.events
                    .iter()
                    .map(move |event| (room.room_id.as_str(), room.room_name.as_str(), event))
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(entries: &[(&str, &str, &[&str])]) -> BuildingSchedule {
        BuildingSchedule {
            rooms: entries
                .iter()
                .map(|(id, name, event_ids)| room(id, name, event_ids))
                .collect(),
        }
    }

    fn room(id: &str, name: &str, event_ids: &[&str]) -> RoomSchedule {
        RoomSchedule {
            room_id: id.to_string(),
            room_name: name.to_string(),
            events: event_ids
                .iter()
                .map(|event_id| RoomEvent {
                    event_id: event_id.to_string(),
                    ..RoomEvent::default()
                })
                .collect(),
        }
    }

    #[test]
    fn full_update_replaces_everything() {
        let mut mirror = EventMirror::new();
        mirror.apply_full(schedule(&[("lobby", "Lobby", &["evt_001", "evt_002"])]));
        mirror.apply_full(schedule(&[("office", "Office Space", &["evt_005"])]));

        assert_eq!(mirror.rooms().len(), 1);
        assert_eq!(mirror.rooms()[0].room_id, "office");
        assert!(mirror.events_for("lobby").is_empty());
    }

    #[test]
    fn room_merge_leaves_other_rooms_untouched() {
        let mut mirror = EventMirror::new();
        mirror.apply_full(schedule(&[
            ("lobby", "Lobby", &["evt_001"]),
            ("conference", "Conference Room", &["evt_003"]),
        ]));

        mirror.merge_room(room("conference", "Conference Room", &["evt_003", "evt_004"]));

        assert_eq!(mirror.events_for("lobby").len(), 1);
        assert_eq!(mirror.events_for("conference").len(), 2);
        // Merge keeps arrival order: lobby still first.
        assert_eq!(mirror.rooms()[0].room_id, "lobby");
    }

    #[test]
    fn merge_of_unseen_room_appends() {
        let mut mirror = EventMirror::new();
        mirror.merge_room(room("cafeteria", "Cafeteria", &["evt_006"]));

        assert_eq!(mirror.rooms().len(), 1);
        assert_eq!(mirror.events_for("cafeteria").len(), 1);
    }

    #[test]
    fn flattened_list_is_room_qualified() {
        let mut mirror = EventMirror::new();
        mirror.apply_full(schedule(&[
            ("lobby", "Lobby", &["evt_001"]),
            ("conference", "Conference Room", &["evt_003", "evt_004"]),
        ]));

        let flat = mirror.flattened();
        assert_eq!(flat.len(), 3);
        assert_eq!(flat[0].0, "lobby");
        assert_eq!(flat[1].1, "Conference Room");
        assert_eq!(flat[2].2.event_id, "evt_004");
    }
}
