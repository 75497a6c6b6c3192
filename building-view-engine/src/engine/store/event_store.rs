use bevy::prelude::*;
use bridge_protocol::channel::BridgeSender;
use bridge_protocol::commands::ShellCommand;
use bridge_protocol::messages::{BuildingSchedule, RoomEvent, RoomSchedule};

use crate::engine::scene::rooms::RoomRegistry;

/// Authoritative schedule store, owned by the presentation side.
///
/// Room buckets keep insertion order; events inside a bucket keep insertion
/// order too, never time-sorted. The shell holds a mirror that this store
/// keeps consistent by pushing the affected room's list on every write, so
/// construction takes the bridge sender it notifies through.
///
/// Room ids here are not foreign keys: a room the catalog does not know
/// still holds events and degrades to its raw id as a display name.
#[derive(Resource)]
pub struct EventStore {
    buckets: Vec<RoomBucket>,
    sender: BridgeSender,
}

struct RoomBucket {
    room_id: String,
    events: Vec<RoomEvent>,
}

impl EventStore {
    pub fn new(sender: BridgeSender) -> Self {
        Self {
            buckets: Vec::new(),
            sender,
        }
    }

    /// Append an event to the room's agenda, creating the bucket on first
    /// use. Always succeeds; event ids are a per-room convention, not a
    /// uniqueness constraint.
    pub fn add_event(&mut self, registry: &RoomRegistry, room_id: &str, event: RoomEvent) {
        match self.buckets.iter_mut().find(|b| b.room_id == room_id) {
            Some(bucket) => bucket.events.push(event),
            None => self.buckets.push(RoomBucket {
                room_id: room_id.to_string(),
                events: vec![event],
            }),
        }
        self.push_room(registry, room_id);
    }

    /// Remove every event in the room matching the id; duplicates all go.
    /// An unknown room or id is a no-op, not an error.
    pub fn remove_event(&mut self, registry: &RoomRegistry, room_id: &str, event_id: &str) {
        let Some(bucket) = self.buckets.iter_mut().find(|b| b.room_id == room_id) else {
            return;
        };
        bucket.events.retain(|event| event.event_id != event_id);
        self.push_room(registry, room_id);
    }

    /// A room's agenda in insertion order; empty for rooms never written.
    pub fn events_for(&self, room_id: &str) -> &[RoomEvent] {
        self.buckets
            .iter()
            .find(|b| b.room_id == room_id)
            .map(|b| b.events.as_slice())
            .unwrap_or(&[])
    }

    /// Full snapshot for the wire. Rooms whose agenda is empty are left
    /// out entirely rather than sent as empty lists.
    pub fn all_events(&self, registry: &RoomRegistry) -> BuildingSchedule {
        BuildingSchedule {
            rooms: self
                .buckets
                .iter()
                .filter(|bucket| !bucket.events.is_empty())
                .map(|bucket| RoomSchedule {
                    room_id: bucket.room_id.clone(),
                    room_name: registry.display_name(&bucket.room_id),
                    events: bucket.events.clone(),
                })
                .collect(),
        }
    }

    /// Push the full schedule snapshot to the shell.
    pub fn push_all(&self, registry: &RoomRegistry) {
        let command = ShellCommand::EventsUpdate(self.all_events(registry));
        self.sender.send_line(command.encode());
    }

    fn push_room(&self, registry: &RoomRegistry, room_id: &str) {
        let command = ShellCommand::RoomEventsUpdate(RoomSchedule {
            room_id: room_id.to_string(),
            room_name: registry.display_name(room_id),
            events: self.events_for(room_id).to_vec(),
        });
        self.sender.send_line(command.encode());
    }
}
