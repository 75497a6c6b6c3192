use bevy::prelude::*;
use bridge_protocol::error::BridgeError;

use crate::engine::camera::controller::Pose;

/// Axis-aligned footprint of a room, used for tap hit-testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomBounds {
    pub center: Vec3,
    pub size: Vec3,
}

impl RoomBounds {
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.size * 0.5
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.size * 0.5
    }

    /// Slab-method ray/box intersection, returns the entry distance along
    /// the ray or None when it misses.
    pub fn ray_intersection(&self, ray_origin: Vec3, ray_direction: Vec3) -> Option<f32> {
        let min = self.min();
        let max = self.max();
        let inv = Vec3::new(
            if ray_direction.x != 0.0 { 1.0 / ray_direction.x } else { f32::INFINITY },
            if ray_direction.y != 0.0 { 1.0 / ray_direction.y } else { f32::INFINITY },
            if ray_direction.z != 0.0 { 1.0 / ray_direction.z } else { f32::INFINITY },
        );

        let (mut tmin, mut tmax) = ((min.x - ray_origin.x) * inv.x, (max.x - ray_origin.x) * inv.x);
        if tmin > tmax {
            std::mem::swap(&mut tmin, &mut tmax);
        }

        let (mut tymin, mut tymax) = ((min.y - ray_origin.y) * inv.y, (max.y - ray_origin.y) * inv.y);
        if tymin > tymax {
            std::mem::swap(&mut tymin, &mut tymax);
        }

        if tmin > tymax || tymin > tmax {
            return None;
        }
        tmin = tmin.max(tymin);
        tmax = tmax.min(tymax);

        let (mut tzmin, mut tzmax) = ((min.z - ray_origin.z) * inv.z, (max.z - ray_origin.z) * inv.z);
        if tzmin > tzmax {
            std::mem::swap(&mut tzmin, &mut tzmax);
        }

        if tmin > tzmax || tzmin > tmax {
            return None;
        }
        tmin = tmin.max(tzmin);
        tmax = tmax.min(tzmax);

        if tmax < 0.0 {
            return None;
        }
        Some(if tmin >= 0.0 { tmin } else { tmax })
    }
}

/// One room of the building: stable id, display name, the camera pose a
/// navigation settles on, and the footprint taps are tested against.
/// Immutable once registered.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub anchor_pose: Pose,
    pub bounds: RoomBounds,
}

/// Static catalog of rooms, built once at scene setup and read-only after.
///
/// All access happens on the presentation-loop thread, so there is no
/// locking here by design.
#[derive(Resource, Default)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
}

impl RoomRegistry {
    /// Add a room. A duplicate id is a static configuration bug and fails
    /// the call; it is the only setup error worth stopping for.
    pub fn register(&mut self, room: Room) -> Result<(), BridgeError> {
        if self.rooms.iter().any(|r| r.id == room.id) {
            return Err(BridgeError::DuplicateRoom(room.id));
        }
        self.rooms.push(room);
        Ok(())
    }

    pub fn lookup(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// All rooms in registration order. Restartable and finite.
    pub fn all(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Display name for a room id, falling back to the raw id for rooms
    /// that only exist as free-floating schedule metadata.
    pub fn display_name(&self, id: &str) -> String {
        self.lookup(id)
            .map(|room| room.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// The nearest room the ray passes through, if any.
    pub fn hit_test(&self, ray_origin: Vec3, ray_direction: Vec3) -> Option<&Room> {
        self.rooms
            .iter()
            .filter_map(|room| {
                room.bounds
                    .ray_intersection(ray_origin, ray_direction)
                    .map(|t| (room, t))
            })
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(room, _)| room)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: &str, center: Vec3) -> Room {
        Room {
            id: id.to_string(),
            name: format!("{id} room"),
            anchor_pose: Pose::looking_at(center + Vec3::new(0.0, 4.0, -8.0), center),
            bounds: RoomBounds::new(center, Vec3::new(10.0, 5.0, 10.0)),
        }
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut registry = RoomRegistry::default();
        registry.register(room("lobby", Vec3::ZERO)).expect("first");
        assert!(matches!(
            registry.register(room("lobby", Vec3::new(15.0, 0.0, 0.0))),
            Err(BridgeError::DuplicateRoom(id)) if id == "lobby"
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn all_iterates_in_registration_order_and_restarts() {
        let mut registry = RoomRegistry::default();
        registry.register(room("lobby", Vec3::ZERO)).expect("lobby");
        registry
            .register(room("conference", Vec3::new(15.0, 0.0, 0.0)))
            .expect("conference");

        let ids: Vec<&str> = registry.all().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["lobby", "conference"]);
        // Fresh iterator starts over.
        assert_eq!(registry.all().count(), 2);
    }

    #[test]
    fn display_name_falls_back_to_raw_id() {
        let mut registry = RoomRegistry::default();
        registry.register(room("lobby", Vec3::ZERO)).expect("lobby");
        assert_eq!(registry.display_name("lobby"), "lobby room");
        assert_eq!(registry.display_name("ghost"), "ghost");
    }

    #[test]
    fn ray_hits_the_nearest_room() {
        let mut registry = RoomRegistry::default();
        registry.register(room("far", Vec3::new(0.0, 0.0, 30.0))).expect("far");
        registry.register(room("near", Vec3::new(0.0, 0.0, 10.0))).expect("near");

        let hit = registry
            .hit_test(Vec3::new(0.0, 0.0, -5.0), Vec3::Z)
            .expect("both rooms sit on this ray");
        assert_eq!(hit.id, "near");
    }

    #[test]
    fn ray_behind_the_origin_misses() {
        let bounds = RoomBounds::new(Vec3::new(0.0, 0.0, -20.0), Vec3::splat(4.0));
        assert!(bounds.ray_intersection(Vec3::ZERO, Vec3::Z).is_none());
    }

    #[test]
    fn ray_from_inside_still_hits() {
        let bounds = RoomBounds::new(Vec3::ZERO, Vec3::splat(10.0));
        let t = bounds
            .ray_intersection(Vec3::ZERO, Vec3::X)
            .expect("exit face counts");
        assert!(t > 0.0);
    }

    #[test]
    fn axis_parallel_ray_outside_the_slab_misses() {
        let bounds = RoomBounds::new(Vec3::ZERO, Vec3::splat(10.0));
        assert!(
            bounds
                .ray_intersection(Vec3::new(0.0, 20.0, -30.0), Vec3::Z)
                .is_none()
        );
    }
}
