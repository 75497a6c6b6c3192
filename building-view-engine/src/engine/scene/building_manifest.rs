use bevy::prelude::*;
use bridge_protocol::messages::RoomEvent;
use serde::{Deserialize, Serialize};

use crate::constants::path::RELATIVE_MANIFEST_PATH;
use crate::engine::camera::controller::Pose;
use crate::engine::core::app_state::AppState;
use crate::engine::scene::rooms::{Room, RoomBounds, RoomRegistry};
use crate::engine::store::event_store::EventStore;

/// Building manifest as a Bevy asset. Mirrors the JSON structure exactly:
/// room catalog plus each room's initially scheduled events. Authoring the
/// file is the scene tooling's job; this is only its interface.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingManifest {
    pub building_name: String,
    pub rooms: Vec<RoomDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDefinition {
    pub id: String,
    pub name: String,
    pub center: [f32; 3],
    pub size: [f32; 3],
    pub anchor_position: [f32; 3],
    /// Defaults to the room center when omitted.
    #[serde(default)]
    pub anchor_look_at: Option<[f32; 3]>,
    #[serde(default)]
    pub events: Vec<RoomEvent>,
}

impl RoomDefinition {
    pub fn to_room(&self) -> Room {
        let center = Vec3::from_array(self.center);
        let anchor = Vec3::from_array(self.anchor_position);
        let look_at = self.anchor_look_at.map(Vec3::from_array).unwrap_or(center);
        Room {
            id: self.id.clone(),
            name: self.name.clone(),
            anchor_pose: Pose::looking_at(anchor, look_at),
            bounds: RoomBounds::new(center, Vec3::from_array(self.size)),
        }
    }
}

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<BuildingManifest>>,
}

/// Kick off the manifest load.
pub fn start_loading(mut loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    let manifest_path = format!("{RELATIVE_MANIFEST_PATH}/manifest.json");
    loader.handle = Some(asset_server.load(&manifest_path));
}

/// Once the manifest asset resolves: build the room catalog, seed the
/// schedule store (each seeded write pushes its room update, then one full
/// snapshot announces the schedule), and enter the running state.
///
/// A duplicate room id in the manifest is a static configuration bug and
/// the one condition allowed to stop the app.
pub fn resolve_manifest(
    loader: Res<ManifestLoader>,
    manifests: Res<Assets<BuildingManifest>>,
    mut registry: ResMut<RoomRegistry>,
    mut store: ResMut<EventStore>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(handle) = loader.handle.as_ref() else {
        return;
    };
    let Some(manifest) = manifests.get(handle) else {
        return;
    };

    for definition in &manifest.rooms {
        if let Err(err) = registry.register(definition.to_room()) {
            panic!("invalid building manifest: {err}");
        }
    }

    for definition in &manifest.rooms {
        for event in &definition.events {
            store.add_event(&registry, &definition.id, event.clone());
        }
    }
    store.push_all(&registry);

    info!(
        "✓ Building manifest resolved: {} with {} rooms",
        manifest.building_name,
        registry.len()
    );
    next_state.set(AppState::Running);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_json_decodes_and_builds_rooms() {
        let manifest: BuildingManifest = serde_json::from_str(
            r#"{
                "buildingName": "Headquarters",
                "rooms": [{
                    "id": "conference",
                    "name": "Conference Room",
                    "center": [15.0, 0.0, 0.0],
                    "size": [8.0, 4.0, 8.0],
                    "anchorPosition": [15.0, 4.0, -7.0],
                    "events": [{"eventId": "evt_003", "eventName": "Quarterly Review"}]
                }]
            }"#,
        )
        .expect("manifest must decode");

        let room = manifest.rooms[0].to_room();
        assert_eq!(room.id, "conference");
        assert_eq!(room.bounds.center, Vec3::new(15.0, 0.0, 0.0));
        assert_eq!(room.anchor_pose.position, Vec3::new(15.0, 4.0, -7.0));
        assert_eq!(manifest.rooms[0].events[0].event_id, "evt_003");
    }

    #[test]
    fn anchor_look_at_defaults_to_room_center() {
        let with_default = RoomDefinition {
            id: "lobby".to_string(),
            name: "Lobby".to_string(),
            center: [0.0, 0.0, 0.0],
            size: [10.0, 5.0, 10.0],
            anchor_position: [0.0, 4.5, -8.0],
            anchor_look_at: None,
            events: Vec::new(),
        };
        let explicit = RoomDefinition {
            anchor_look_at: Some([0.0, 0.0, 0.0]),
            ..with_default.clone()
        };
        assert_eq!(
            with_default.to_room().anchor_pose,
            explicit.to_room().anchor_pose
        );
    }
}
