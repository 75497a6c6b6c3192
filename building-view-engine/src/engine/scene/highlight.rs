use bevy::prelude::*;

use crate::constants::camera_settings::HIGHLIGHT_SECONDS;

const HIGHLIGHT_EMISSIVE: LinearRgba = LinearRgba {
    red: 0.9,
    green: 0.75,
    blue: 0.2,
    alpha: 1.0,
};

/// Marker on a spawned room mesh carrying the catalog id it represents.
#[derive(Component)]
pub struct RoomVisual {
    pub room_id: String,
}

/// Which room currently carries the highlight accent, if any.
///
/// Purely visual: setting it never touches the camera state machine.
#[derive(Resource, Default)]
pub struct ActiveHighlight {
    room_id: Option<String>,
    seconds_left: f32,
}

impl ActiveHighlight {
    pub fn set(&mut self, room_id: String) {
        self.room_id = Some(room_id);
        self.seconds_left = HIGHLIGHT_SECONDS;
    }

    pub fn current(&self) -> Option<&str> {
        self.room_id.as_deref()
    }

    fn tick(&mut self, frame_time: f32) {
        if self.room_id.is_none() {
            return;
        }
        self.seconds_left -= frame_time;
        if self.seconds_left <= 0.0 {
            self.room_id = None;
        }
    }
}

/// Pulse the highlighted room's emissive and clear everything else.
pub fn update_room_highlight(
    time: Res<Time>,
    mut highlight: ResMut<ActiveHighlight>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    rooms: Query<(&RoomVisual, &MeshMaterial3d<StandardMaterial>)>,
) {
    highlight.tick(time.delta_secs());
    let pulse = (time.elapsed_secs() * 6.0).sin() * 0.35 + 0.65;

    for (visual, material_handle) in &rooms {
        let Some(material) = materials.get_mut(&material_handle.0) else {
            continue;
        };
        let lit = highlight.current() == Some(visual.room_id.as_str());
        material.emissive = if lit {
            HIGHLIGHT_EMISSIVE * pulse
        } else {
            LinearRgba::BLACK
        };
    }
}
