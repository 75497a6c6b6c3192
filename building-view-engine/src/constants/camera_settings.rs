use bevy::prelude::*;

/// Tuning for orbit, zoom, and room-to-room transitions.
#[derive(Debug, Clone, Copy)]
pub struct CameraSettings {
    pub orbit_speed: f32,
    pub zoom_speed: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub transition_duration: f32,
}

pub const CAMERA_SETTINGS: CameraSettings = CameraSettings {
    orbit_speed: 2.0,
    zoom_speed: 0.5,
    min_zoom: 5.0,
    max_zoom: 20.0,
    transition_duration: 1.5,
};

/// Overview vantage before the first navigation.
pub const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 10.0, -15.0);

/// How long a highlight accent stays on a room.
pub const HIGHLIGHT_SECONDS: f32 = 2.0;
