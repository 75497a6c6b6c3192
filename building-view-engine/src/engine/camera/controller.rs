use bevy::prelude::*;

use crate::constants::camera_settings::{CAMERA_SETTINGS, CameraSettings, INITIAL_CAMERA_POSITION};
use crate::engine::input::gestures::Intent;
use crate::engine::scene::rooms::RoomRegistry;

/// Position + orientation pair. Value type: copied around, never mutated in
/// place once handed to a room as its anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    /// Pose at `position` oriented toward `target`.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let orientation = Transform::from_translation(position)
            .looking_at(target, Vec3::Y)
            .rotation;
        Self {
            position,
            orientation,
        }
    }

    /// Eased blend between two poses: linear for position, spherical for
    /// orientation.
    fn between(start: &Self, target: &Self, t: f32) -> Self {
        Self {
            position: start.position.lerp(target.position, t),
            orientation: start.orientation.slerp(target.orientation, t),
        }
    }
}

/// The one multi-frame state. Orbiting and zooming are synchronous overlays
/// on `Idle`, applied per intent, so they never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

/// Suspended interpolation state for the transition in flight. Ordinary
/// fields advanced by `tick`, nothing hidden in a coroutine.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub start_pose: Pose,
    pub target_pose: Pose,
    pub elapsed: f32,
}

/// Owns the camera pose and the orbit/zoom/transition state machine.
///
/// Exactly one instance lives on the presentation loop; nothing else writes
/// camera state. Intents and navigation commands both funnel in here, and
/// the rig reads the result out once per frame.
#[derive(Resource)]
pub struct CameraController {
    pose: Pose,
    focus: Vec3,
    orbit_angle: f32,
    zoom_distance: f32,
    transition: Option<Transition>,
    settings: CameraSettings,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(CAMERA_SETTINGS)
    }
}

impl CameraController {
    pub fn new(settings: CameraSettings) -> Self {
        let pose = Pose::looking_at(INITIAL_CAMERA_POSITION, Vec3::ZERO);
        let zoom_distance = INITIAL_CAMERA_POSITION
            .length()
            .clamp(settings.min_zoom, settings.max_zoom);
        Self {
            pose,
            focus: Vec3::ZERO,
            orbit_angle: 0.0,
            zoom_distance,
            transition: None,
            settings,
        }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn focus(&self) -> Vec3 {
        self.focus
    }

    /// Unbounded: consumers wanting visual wraparound apply their own
    /// modulo.
    pub fn orbit_angle(&self) -> f32 {
        self.orbit_angle
    }

    /// Always inside `[min_zoom, max_zoom]`.
    pub fn zoom_distance(&self) -> f32 {
        self.zoom_distance
    }

    pub fn phase(&self) -> Phase {
        if self.transition.is_some() {
            Phase::Transitioning
        } else {
            Phase::Idle
        }
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Spin around the focus point. Dropped while a transition is in
    /// flight.
    pub fn orbit(&mut self, delta_x: f32, frame_time: f32) {
        if self.transition.is_some() {
            debug!("orbit intent dropped during transition");
            return;
        }
        self.orbit_angle += delta_x * self.settings.orbit_speed * frame_time;
    }

    /// Move toward or away from the focus point, clamped to the zoom
    /// range. Dropped while a transition is in flight.
    pub fn zoom(&mut self, delta: f32) {
        if self.transition.is_some() {
            debug!("zoom intent dropped during transition");
            return;
        }
        self.zoom_distance = (self.zoom_distance + delta * self.settings.zoom_speed)
            .clamp(self.settings.min_zoom, self.settings.max_zoom);
    }

    /// Begin an interpolated move to a room anchor.
    ///
    /// At most one transition is ever in flight: a request arriving while
    /// one is running is dropped, not queued and not redirected. Returns
    /// whether the request was accepted.
    pub fn navigate_to(&mut self, target: Pose, focus: Vec3) -> bool {
        if self.transition.is_some() {
            debug!("navigation dropped, transition already in flight");
            return false;
        }
        self.transition = Some(Transition {
            start_pose: self.pose,
            target_pose: target,
            elapsed: 0.0,
        });
        self.focus = focus;
        true
    }

    /// Advance the transition in flight, if any. Called once per frame by
    /// the host loop.
    ///
    /// On reaching the full duration the pose snaps to the target exactly,
    /// leaving no interpolation residue, and the controller returns to
    /// `Idle`.
    pub fn tick(&mut self, frame_time: f32) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        transition.elapsed += frame_time;

        if transition.elapsed >= self.settings.transition_duration {
            self.pose = transition.target_pose;
            self.transition = None;
        } else {
            let t = smoothstep(transition.elapsed / self.settings.transition_duration);
            self.pose = Pose::between(&transition.start_pose, &transition.target_pose, t);
        }
    }
}

fn smoothstep(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

/// Apply one classified intent to the controller. Taps resolve through the
/// room catalog; a target that vanished from it is logged and ignored.
pub fn handle_intent(
    intent: &Intent,
    registry: &RoomRegistry,
    controller: &mut CameraController,
    frame_time: f32,
) {
    match intent {
        Intent::Tap { target } => match registry.lookup(target) {
            Some(room) => {
                controller.navigate_to(room.anchor_pose, room.bounds.center);
            }
            None => warn!("tap on unknown room {target}, ignoring"),
        },
        Intent::Drag { delta } => controller.orbit(delta.x, frame_time),
        Intent::PinchZoom { delta } => controller.zoom(*delta),
    }
}

/// Feed the frame's intents into the controller.
pub fn apply_intents(
    mut intents: EventReader<Intent>,
    mut controller: ResMut<CameraController>,
    registry: Res<RoomRegistry>,
    time: Res<Time>,
) {
    let frame_time = time.delta_secs();
    for intent in intents.read() {
        handle_intent(intent, &registry, &mut controller, frame_time);
    }
}

/// Per-frame transition advance.
pub fn tick_camera(mut controller: ResMut<CameraController>, time: Res<Time>) {
    controller.tick(time.delta_secs());
}
