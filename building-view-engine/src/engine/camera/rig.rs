use bevy::prelude::*;

use super::controller::CameraController;

/// Mirror the controller's state onto the Bevy camera transform.
///
/// The controller is the authority; this system is presentation only. The
/// orbit angle yaws the pose around the focus point and the zoom distance
/// rescales the offset from it, so free orbiting composes with whatever
/// anchor pose the last navigation produced.
pub fn sync_camera_transform(
    controller: Res<CameraController>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let pose = controller.pose();
    let yaw = Quat::from_rotation_y(controller.orbit_angle());

    let offset = pose.position - controller.focus();
    // Degenerate anchor sitting on its own focus: fall back to a gentle
    // rear offset rather than dividing by zero.
    let offset = if offset.length_squared() > f32::EPSILON {
        offset
    } else {
        Vec3::new(0.0, 0.5, -1.0)
    };
    let scaled = offset.normalize() * controller.zoom_distance();

    transform.translation = controller.focus() + yaw * scaled;
    transform.rotation = yaw * pose.orientation;
}
