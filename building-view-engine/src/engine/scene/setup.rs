use bevy::prelude::*;

use crate::engine::scene::highlight::RoomVisual;
use crate::engine::scene::rooms::RoomRegistry;

/// Cycled per room in registration order so the scene reads at a glance.
const ROOM_COLOURS: [Color; 4] = [
    Color::srgb(0.55, 0.65, 0.80),
    Color::srgb(0.72, 0.55, 0.55),
    Color::srgb(0.56, 0.74, 0.58),
    Color::srgb(0.78, 0.72, 0.52),
];

/// Placeholder geometry for the catalog: one cuboid per room plus a floor.
/// Just enough scene for taps to have something to land on; real scene
/// authoring stays outside this crate.
pub fn spawn_building_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    registry: Res<RoomRegistry>,
) {
    let floor_level = registry
        .all()
        .map(|room| room.bounds.min().y)
        .fold(0.0_f32, f32::min);

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(80.0, 80.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.35, 0.38),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, floor_level - 0.05, 0.0),
    ));

    for (index, room) in registry.all().enumerate() {
        let size = room.bounds.size;
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: ROOM_COLOURS[index % ROOM_COLOURS.len()],
                perceptual_roughness: 0.9,
                ..default()
            })),
            Transform::from_translation(room.bounds.center),
            RoomVisual {
                room_id: room.id.clone(),
            },
        ));
    }

    info!("Spawned {} room markers", registry.len());
}
