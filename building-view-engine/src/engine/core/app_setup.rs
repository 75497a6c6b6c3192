use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use bridge_protocol::channel::BridgeEndpoint;

use crate::bridge::dispatch::dispatch_inbound_commands;
use crate::bridge::interface::BridgeInterface;
use crate::constants::camera_settings::INITIAL_CAMERA_POSITION;
use crate::engine::camera::controller::{CameraController, apply_intents, tick_camera};
use crate::engine::camera::rig::sync_camera_transform;
use crate::engine::core::app_state::AppState;
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::gestures::{GestureInterpreter, Intent, gesture_system};
use crate::engine::scene::building_manifest::{
    BuildingManifest, ManifestLoader, resolve_manifest, start_loading,
};
use crate::engine::scene::highlight::{ActiveHighlight, update_room_highlight};
use crate::engine::scene::rooms::RoomRegistry;
use crate::engine::scene::setup::spawn_building_scene;
use crate::engine::store::event_store::EventStore;

#[cfg(target_arch = "wasm32")]
use crate::bridge::interface::{forward_lines_to_page, setup_page_listener};
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::frame_stats::{frame_stats_update, spawn_frame_stats_overlay};

/// Assemble the presentation runtime around its end of the bridge.
///
/// One top-level wiring step: every service the systems need is
/// constructed and inserted here, nothing finds its collaborators later.
pub fn create_app(endpoint: BridgeEndpoint) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers BuildingManifest as a loadable asset type from JSON.
        .add_plugins(JsonAssetPlugin::<BuildingManifest>::new(&["json"]))
        .init_state::<AppState>();

    // The store writes through the bridge on every mutation, so it takes
    // the sender half before the interface owns the endpoint.
    app.insert_resource(EventStore::new(endpoint.sender()))
        .insert_resource(BridgeInterface::new(endpoint))
        .init_resource::<RoomRegistry>()
        .init_resource::<GestureInterpreter>()
        .init_resource::<CameraController>()
        .init_resource::<ActiveHighlight>()
        .init_resource::<ManifestLoader>()
        .add_event::<Intent>();

    app.add_systems(Startup, (setup, start_loading).chain());

    #[cfg(target_arch = "wasm32")]
    app.add_systems(Startup, setup_page_listener);

    app.add_systems(
        Update,
        resolve_manifest.run_if(in_state(AppState::Loading)),
    )
    .add_systems(OnEnter(AppState::Running), spawn_building_scene);

    // Inbound commands first, then the gesture/camera pipeline, then
    // presentation. Order matters within one frame; across frames nothing
    // is buffered.
    app.add_systems(
        Update,
        (
            dispatch_inbound_commands,
            gesture_system,
            apply_intents,
            tick_camera,
            sync_camera_transform,
            update_room_highlight,
        )
            .chain()
            .run_if(in_state(AppState::Running)),
    );

    #[cfg(target_arch = "wasm32")]
    app.add_systems(Update, forward_lines_to_page);

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Startup, spawn_frame_stats_overlay)
            .add_systems(Update, frame_stats_update);
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn setup(mut commands: Commands) {
    spawn_lighting(&mut commands);
    spawn_viewer_camera(&mut commands);
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

fn spawn_viewer_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(INITIAL_CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
