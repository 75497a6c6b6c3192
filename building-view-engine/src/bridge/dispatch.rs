use bevy::prelude::*;
use bridge_protocol::commands::ContentCommand;
use bridge_protocol::error::BridgeError;

use crate::bridge::interface::BridgeInterface;
use crate::engine::camera::controller::CameraController;
use crate::engine::scene::highlight::ActiveHighlight;
use crate::engine::scene::rooms::RoomRegistry;
use crate::engine::store::event_store::EventStore;

/// Apply one decoded shell command to engine state.
///
/// Unknown rooms degrade to a logged no-op; the gesture and camera layers
/// never see them as failures.
pub fn handle_content_command(
    command: ContentCommand,
    registry: &RoomRegistry,
    controller: &mut CameraController,
    store: &mut EventStore,
    highlight: &mut ActiveHighlight,
) {
    match command {
        ContentCommand::NavigateToRoom(target) => match registry.lookup(&target.room_id) {
            Some(room) => {
                controller.navigate_to(room.anchor_pose, room.bounds.center);
            }
            None => warn!("{}", BridgeError::UnknownRoom(target.room_id)),
        },
        ContentCommand::HighlightRoom(target) => match registry.lookup(&target.room_id) {
            Some(room) => highlight.set(room.id.clone()),
            None => warn!("{}", BridgeError::UnknownRoom(target.room_id)),
        },
        ContentCommand::RequestEvents => store.push_all(registry),
    }
}

/// Drain the frame's inbound lines and dispatch them in arrival order,
/// synchronously, on this loop's thread. Anything that fails to decode is
/// logged and dropped; the loop never aborts over a bad message.
pub fn dispatch_inbound_commands(
    bridge: Res<BridgeInterface>,
    registry: Res<RoomRegistry>,
    mut controller: ResMut<CameraController>,
    mut store: ResMut<EventStore>,
    mut highlight: ResMut<ActiveHighlight>,
) {
    for line in bridge.drain_incoming() {
        match ContentCommand::from_line(&line) {
            Ok(command) => handle_content_command(
                command,
                &registry,
                &mut controller,
                &mut store,
                &mut highlight,
            ),
            Err(err) => warn!("dropping inbound message: {err}"),
        }
    }
}
