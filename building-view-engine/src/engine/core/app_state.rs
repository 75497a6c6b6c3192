use bevy::prelude::*;

/// Lifecycle of the presentation runtime: loading until the building
/// manifest resolves, then running for good.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}
