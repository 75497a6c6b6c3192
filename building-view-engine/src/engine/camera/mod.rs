pub mod controller;
pub mod rig;

pub use controller::{CameraController, Phase, Pose};
