pub mod camera_settings;
pub mod path;
