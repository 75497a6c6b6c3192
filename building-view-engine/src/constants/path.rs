/// Asset directory holding the building manifest.
pub const RELATIVE_MANIFEST_PATH: &str = "building";
