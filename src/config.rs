use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable naming a character listing to load at startup
pub const LIBRARY_ENV_VAR: &str = "HANZI_PAD_LIBRARY";

/// Raster and pen settings, fixed for the life of a surface except the pen width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Edge length of the square raster in pixels
    pub size: u32,
    pub pen_width: f32,
    /// RGBA
    pub ink: [u8; 4],
    pub background: [u8; 4],
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            size: 300,
            pen_width: 8.0,
            ink: [17, 24, 39, 255],
            background: [255, 255, 255, 255],
        }
    }
}

/// User settings persisted between runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // new fields fall back to their defaults when reading old state
pub struct PadConfig {
    pub surface: SurfaceConfig,
    /// On-screen edge length of the canvas, in points
    pub display_size: f32,
    /// Listing in the hosted API's JSON shape, used instead of the built-in table
    pub library_path: Option<PathBuf>,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceConfig::default(),
            display_size: 320.0,
            library_path: None,
        }
    }
}

impl PadConfig {
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(path) = std::env::var_os(LIBRARY_ENV_VAR) {
            log::info!("{} set, using listing at {:?}", LIBRARY_ENV_VAR, path);
            self.library_path = Some(PathBuf::from(path));
        }
        self
    }
}
