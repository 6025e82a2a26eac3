//! Game settings and preferences
//!
//! Stored as JSON next to the binary; every field has a default so partial
//! files are fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{FALL_MARGIN, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::loader;
use crate::sim::Viewport;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    /// Visible width in world pixels
    pub viewport_width: f32,
    /// Visible height in world pixels
    pub viewport_height: f32,
    /// How far below the screen the player may fall before the run ends
    pub fall_margin: f32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            fall_margin: FALL_MARGIN,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Simulation view of the screen settings
    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.viewport_width,
            height: self.viewport_height,
            fall_margin: self.fall_margin,
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match loader::read_json::<Settings>(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> crate::Result<()> {
        loader::write_json(path, self)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
