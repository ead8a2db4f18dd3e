//! Editor configuration
//!
//! Stored as RON. Every field has a default, so a partial file only
//! overrides what it names.

use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::render::Color;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

/// Grid settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Grid size exponent; actual spacing is 2^size
    pub size: u8,
    pub snap: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { size: 4, snap: true }
    }
}

/// Camera projection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub default_point_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 90.0,
            near: 10.0,
            far: 10000.0,
            default_point_distance: 256.0,
        }
    }
}

/// Move tool tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveToolConfig {
    /// Below this `|ray.z|` the cursor ray counts as looking horizontally
    pub vertical_threshold: f32,
    /// Screen offset of the movement indicator from the cursor (right, up)
    pub indicator_offset: (f32, f32),
    /// Arrow length of the movement indicator in world units
    pub indicator_size: f32,
}

impl Default for MoveToolConfig {
    fn default() -> Self {
        Self {
            vertical_threshold: 0.2,
            indicator_offset: (20.0, 20.0),
            indicator_size: 8.0,
        }
    }
}

/// Renderer colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub indicator: Color,
    pub indicator_outline: Color,
    pub background: Color,
    pub entity_bounds: Color,
    pub selected_entity_bounds: Color,
    /// Translucency of grid lines
    pub grid_alpha: f32,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            indicator: Color::new(1.0, 1.0, 1.0, 1.0),
            indicator_outline: Color::new(0.0, 0.0, 0.0, 1.0),
            background: Color::new(0.0, 0.0, 0.0, 0.0),
            entity_bounds: Color::new(0.5, 0.5, 0.5, 1.0),
            selected_entity_bounds: Color::new(1.0, 0.0, 0.0, 1.0),
            grid_alpha: 0.15,
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub grid: GridConfig,
    pub camera: CameraConfig,
    pub move_tool: MoveToolConfig,
    pub colors: ColorConfig,
    /// Maximum number of undoable units kept
    pub history_limit: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            camera: CameraConfig::default(),
            move_tool: MoveToolConfig::default(),
            colors: ColorConfig::default(),
            history_limit: 100,
        }
    }
}

impl EditorConfig {
    /// Load configuration from a RON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: EditorConfig = ron::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a RON file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Platform config location (`<config dir>/mapedit/config.ron`)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("mapedit");
            p.push("config.ron");
            p
        })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn default_path() -> Option<PathBuf> {
        None
    }

    /// Load from `default_path()`, falling back to defaults on any failure
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            log::info!("No config at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Failed to load config from {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_preferences() {
        let config = EditorConfig::default();
        assert_eq!(config.grid.size, 4);
        assert!(config.grid.snap);
        assert_eq!(config.camera.fov, 90.0);
        assert_eq!(config.camera.near, 10.0);
        assert_eq!(config.camera.far, 10000.0);
        assert!((config.move_tool.vertical_threshold - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.move_tool.indicator_offset, (20.0, 20.0));
        assert!((config.colors.grid_alpha - 0.15).abs() < f32::EPSILON);
        assert_eq!(config.history_limit, 100);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.ron");

        let mut config = EditorConfig::default();
        config.grid.size = 6;
        config.grid.snap = false;
        config.move_tool.vertical_threshold = 0.3;
        config.history_limit = 12;
        config.save(&path).unwrap();

        let loaded = EditorConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        std::fs::write(&path, "(grid: (size: 3), history_limit: 7)").unwrap();

        let loaded = EditorConfig::load(&path).unwrap();
        assert_eq!(loaded.grid.size, 3);
        assert!(loaded.grid.snap);
        assert_eq!(loaded.history_limit, 7);
        assert_eq!(loaded.camera, CameraConfig::default());
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.ron");
        assert!(matches!(EditorConfig::load(&missing), Err(ConfigError::Io(_))));

        let broken = dir.path().join("broken.ron");
        std::fs::write(&broken, "(grid: (size: \"big\"))").unwrap();
        assert!(matches!(EditorConfig::load(&broken), Err(ConfigError::Parse(_))));
    }
}
