//! Brush configuration (user-facing settings).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Result;

/// Shape of the stamp laid down around each pointer sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintShape {
    #[default]
    Circle,
    Square,
}

/// Brush settings shared by the painter and the stroke session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Drop a slice from the volume once an erase leaves it without labels.
    pub reclaim_empty_slices: bool,
    /// Raise the slice's invalidated flag even when a pass changed no pixel.
    /// Renderers that poll the flag per stroke tick rely on this.
    pub invalidate_unchanged: bool,
    /// Stamp radius in pixels.
    pub footprint_radius: u32,
    /// Stamp shape.
    pub footprint_shape: FootprintShape,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            reclaim_empty_slices: true,
            invalidate_unchanged: true,
            footprint_radius: 3,
            footprint_shape: FootprintShape::Circle,
        }
    }
}

impl BrushConfig {
    /// Save to file (sync)
    pub fn save_sync(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file (sync). Missing fields take their defaults.
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        log::debug!("loaded brush config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;

    #[test]
    fn test_defaults() {
        let config = BrushConfig::default();
        assert!(config.reclaim_empty_slices);
        assert!(config.invalidate_unchanged);
        assert_eq!(config.footprint_radius, 3);
        assert_eq!(config.footprint_shape, FootprintShape::Circle);
    }

    #[test]
    fn test_save_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("brush.json");

        let config = BrushConfig {
            invalidate_unchanged: false,
            footprint_radius: 7,
            footprint_shape: FootprintShape::Square,
            ..Default::default()
        };
        config.save_sync(&path).unwrap();

        let loaded = BrushConfig::load_sync(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: BrushConfig = serde_json::from_str(r#"{ "footprint_shape": "square" }"#).unwrap();
        assert_eq!(config.footprint_shape, FootprintShape::Square);
        assert_eq!(config.footprint_radius, 3);
        assert!(config.reclaim_empty_slices);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BrushConfig::load_sync(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(BrushConfig::load_sync(&path), Err(Error::Config(_))));
    }
}
