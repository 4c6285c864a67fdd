//! # UI Configuration
//!
//! All tunables of the UI engine in one serializable structure. Load it with
//! [`Config::load_from_file`] (TOML or RON) or build it in code with the
//! `with_*` setters, then hand it to [`UIManager::with_config`](crate::ui::UIManager::with_config).
//!
//! ## Sections
//!
//! - **Engine**: log level and debug switches
//! - **Overlay**: backdrop color and which host side effects `show` requests
//! - **Shapes**: rounded-corner and texture defaults for new nodes
//! - **Compat**: switches that change legacy tree behaviour

use crate::config::ConfigError;
use crate::ui::color::Color;
use serde::{Deserialize, Serialize};

// Re-export from the config module for convenience
pub use crate::config::Config;

/// # Engine Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log filter passed to `env_logger` (e.g. `"info"`, `"ui_engine=debug"`)
    pub log_level: String,
    /// Whether to enable debug features
    pub debug_mode: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            debug_mode: cfg!(debug_assertions),
        }
    }

    /// Set log level
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable debug mode
    #[must_use]
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_mode = enabled;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Overlay Configuration
///
/// Defaults for full-screen modal overlays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Backdrop fill drawn over the whole viewport
    pub backdrop_color: Color,
    /// Ask the host to hide chat while an overlay is shown
    pub suppress_chat: bool,
    /// Raise the HUD-suppressed flag while an overlay is shown
    pub hide_hud: bool,
}

impl OverlayConfig {
    /// Create a new overlay configuration
    pub fn new() -> Self {
        Self {
            backdrop_color: Color::rgba(0, 0, 0, 0.8),
            suppress_chat: true,
            hide_hud: true,
        }
    }

    /// Set backdrop color
    #[must_use]
    pub fn with_backdrop_color(mut self, color: Color) -> Self {
        self.backdrop_color = color;
        self
    }

    /// Configure host side effects
    #[must_use]
    pub fn with_side_effects(mut self, suppress_chat: bool, hide_hud: bool) -> Self {
        self.suppress_chat = suppress_chat;
        self.hide_hud = hide_hud;
        self
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Shape Configuration
///
/// Defaults applied when rectangles are created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Corner radius of rounded rectangles in pixels
    pub corner_radius: i32,
    /// Fill segments per rounded corner
    pub corner_segments: u32,
    /// Sampled texture region (texels)
    pub region_size: (f64, f64),
    /// Full texture size (texels)
    pub texture_size: (f64, f64),
}

impl ShapeConfig {
    /// Create a new shape configuration
    pub fn new() -> Self {
        Self {
            corner_radius: 8,
            corner_segments: 16,
            region_size: (256.0, 256.0),
            texture_size: (256.0, 256.0),
        }
    }

    /// Set corner radius and segment count
    #[must_use]
    pub fn with_corners(mut self, radius: i32, segments: u32) -> Self {
        self.corner_radius = radius;
        self.corner_segments = segments;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.corner_radius < 0 {
            return Err("Corner radius cannot be negative".to_string());
        }
        if self.corner_segments == 0 {
            return Err("Rounded corners need at least one segment".to_string());
        }
        if self.texture_size.0 <= 0.0 || self.texture_size.1 <= 0.0 {
            return Err("Texture size must be positive".to_string());
        }
        Ok(())
    }
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Compatibility Configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatConfig {
    /// When true, `add_child` removes the child from its previous parent's
    /// list first. When false (legacy), the old parent keeps a stale entry.
    pub detach_on_add: bool,
}

/// # Complete UI Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Overlay defaults
    pub overlay: OverlayConfig,
    /// Shape defaults
    pub shapes: ShapeConfig,
    /// Compatibility switches
    pub compat: CompatConfig,
}

impl UiConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable safe re-parenting for `add_child`
    #[must_use]
    pub fn with_detach_on_add(mut self, enabled: bool) -> Self {
        self.compat.detach_on_add = enabled;
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shapes.validate().map_err(ConfigError::Invalid)?;
        if self.engine.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("Log level cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Config for UiConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = UiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.shapes.corner_radius, 8);
        assert_eq!(config.overlay.backdrop_color.alpha_byte(), 204);
        assert!(!config.compat.detach_on_add);
    }

    #[test]
    fn test_invalid_shapes_rejected() {
        let mut config = UiConfig::default();
        config.shapes = config.shapes.with_corners(4, 0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: UiConfig = toml::from_str(
            r#"
            [compat]
            detach_on_add = true

            [shapes]
            corner_radius = 3
            "#,
        )
        .unwrap();
        assert!(config.compat.detach_on_add);
        assert_eq!(config.shapes.corner_radius, 3);
        assert_eq!(config.shapes.corner_segments, 16);
        assert_eq!(config.engine.log_level, "info");
    }

    #[test]
    fn test_save_and_load_ron() {
        let path = std::env::temp_dir().join(format!("ui_engine_config_{}.ron", std::process::id()));
        let config = UiConfig::new().with_detach_on_add(true);
        config.save_to_file(&path).unwrap();

        let loaded = UiConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("ui_engine_definitely_missing.toml");
        let loaded = UiConfig::load_or_default(&path).unwrap();
        assert_eq!(loaded, UiConfig::default());
    }
}
