//! # Core Engine Module
//!
//! Shared configuration used by every UI subsystem.

pub mod config;

// Re-export commonly used config types
pub use config::{
    CompatConfig,
    EngineConfig,
    OverlayConfig,
    ShapeConfig,
    UiConfig,
};
pub use crate::config::{Config, ConfigError};
