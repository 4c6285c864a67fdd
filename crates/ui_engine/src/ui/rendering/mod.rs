//! UI rendering module
//!
//! Backend-agnostic render command capture

pub mod commands;
pub mod recording;

// Re-export commonly used types
pub use commands::UIRenderCommand;
pub use recording::RecordingBackend;
