//! Core type aliases and re-exports

pub use glam::{
    Vec2,
    UVec2,
    Affine2,
};

/// Standard Result type for the engine
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;
