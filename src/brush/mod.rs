//! Brush system for painting segment labels
//!
//! Commits pointer-derived pixel sets into slice labelmaps and tracks the
//! points of an in-progress stroke.

pub mod config;
pub mod painter;
pub mod footprint;
pub mod session;

// Re-exports
pub use config::{BrushConfig, FootprintShape};
pub use painter::{MaskPainter, BrushMode, PaintOutcome};
pub use footprint::BrushFootprint;
pub use session::BrushSession;
