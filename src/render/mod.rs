//! Rendering collaborators for interactive feedback
//!
//! The core never talks to the GPU. Tools draw world-space lines into a
//! `RenderSurface`; the host flushes a `LineBatch` to the real renderer.

mod context;
mod movement_indicator;
mod surface;

pub use context::RenderContext;
pub use movement_indicator::{IndicatorDirection, MovementIndicator};
pub use surface::{Color, Line, LineBatch, RenderSurface};
