//! GPU rendering subsystem.
//!
//! The line renderer consumes CPU-side vertex slices and issues GPU commands
//! via wgpu. It owns its GPU resources (pipeline, vertex buffer).
//!
//! Convention:
//! - vertex positions are already in NDC; the vertex shader is pass-through.

mod ctx;
mod line;

pub use ctx::{RenderCtx, RenderTarget};
pub use line::{LineRenderer, LineVertex};
