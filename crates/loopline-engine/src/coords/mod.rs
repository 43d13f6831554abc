//! Coordinate and color types shared by the runtime and renderers.
//!
//! Canonical CPU space for input is logical pixels (DPI-aware, origin
//! top-left, +X right, +Y down). Line geometry is stored directly in
//! normalized device coordinates, so the conversion happens once, at click
//! time, on the CPU side.

mod color;
mod ndc;

pub use color::ColorRgba;
pub use ndc::window_to_ndc;
