//! Application contract.
//!
//! The runtime drives an `App` once per frame; the app consumes translated
//! input from the frame context and renders through it.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
