//! Loopline engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the demo binary:
//! window/event loop, device layer, input translation, frame timing, and the
//! line renderer.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
