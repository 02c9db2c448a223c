//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (press de-duplication, focus loss)
//! - The 2D drawing surface (browser canvas context)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{InputGate, InputSource};
