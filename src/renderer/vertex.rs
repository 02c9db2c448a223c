//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use super::Color;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// Bytes per vertex in a packed buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    use crate::renderer::Color;

    pub const SKY: Color = [0.44, 0.77, 0.81, 1.0];
    pub const COLUMN: Color = [0.45, 0.75, 0.18, 1.0];
    pub const COLUMN_CAP: Color = [0.33, 0.58, 0.12, 1.0];
    pub const GROUND: Color = [0.87, 0.84, 0.58, 1.0];
    pub const GROUND_STRIPE: Color = [0.76, 0.71, 0.43, 1.0];
    pub const GRASS: Color = [0.45, 0.75, 0.18, 1.0];
    pub const ACTOR: Color = [0.96, 0.78, 0.26, 1.0];
    pub const ACTOR_WING: Color = [1.0, 0.9, 0.55, 1.0];
    pub const EYE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const PUPIL: Color = [0.0, 0.0, 0.0, 1.0];
    pub const BEAK: Color = [0.95, 0.45, 0.15, 1.0];
    pub const TEXT: Color = [1.0, 1.0, 1.0, 1.0];
    pub const SHADE: Color = [0.0, 0.0, 0.0, 0.45];
}
