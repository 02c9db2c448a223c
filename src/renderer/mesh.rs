//! Triangle-list canvas
//!
//! Tessellates canvas calls into a flat `Vertex` list ready to upload to a
//! GPU vertex buffer. Text is not tessellated; it is collected as labels for
//! the host's text pass.

use std::f32::consts::PI;

use glam::{Affine2, Vec2};

use super::vertex::Vertex;
use super::{Canvas, Color};
use crate::sim::collision::Rect;

/// Circle tessellation used when none is specified
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 24;

/// Text queued for a separate text pass
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    /// Center of the text, in surface coordinates
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
}

/// A `Canvas` that produces triangles
#[derive(Debug, Clone)]
pub struct MeshCanvas {
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
    /// Color the surface should be cleared to before drawing the triangles
    pub clear_color: Color,
    circle_segments: u32,
    transform: Affine2,
    stack: Vec<Affine2>,
}

impl Default for MeshCanvas {
    fn default() -> Self {
        Self::new(DEFAULT_CIRCLE_SEGMENTS)
    }
}

impl MeshCanvas {
    pub fn new(circle_segments: u32) -> Self {
        Self {
            vertices: Vec::new(),
            labels: Vec::new(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            circle_segments: circle_segments.max(3),
            transform: Affine2::IDENTITY,
            stack: Vec::new(),
        }
    }

    /// Vertex data as raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    fn push(&mut self, p: Vec2, color: Color) {
        let p = self.transform.transform_point2(p);
        self.vertices.push(Vertex::new(p.x, p.y, color));
    }
}

impl Canvas for MeshCanvas {
    fn clear(&mut self, color: Color) {
        self.vertices.clear();
        self.labels.clear();
        self.clear_color = color;
        self.transform = Affine2::IDENTITY;
        self.stack.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let a = rect.min();
        let c = rect.max();
        let b = Vec2::new(c.x, a.y);
        let d = Vec2::new(a.x, c.y);

        // Two triangles
        self.push(a, color);
        self.push(b, color);
        self.push(c, color);

        self.push(a, color);
        self.push(c, color);
        self.push(d, color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let segments = self.circle_segments;
        for i in 0..segments {
            let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
            let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

            // Triangle from center to edge
            self.push(center, color);
            self.push(center + Vec2::from_angle(theta1) * radius, color);
            self.push(center + Vec2::from_angle(theta2) * radius, color);
        }
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * Affine2::from_translation(offset);
    }

    fn rotate(&mut self, radians: f32) {
        self.transform = self.transform * Affine2::from_angle(radians);
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.labels.push(TextLabel {
            text: text.to_string(),
            pos: self.transform.transform_point2(pos),
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_frame;
    use crate::sim::state::Session;

    const WHITE: Color = [1.0; 4];

    #[test]
    fn test_rect_is_two_triangles() {
        let mut canvas = MeshCanvas::default();
        canvas.fill_rect(Rect::new(10.0, 20.0, 30.0, 40.0), WHITE);
        assert_eq!(canvas.vertices.len(), 6);
        assert_eq!(canvas.vertices[2].position, [40.0, 60.0]);
        assert_eq!(canvas.as_bytes().len(), 6 * Vertex::STRIDE);
    }

    #[test]
    fn test_circle_vertex_count() {
        let mut canvas = MeshCanvas::new(12);
        canvas.fill_circle(Vec2::new(5.0, 5.0), 3.0, WHITE);
        assert_eq!(canvas.vertices.len(), 12 * 3);
        for v in &canvas.vertices {
            let d = Vec2::from(v.position).distance(Vec2::new(5.0, 5.0));
            assert!(d <= 3.0 + 1e-4);
        }
    }

    #[test]
    fn test_transform_stack() {
        let mut canvas = MeshCanvas::default();
        canvas.save();
        canvas.translate(Vec2::new(100.0, 50.0));
        canvas.rotate(PI / 2.0);
        canvas.fill_text("hi", Vec2::new(10.0, 0.0), 12.0, WHITE);
        canvas.restore();
        canvas.fill_text("lo", Vec2::new(10.0, 0.0), 12.0, WHITE);

        let rotated = canvas.labels[0].pos;
        assert!((rotated - Vec2::new(100.0, 60.0)).length() < 1e-4);
        assert_eq!(canvas.labels[1].pos, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_clear_resets_buffers() {
        let mut canvas = MeshCanvas::default();
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), WHITE);
        canvas.clear([0.5, 0.5, 0.5, 1.0]);
        assert!(canvas.vertices.is_empty());
        assert_eq!(canvas.clear_color, [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_full_frame_tessellates() {
        let session = Session::default();
        let mut canvas = MeshCanvas::default();
        draw_frame(&session, &mut canvas);
        assert!(!canvas.vertices.is_empty());
        assert_eq!(canvas.vertices.len() % 3, 0);
        assert!(!canvas.labels.is_empty());
    }
}
