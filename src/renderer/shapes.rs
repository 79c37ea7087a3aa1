//! Triangle-list generation for draw commands

use glam::Vec2;
use std::f32::consts::TAU;

use super::DrawCommand;
use super::vertex::Vertex;

/// Width of outlines and debug lines, in pixels
pub const STROKE_WIDTH: f32 = 1.0;

/// Segment count that keeps edges smooth without wasting triangles on small caps
pub fn segments_for(radius: f32) -> u32 {
    ((radius * 0.75) as u32).clamp(12, 96)
}

/// Point on a circle at angle `theta`
#[inline]
fn rim(center: Vec2, radius: f32, theta: f32) -> Vec2 {
    center + Vec2::new(theta.cos(), theta.sin()) * radius
}

/// Generate vertices for a filled circle (triangle fan unrolled into a list)
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let p1 = rim(center, radius, (i as f32 / segments as f32) * TAU);
        let p2 = rim(center, radius, ((i + 1) as f32 / segments as f32) * TAU);

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        let inner1 = rim(center, inner_radius, theta1);
        let outer1 = rim(center, outer_radius, theta1);
        let inner2 = rim(center, inner_radius, theta2);
        let outer2 = rim(center, outer_radius, theta2);

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Generate vertices for a line segment as a thin quad
///
/// Degenerate (zero-length) lines produce no vertices.
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let Some(dir) = (to - from).try_normalize() else {
        return Vec::new();
    };
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = from + perp;
    let b1 = from - perp;
    let a2 = to + perp;
    let b2 = to - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Tessellate a frame's geometry into one triangle list
///
/// `Clear` and `Text` are left to the backend (see [`clear_color`]).
pub fn tessellate(commands: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for command in commands {
        match command {
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => vertices.extend(circle(*center, *radius, color.to_rgba(), segments_for(*radius))),
            DrawCommand::OutlineCircle {
                center,
                radius,
                color,
            } => vertices.extend(ring(
                *center,
                radius - STROKE_WIDTH,
                *radius,
                color.to_rgba(),
                segments_for(*radius),
            )),
            DrawCommand::Line { from, to, color } => {
                vertices.extend(line(*from, *to, STROKE_WIDTH, color.to_rgba()))
            }
            DrawCommand::Clear(_) | DrawCommand::Text { .. } => {}
        }
    }
    vertices
}

/// Background color of the frame, if it starts with a clear
pub fn clear_color(commands: &[DrawCommand]) -> Option<[f32; 4]> {
    match commands.first() {
        Some(DrawCommand::Clear(color)) => Some(color.to_rgba()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Anchor;
    use crate::sim::Color;

    #[test]
    fn test_circle_vertices_on_rim() {
        let center = Vec2::new(50.0, 50.0);
        let vertices = circle(center, 20.0, [1.0; 4], 16);
        assert_eq!(vertices.len(), 48);
        for tri in vertices.chunks(3) {
            assert_eq!(tri[0].position, [50.0, 50.0]);
            let edge = Vec2::from(tri[1].position);
            assert!((edge.distance(center) - 20.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_line_width() {
        let vertices = line(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, [1.0; 4]);
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0].position, [0.0, 1.0]);
        assert_eq!(vertices[1].position, [0.0, -1.0]);

        assert!(line(Vec2::ONE, Vec2::ONE, 2.0, [1.0; 4]).is_empty());
    }

    #[test]
    fn test_tessellate_skips_clear_and_text() {
        let commands = vec![
            DrawCommand::Clear(Color::WHITE),
            DrawCommand::FillCircle {
                center: Vec2::new(100.0, 100.0),
                radius: 16.0,
                color: Color::RED,
            },
            DrawCommand::Text {
                text: "2.0".into(),
                position: Vec2::ZERO,
                anchor: Anchor::Center,
                color: Color::BLACK,
            },
        ];

        let vertices = tessellate(&commands);
        assert_eq!(vertices.len(), (segments_for(16.0) * 3) as usize);
        assert!(vertices.iter().all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
        assert_eq!(clear_color(&commands), Some([1.0; 4]));
    }
}
