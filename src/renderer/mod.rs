//! Rendering module
//!
//! The simulation is drawn as a flat list of [`DrawCommand`]s each frame
//! (clear, then draw). Backends either consume the commands directly or
//! tessellate them with [`shapes`] into vertex buffers.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::consts::DEBUG_VELOCITY_SCALE;
use crate::sim::{Color, RandomSource, Simulation};

pub use vertex::Vertex;

/// Where a text command's position sits relative to the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// One drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// One-pixel circle outline
    OutlineCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
    Text {
        text: String,
        position: Vec2,
        anchor: Anchor,
        color: Color,
    },
}

/// Text drawn over the arena while paused
pub const PAUSED_TEXT: &str = "Game is paused";

/// Line height of the debug overlay
const OVERLAY_LINE: f32 = 16.0;

/// Build the draw list for the current simulation state
///
/// `fps` is shown in the debug overlay when available.
pub fn build_frame<R: RandomSource>(sim: &Simulation<R>, fps: Option<f32>) -> Vec<DrawCommand> {
    let per_body = if sim.debug { 4 } else { 1 };
    let mut commands = Vec::with_capacity(sim.bodies.len() * per_body + 4);

    commands.push(DrawCommand::Clear(Color::WHITE));

    for body in &sim.bodies {
        commands.push(DrawCommand::FillCircle {
            center: body.position,
            radius: body.radius,
            color: body.color,
        });
        if sim.debug {
            commands.push(DrawCommand::OutlineCircle {
                center: body.position,
                radius: body.radius,
                color: Color::RED,
            });
            commands.push(DrawCommand::Line {
                from: body.position,
                to: body.position + body.velocity() / DEBUG_VELOCITY_SCALE,
                color: Color::RED,
            });
            commands.push(DrawCommand::Text {
                text: format!("{:.1}", body.mass()),
                position: body.position,
                anchor: Anchor::Center,
                color: Color::BLACK,
            });
        }
    }

    if sim.debug {
        let summary = sim
            .bodies
            .iter()
            .map(|b| b.summary())
            .collect::<Vec<_>>()
            .join(", ");
        commands.push(DrawCommand::Text {
            text: format!("[{summary}]"),
            position: Vec2::new(10.0, 10.0),
            anchor: Anchor::TopLeft,
            color: Color::BLACK,
        });
        if let Some(fps) = fps {
            commands.push(DrawCommand::Text {
                text: format!("{}", fps as u32),
                position: Vec2::new(10.0, 10.0 + OVERLAY_LINE),
                anchor: Anchor::TopLeft,
                color: Color::BLACK,
            });
        }
    }

    if sim.is_paused() {
        commands.push(DrawCommand::Text {
            text: PAUSED_TEXT.to_string(),
            position: sim.arena.center(),
            anchor: Anchor::Center,
            color: Color::BLACK,
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn sim(caps: usize) -> Simulation {
        let settings = Settings {
            caps_spawned: caps,
            ..Default::default()
        };
        Simulation::new(settings, 4242)
    }

    #[test]
    fn test_clear_then_one_circle_per_body() {
        let sim = sim(5);
        let frame = build_frame(&sim, Some(120.0));

        assert_eq!(frame[0], DrawCommand::Clear(Color::WHITE));
        assert_eq!(frame.len(), 6);
        for (cmd, body) in frame[1..].iter().zip(&sim.bodies) {
            assert_eq!(
                *cmd,
                DrawCommand::FillCircle {
                    center: body.position,
                    radius: body.radius,
                    color: body.color,
                }
            );
        }
    }

    #[test]
    fn test_debug_overlay() {
        let mut sim = sim(3);
        sim.debug = true;
        let frame = build_frame(&sim, Some(60.0));

        // clear + 4 per body + summary + fps
        assert_eq!(frame.len(), 1 + 3 * 4 + 2);
        let outlines = frame
            .iter()
            .filter(|c| matches!(c, DrawCommand::OutlineCircle { .. }))
            .count();
        assert_eq!(outlines, 3);
        assert!(frame.iter().any(|c| matches!(
            c,
            DrawCommand::Text { text, anchor: Anchor::TopLeft, .. } if text == "60"
        )));
    }

    #[test]
    fn test_velocity_line_length() {
        let mut sim = sim(1);
        sim.debug = true;
        let body = sim.bodies[0].clone();
        let frame = build_frame(&sim, None);

        let line = frame
            .iter()
            .find_map(|c| match c {
                DrawCommand::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .unwrap();
        assert_eq!(line.0, body.position);
        assert!(((line.1 - line.0).length() - body.speed / 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_paused_banner() {
        let mut sim = sim(0);
        sim.toggle_pause();
        let frame = build_frame(&sim, None);

        assert_eq!(
            frame.last(),
            Some(&DrawCommand::Text {
                text: PAUSED_TEXT.to_string(),
                position: sim.arena.center(),
                anchor: Anchor::Center,
                color: Color::BLACK,
            })
        );
    }
}
