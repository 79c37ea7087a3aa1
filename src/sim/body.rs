//! Caps: circular bodies with their own kinematic state

use std::fmt;

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::rng::RandomSource;
use super::vector::{Vector2, direction_to};
use crate::consts::*;
use crate::settings::Settings;

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized RGBA for vertex buffers
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Whether an impulse pulls a cap toward the point or pushes it away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpulseMode {
    Attract,
    Repel,
}

/// Tunables for [`Body::update`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    pub max_speed: f32,
    /// Acceleration applied while moving (negative)
    pub deceleration: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            max_speed: MAX_SPEED,
            deceleration: DECELERATION,
        }
    }
}

/// A single cap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Center, kept inside the arena minus radius
    pub position: Vector2,
    /// Heading (unit length)
    pub direction: Vector2,
    /// Scalar speed along `direction`, in [0, max_speed]
    pub speed: f32,
    /// Signed; either the deceleration rate or 0 once at rest
    pub acceleration: f32,
    pub radius: f32,
    mass: f32,
    pub color: Color,
}

impl Body {
    /// Create a cap with explicit state
    ///
    /// `direction` is normalized and `speed` clamped to [0, MAX_SPEED];
    /// `radius` must lie in [MIN_RADIUS, MAX_RADIUS].
    pub fn new(position: Vector2, direction: Vector2, speed: f32, radius: f32, color: Color) -> Self {
        debug_assert!(
            (MIN_RADIUS..=MAX_RADIUS).contains(&radius),
            "cap radius {radius} out of range"
        );
        Self {
            position,
            direction: direction.normalize_or_zero(),
            speed: speed.clamp(0.0, MAX_SPEED),
            acceleration: DECELERATION,
            radius,
            mass: radius / MASS_DIVISOR,
            color,
        }
    }

    /// Create a cap with randomized position, heading, speed, radius and color
    pub fn random(rng: &mut impl RandomSource, arena: &Arena, settings: &Settings) -> Self {
        let radius = rng.range(settings.spawn_radius.min, settings.spawn_radius.max);
        let position = rng.coordinates(arena, radius);
        let direction = rng.direction();
        let speed = rng.range(settings.spawn_speed.min, settings.spawn_speed.max);
        let color = rng.color();
        let mut body = Self::new(position, direction, speed, radius, color);
        body.speed = speed.clamp(0.0, settings.max_speed);
        body.acceleration = settings.deceleration;
        body
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn velocity(&self) -> Vector2 {
        self.direction * self.speed
    }

    /// Advance kinematics by `dt` seconds and keep the cap inside the arena
    pub fn update(&mut self, dt: f32, arena: &Arena, params: &MotionParams) {
        self.speed += self.acceleration * dt;
        if self.speed < 0.0 {
            self.speed = 0.0;
            self.acceleration = 0.0;
        } else if self.speed > 0.0 {
            self.acceleration = params.deceleration;
        }
        if self.speed > params.max_speed {
            self.speed = params.max_speed;
        }

        self.position += self.direction * self.speed * dt;
        self.confine(arena);
    }

    /// Clamp-and-reflect against the arena walls, each axis independently
    pub fn confine(&mut self, arena: &Arena) {
        // x borders
        if self.position.x < self.radius {
            self.position.x = self.radius;
            self.direction.x = -self.direction.x;
        } else if self.position.x > arena.width - self.radius {
            self.position.x = arena.width - self.radius;
            self.direction.x = -self.direction.x;
        }
        // y borders
        if self.position.y < self.radius {
            self.position.y = self.radius;
            self.direction.y = -self.direction.y;
        } else if self.position.y > arena.height - self.radius {
            self.position.y = arena.height - self.radius;
            self.direction.y = -self.direction.y;
        }
    }

    pub fn distance_to(&self, other: &Body) -> f32 {
        self.position.distance(other.position)
    }

    /// Overlap test; touching edges do not count
    pub fn collides_with(&self, other: &Body) -> bool {
        self.distance_to(other) < self.radius + other.radius
    }

    /// Turn toward (or away from) `point` and gain speed
    ///
    /// Speed gained is `min(1, falloff_radius / distance) * strength`, with
    /// the result capped at `max_speed`. Returns false, leaving the cap
    /// untouched, when `point` is exactly at the cap's center.
    pub fn apply_impulse(
        &mut self,
        point: Vector2,
        mode: ImpulseMode,
        falloff_radius: f32,
        strength: f32,
        max_speed: f32,
    ) -> bool {
        let Some(toward) = direction_to(self.position, point) else {
            return false;
        };
        let distance = self.position.distance(point);

        self.direction = match mode {
            ImpulseMode::Attract => toward,
            ImpulseMode::Repel => -toward,
        };
        let gain = (falloff_radius / distance).min(1.0) * strength;
        self.speed = (self.speed + gain).min(max_speed);
        true
    }

    /// Compact one-line form for the debug overlay
    pub fn summary(&self) -> String {
        format!(
            "Cap({}, {})({:.2}, {:.2})",
            self.position.x as i32, self.position.y as i32, self.direction.x, self.direction.y
        )
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cap:")?;
        writeln!(f, "->color={}", self.color)?;
        writeln!(f, "->radius={}", self.radius)?;
        writeln!(f, "->position=({}, {})", self.position.x, self.position.y)?;
        writeln!(f, "->direction=({}, {})", self.direction.x, self.direction.y)?;
        writeln!(f, "->speed={}", self.speed)
    }
}
