//! Caps Game - a window full of bouncing caps
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, input handling)
//! - `renderer`: Draw commands and vertex generation
//! - `platform`: Input/present boundary and frame pacing
//! - `settings`: Data-driven simulation tuning

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{ConfigError, Settings};
pub use sim::{Body, Color, Simulation};

/// Game configuration constants
pub mod consts {
    /// Window caption
    pub const TITLE: &str = "Caps Game";

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;

    /// Frame rate cap for the render loop
    pub const MAX_FPS: u32 = 120;
    /// Fixed timestep used when the loop runs unpaced
    pub const SIM_DT: f32 = 1.0 / MAX_FPS as f32;

    /// Number of caps created at startup
    pub const CAPS_SPAWNED: usize = 120;

    /// Speed decay while a cap is moving (units/s²)
    pub const DECELERATION: f32 = -100.0;
    /// Speed cap (units/s)
    pub const MAX_SPEED: f32 = 1000.0;

    /// Spawn speed range (units/s)
    pub const SPAWN_SPEED_MIN: f32 = 100.0;
    pub const SPAWN_SPEED_MAX: f32 = 300.0;

    /// Radius limits every cap must satisfy
    pub const MIN_RADIUS: f32 = 16.0;
    pub const MAX_RADIUS: f32 = 128.0;
    /// Spawn radius range (subset of the limits above)
    pub const SPAWN_RADIUS_MIN: f32 = 16.0;
    pub const SPAWN_RADIUS_MAX: f32 = 32.0;

    /// Mass is radius / MASS_DIVISOR
    pub const MASS_DIVISOR: f32 = 8.0;

    /// Mouse impulse: full strength inside this distance, falls off as 1/d outside
    pub const IMPULSE_FALLOFF_RADIUS: f32 = 50.0;
    /// Mouse impulse: speed added at full strength
    pub const IMPULSE_STRENGTH: f32 = 250.0;

    /// Collision escape kick multiplier (distance = speed * dt * this)
    pub const COLLISION_NUDGE: f32 = 2.0;

    /// Debug velocity line is speed / this long
    pub const DEBUG_VELOCITY_SCALE: f32 = 4.0;
}
