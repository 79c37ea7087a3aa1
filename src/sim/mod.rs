//! Deterministic simulation module
//!
//! All physics and input handling lives here. This module must be pure and deterministic:
//! - Elapsed time is passed in, never read from a clock
//! - Seeded RNG only
//! - Stable iteration order (insertion order of bodies)
//! - No rendering or platform dependencies

pub mod arena;
pub mod body;
pub mod collision;
pub mod input;
pub mod rng;
pub mod state;
pub mod tick;
pub mod vector;

pub use arena::Arena;
pub use body::{Body, Color, ImpulseMode, MotionParams};
pub use collision::{CollisionMode, resolve_collisions};
pub use input::{InputEvent, Key, MouseButton};
pub use rng::{RandomSource, SeededRng};
pub use state::{Phase, Simulation, Snapshot};
pub use tick::tick;
pub use vector::{Vector2, direction_to, reflect};
