//! Rectangular arena bounds

use serde::{Deserialize, Serialize};

use super::vector::Vector2;
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// The bounded region caps move within, fixed for the simulation's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a circle of `radius` centered at `pos` lies fully inside
    pub fn contains(&self, pos: Vector2, radius: f32) -> bool {
        pos.x >= radius
            && pos.x <= self.width - radius
            && pos.y >= radius
            && pos.y <= self.height - radius
    }

    /// Whether a circle of `radius` fits at all
    pub fn fits(&self, radius: f32) -> bool {
        2.0 * radius <= self.width && 2.0 * radius <= self.height
    }
}
