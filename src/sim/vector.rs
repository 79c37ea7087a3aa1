//! 2D vector helpers
//!
//! `glam::Vec2` already covers add/sub/scale/length/distance; this adds the
//! two operations the simulation needs on top of it.

pub use glam::Vec2 as Vector2;

/// Reflect a direction about a unit axis
///
/// Standard reflection: r = d - 2(d·n)n. `n` must be unit length
/// (or zero, which leaves `d` unchanged).
#[inline]
pub fn reflect(d: Vector2, n: Vector2) -> Vector2 {
    d - 2.0 * d.dot(n) * n
}

/// Unit vector pointing from `from` to `to`
///
/// Returns `None` when the points coincide, where no direction exists.
#[inline]
pub fn direction_to(from: Vector2, to: Vector2) -> Option<Vector2> {
    (to - from).try_normalize()
}
