//! Pairwise collision detection and response between caps
//!
//! Response is deliberately simple: an overlapping cap reflects its heading
//! about the other cap's heading, gets kicked forward to escape the overlap,
//! and changes color. Momentum and energy are not conserved.

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::body::Body;
use super::rng::RandomSource;
use super::vector::{Vector2, reflect};
use crate::consts::COLLISION_NUDGE;

/// How overlapping pairs are visited each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionMode {
    /// Every ordered pair (a, b), so each overlap is resolved twice, once
    /// from each cap's side, using whatever the other cap's heading is at
    /// that moment
    #[default]
    OrderedPairs,
    /// Each unordered pair once; both caps reflect about the other's
    /// heading from before the exchange
    UnorderedPairs,
}

/// Resolve all overlaps among `bodies`
///
/// Returns the number of responses applied (an ordered-pair overlap counts
/// twice). The body set must not change during the pass.
pub fn resolve_collisions(
    bodies: &mut [Body],
    dt: f32,
    mode: CollisionMode,
    arena: &Arena,
    rng: &mut impl RandomSource,
) -> usize {
    match mode {
        CollisionMode::OrderedPairs => resolve_ordered(bodies, dt, arena, rng),
        CollisionMode::UnorderedPairs => resolve_unordered(bodies, dt, arena, rng),
    }
}

fn resolve_ordered(
    bodies: &mut [Body],
    dt: f32,
    arena: &Arena,
    rng: &mut impl RandomSource,
) -> usize {
    let mut responses = 0;
    for i in 0..bodies.len() {
        for j in 0..bodies.len() {
            if i == j || !bodies[i].collides_with(&bodies[j]) {
                continue;
            }
            let axis = bodies[j].direction;
            respond(&mut bodies[i], axis, dt, arena, rng);
            responses += 1;
        }
    }
    responses
}

fn resolve_unordered(
    bodies: &mut [Body],
    dt: f32,
    arena: &Arena,
    rng: &mut impl RandomSource,
) -> usize {
    let mut responses = 0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if !bodies[i].collides_with(&bodies[j]) {
                continue;
            }
            let (head, tail) = bodies.split_at_mut(j);
            let (a, b) = (&mut head[i], &mut tail[0]);
            let (axis_a, axis_b) = (b.direction, a.direction);
            respond(a, axis_a, dt, arena, rng);
            respond(b, axis_b, dt, arena, rng);
            responses += 2;
        }
    }
    responses
}

/// Reflect, kick forward, recolor
fn respond(body: &mut Body, axis: Vector2, dt: f32, arena: &Arena, rng: &mut impl RandomSource) {
    body.direction = reflect(body.direction, axis);
    body.position += body.direction * body.speed * dt * COLLISION_NUDGE;
    body.confine(arena);
    body.color = rng.color();
}
