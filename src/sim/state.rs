//! Simulation state
//!
//! The simulation exclusively owns every cap, the arena and the random
//! source. Bodies never see the simulation; they get bounds as a parameter.

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::body::{Body, ImpulseMode, MotionParams};
use super::rng::{RandomSource, SeededRng};
use super::vector::Vector2;
use crate::settings::Settings;

/// Whether physics advances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// Physics frozen; input and rendering continue
    Paused,
}

/// Serializable view of the physical state, for dumps and debugging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub time_ticks: u64,
    pub elapsed: f64,
    pub arena: Arena,
    pub bodies: Vec<Body>,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Simulation<R = SeededRng> {
    pub settings: Settings,
    pub arena: Arena,
    /// Caps in spawn order
    pub bodies: Vec<Body>,
    pub phase: Phase,
    /// Debug overlay (outlines, velocity lines, labels)
    pub debug: bool,
    /// Requested window mode; the platform applies it
    pub fullscreen: bool,
    /// Physics ticks advanced (paused ticks don't count)
    pub time_ticks: u64,
    /// Simulated seconds advanced
    pub elapsed: f64,
    running: bool,
    pub(crate) rng: R,
}

impl Simulation<SeededRng> {
    /// Create a simulation with `settings.caps_spawned` random caps
    pub fn new(settings: Settings, seed: u64) -> Self {
        log::info!("Simulation seeded with {}", seed);
        Self::with_rng(settings, SeededRng::new(seed))
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Create a simulation drawing from the given random source
    pub fn with_rng(settings: Settings, rng: R) -> Self {
        let mut sim = Self::empty(settings, rng);
        for _ in 0..sim.settings.caps_spawned {
            sim.spawn_body();
        }
        sim
    }

    /// Create a simulation with no caps
    pub fn empty(settings: Settings, rng: R) -> Self {
        Self {
            arena: settings.arena(),
            debug: settings.debug,
            bodies: Vec::with_capacity(settings.caps_spawned),
            settings,
            phase: Phase::Running,
            fullscreen: false,
            time_ticks: 0,
            elapsed: 0.0,
            running: true,
            rng,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Request the loop to end after the current tick
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Stopping after {} ticks", self.time_ticks);
        }
        self.running = false;
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
        };
        log::info!("Simulation {:?}", self.phase);
    }

    /// Append one random cap; only call between ticks
    pub fn spawn_body(&mut self) -> &Body {
        let body = Body::random(&mut self.rng, &self.arena, &self.settings);
        log::debug!("Spawned {}", body.summary());
        log::trace!("{body}");
        self.bodies.push(body);
        &self.bodies[self.bodies.len() - 1]
    }

    /// Impulse every cap toward or away from `point`
    ///
    /// Speeds stay capped at `max_speed`. Caps centered exactly on `point`
    /// are skipped. Returns how many caps were affected.
    pub fn apply_impulse(&mut self, point: Vector2, mode: ImpulseMode) -> usize {
        let falloff = self.settings.impulse_falloff_radius;
        let strength = self.settings.impulse_strength;
        let max_speed = self.settings.max_speed;
        let mut affected = 0;
        for body in &mut self.bodies {
            if body.apply_impulse(point, mode, falloff, strength, max_speed) {
                affected += 1;
            } else {
                log::trace!("Skipped impulse for cap centered on ({}, {})", point.x, point.y);
            }
        }
        log::debug!("{:?} impulse at ({}, {}) moved {} caps", mode, point.x, point.y, affected);
        affected
    }

    pub fn motion_params(&self) -> MotionParams {
        self.settings.motion_params()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            time_ticks: self.time_ticks,
            elapsed: self.elapsed,
            arena: self.arena,
            bodies: self.bodies.clone(),
        }
    }

    /// Pretty-printed JSON of [`Self::snapshot`]
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}
