//! Per-frame simulation tick
//!
//! One tick applies the frame's input events, then (when running) advances
//! every cap and resolves overlaps.

use super::collision::resolve_collisions;
use super::input::{InputEvent, Key};
use super::rng::RandomSource;
use super::state::{Phase, Simulation};

/// Advance the simulation by `dt` seconds
///
/// Events are applied before any physics, so spawns and impulses land
/// between collision passes. `dt` must be finite and non-negative.
pub fn tick<R: RandomSource>(sim: &mut Simulation<R>, events: &[InputEvent], dt: f32) {
    debug_assert!(dt.is_finite() && dt >= 0.0, "invalid tick delta {dt}");

    for event in events {
        handle_event(sim, event);
    }

    // A quit still lets this tick finish
    if sim.phase == Phase::Paused {
        return;
    }

    sim.time_ticks += 1;
    sim.elapsed += dt as f64;

    let params = sim.motion_params();
    for body in &mut sim.bodies {
        body.update(dt, &sim.arena, &params);
    }

    let contacts = resolve_collisions(
        &mut sim.bodies,
        dt,
        sim.settings.collision_mode,
        &sim.arena,
        &mut sim.rng,
    );
    if contacts > 0 {
        log::trace!("Tick {}: resolved {} contacts", sim.time_ticks, contacts);
    }
}

fn handle_event<R: RandomSource>(sim: &mut Simulation<R>, event: &InputEvent) {
    match *event {
        InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => sim.stop(),
        InputEvent::KeyDown(Key::Space) => sim.toggle_pause(),
        InputEvent::KeyDown(Key::ToggleDebug) => {
            sim.debug = !sim.debug;
            log::info!("Debug overlay: {}", sim.debug);
        }
        InputEvent::KeyDown(Key::ToggleFullscreen) => {
            sim.fullscreen = !sim.fullscreen;
            log::info!("Fullscreen: {}", sim.fullscreen);
        }
        InputEvent::KeyDown(Key::SpawnBody) => {
            sim.spawn_body();
        }
        InputEvent::MouseButtonDown { button, position } => {
            sim.apply_impulse(position, button.impulse_mode());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::settings::Settings;
    use crate::sim::body::{Body, Color};
    use crate::sim::input::MouseButton;
    use crate::sim::rng::SeededRng;
    use crate::sim::vector::Vector2;

    fn empty_sim() -> Simulation {
        let settings = Settings {
            caps_spawned: 0,
            ..Default::default()
        };
        Simulation::empty(settings, SeededRng::new(7))
    }

    #[test]
    fn test_tick_moves_bodies() {
        let mut sim = Simulation::new(Settings::default(), 12345);
        let before = sim.bodies.clone();

        tick(&mut sim, &[], SIM_DT);

        assert_eq!(sim.time_ticks, 1);
        assert!(sim.bodies.iter().zip(&before).any(|(a, b)| a.position != b.position));
    }

    #[test]
    fn test_tick_pause() {
        let mut sim = Simulation::new(Settings::default(), 12345);

        tick(&mut sim, &[InputEvent::KeyDown(Key::Space)], SIM_DT);
        assert_eq!(sim.phase, Phase::Paused);
        let frozen = sim.bodies.clone();

        for _ in 0..10 {
            tick(&mut sim, &[], SIM_DT);
        }
        assert_eq!(sim.bodies, frozen);
        assert_eq!(sim.time_ticks, 0);

        // Unpause
        tick(&mut sim, &[InputEvent::KeyDown(Key::Space)], SIM_DT);
        assert_eq!(sim.phase, Phase::Running);
        assert_eq!(sim.time_ticks, 1);
    }

    #[test]
    fn test_quit_and_escape_stop() {
        let mut sim = empty_sim();
        tick(&mut sim, &[InputEvent::Quit], SIM_DT);
        assert!(!sim.is_running());
        // Tick still completed
        assert_eq!(sim.time_ticks, 1);

        let mut sim = empty_sim();
        tick(&mut sim, &[InputEvent::KeyDown(Key::Escape)], SIM_DT);
        assert!(!sim.is_running());
    }

    #[test]
    fn test_toggles() {
        let mut sim = empty_sim();
        tick(
            &mut sim,
            &[
                InputEvent::KeyDown(Key::ToggleDebug),
                InputEvent::KeyDown(Key::ToggleFullscreen),
            ],
            SIM_DT,
        );
        assert!(sim.debug);
        assert!(sim.fullscreen);
    }

    #[test]
    fn test_spawn_event() {
        let mut sim = empty_sim();
        tick(&mut sim, &[InputEvent::KeyDown(Key::SpawnBody)], SIM_DT);
        assert_eq!(sim.bodies.len(), 1);
        let body = &sim.bodies[0];
        assert!(sim.arena.contains(body.position, body.radius));
    }

    #[test]
    fn test_clicks_attract_and_repel() {
        let mut sim = empty_sim();
        sim.bodies.push(Body::new(
            Vector2::new(100.0, 100.0),
            Vector2::X,
            0.0,
            16.0,
            Color::BLACK,
        ));
        sim.toggle_pause();

        let click = Vector2::new(100.0, 400.0);
        tick(
            &mut sim,
            &[InputEvent::MouseButtonDown {
                button: MouseButton::Left,
                position: click,
            }],
            SIM_DT,
        );
        assert!((sim.bodies[0].direction - Vector2::Y).length() < 1e-6);
        assert!((sim.bodies[0].speed - 50.0 / 300.0 * 250.0).abs() < 1e-3);

        tick(
            &mut sim,
            &[InputEvent::MouseButtonDown {
                button: MouseButton::Right,
                position: click,
            }],
            SIM_DT,
        );
        assert!((sim.bodies[0].direction - Vector2::NEG_Y).length() < 1e-6);
    }

    #[test]
    fn test_paused_clicks_stay_under_max_speed() {
        let mut sim = empty_sim();
        sim.bodies.push(Body::new(
            Vector2::new(100.0, 100.0),
            Vector2::X,
            0.0,
            16.0,
            Color::BLACK,
        ));
        sim.toggle_pause();

        let click = InputEvent::MouseButtonDown {
            button: MouseButton::Right,
            position: Vector2::new(110.0, 100.0),
        };
        for _ in 0..10 {
            tick(&mut sim, &[click], SIM_DT);
            assert!(sim.bodies[0].speed <= sim.settings.max_speed);
        }
        assert_eq!(sim.bodies[0].speed, sim.settings.max_speed);
    }

    #[test]
    fn test_determinism() {
        // Two simulations with the same seed and input produce identical results
        let mut sim1 = Simulation::new(Settings::default(), 99999);
        let mut sim2 = Simulation::new(Settings::default(), 99999);

        let inputs = [
            vec![],
            vec![InputEvent::MouseButtonDown {
                button: MouseButton::Left,
                position: Vector2::new(640.0, 360.0),
            }],
            vec![InputEvent::KeyDown(Key::SpawnBody)],
            vec![],
        ];

        for events in &inputs {
            tick(&mut sim1, events, SIM_DT);
            tick(&mut sim2, events, SIM_DT);
        }

        assert_eq!(sim1.time_ticks, sim2.time_ticks);
        assert_eq!(sim1.bodies, sim2.bodies);
    }
}
