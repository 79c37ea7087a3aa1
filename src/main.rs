//! Caps Game entry point
//!
//! Runs the simulation loop against the headless platform: pace, poll,
//! tick, draw, present.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use clap::Parser;

    use caps_game::consts::{SIM_DT, TITLE};
    use caps_game::platform::headless::demo_script;
    use caps_game::platform::{FrameClock, HeadlessPlatform, Platform};
    use caps_game::renderer::build_frame;
    use caps_game::sim::tick;
    use caps_game::{ConfigError, Settings, Simulation};

    #[derive(Debug, Parser)]
    #[command(version, about = "Bouncing, colliding caps")]
    struct Args {
        /// RNG seed (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,

        /// JSON settings file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Stop after this many frames
        #[arg(long, default_value_t = 600)]
        frames: u64,

        /// Override the number of caps spawned at startup
        #[arg(long)]
        caps: Option<usize>,

        /// Start with the debug overlay on
        #[arg(long)]
        debug: bool,

        /// Step with a fixed timestep instead of sleeping to the frame rate
        #[arg(long)]
        unpaced: bool,

        /// Replay a scripted session of clicks, spawns and pauses
        #[arg(long)]
        demo: bool,

        /// Print the final caps and arena as JSON on stdout
        #[arg(long)]
        dump_state: bool,
    }

    #[derive(Debug, thiserror::Error)]
    pub enum RunError {
        #[error(transparent)]
        Config(#[from] ConfigError),
        #[error("failed to serialize simulation state")]
        Dump(#[from] serde_json::Error),
    }

    fn time_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    pub fn run() -> Result<(), RunError> {
        let args = Args::parse();

        let mut settings = match &args.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(caps) = args.caps {
            settings.caps_spawned = caps;
        }
        settings.debug |= args.debug;
        settings.validate()?;

        let seed = args.seed.unwrap_or_else(time_seed);
        log::info!("{} starting ({} caps)", TITLE, settings.caps_spawned);

        let mut sim = Simulation::new(settings, seed);
        let mut platform = if args.demo {
            HeadlessPlatform::with_script(demo_script(&sim.arena))
        } else {
            HeadlessPlatform::new()
        };
        let mut clock = FrameClock::new(sim.settings.max_fps);
        if !args.unpaced {
            log::info!("Pacing to {:?} per frame", clock.frame_budget());
        }

        let mut frames = 0;
        while sim.is_running() && frames < args.frames {
            let dt = if args.unpaced { SIM_DT } else { clock.tick() };

            let events = platform.poll_events();
            tick(&mut sim, &events, dt);
            platform.set_fullscreen(sim.fullscreen);

            let fps = if args.unpaced { None } else { clock.fps() };
            let frame = build_frame(&sim, fps);
            platform.present(&frame);
            frames += 1;
        }

        log::info!(
            "Finished after {} frames: {} physics ticks, {:.2}s simulated, {} caps",
            platform.frames_presented,
            sim.time_ticks,
            sim.elapsed,
            sim.bodies.len()
        );
        if args.dump_state {
            println!("{}", sim.snapshot_json()?);
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(e) = native::run() {
        log::error!("{e}");
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            log::error!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is the wasm surface
}
