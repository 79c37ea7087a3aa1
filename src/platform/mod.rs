//! Platform abstraction layer
//!
//! The simulation never talks to a window directly. A platform supplies:
//! - Input events, polled once per frame without blocking
//! - Presentation of a frame's draw commands
//! - Window mode changes (fullscreen)
//!
//! Frame pacing lives in [`time`]; [`headless`] is a windowless platform
//! driven by a script, used by the native binary and tests.

pub mod headless;
pub mod time;

pub use headless::HeadlessPlatform;
pub use time::FrameClock;

use crate::renderer::DrawCommand;
use crate::sim::InputEvent;

/// Rendering/input boundary the main loop runs against
pub trait Platform {
    /// Drain every event queued since the last poll
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Switch between windowed and fullscreen
    fn set_fullscreen(&mut self, fullscreen: bool);

    /// Show one frame (clear, draw, present)
    fn present(&mut self, frame: &[DrawCommand]);
}
