//! Discrete input events consumed by the simulation

use super::body::ImpulseMode;
use super::vector::Vector2;

/// Keys the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
    ToggleDebug,
    ToggleFullscreen,
    SpawnBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

impl MouseButton {
    /// Left click pulls caps in, right click pushes them away
    pub fn impulse_mode(self) -> ImpulseMode {
        match self {
            MouseButton::Left => ImpulseMode::Attract,
            MouseButton::Right => ImpulseMode::Repel,
        }
    }
}

/// One input event from the platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    MouseButtonDown { button: MouseButton, position: Vector2 },
}
