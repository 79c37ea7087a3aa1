//! Windowless platform that replays scripted input

use std::collections::VecDeque;

use glam::Vec2;

use super::Platform;
use crate::renderer::DrawCommand;
use crate::renderer::shapes::tessellate;
use crate::renderer::vertex::as_bytes;
use crate::sim::{Arena, InputEvent, Key, MouseButton};

/// Replays events at fixed frame numbers; frames are tessellated and measured,
/// then dropped
#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    /// (frame, event), sorted by frame
    script: VecDeque<(u64, InputEvent)>,
    /// Frames polled so far
    frame: u64,
    pub frames_presented: u64,
    /// Command count of the most recent frame
    pub last_frame_len: usize,
    /// Triangle-list size of the most recent frame
    pub last_vertex_count: usize,
    /// Bytes a GPU upload of the most recent frame would take
    pub last_upload_bytes: usize,
    pub fullscreen: bool,
}

impl HeadlessPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform that delivers each event on the given frame (0-based poll count)
    pub fn with_script(mut script: Vec<(u64, InputEvent)>) -> Self {
        script.sort_by_key(|(frame, _)| *frame);
        Self {
            script: script.into(),
            ..Self::default()
        }
    }

    /// Events not yet delivered
    pub fn pending(&self) -> usize {
        self.script.len()
    }
}

impl Platform for HeadlessPlatform {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        while let Some((frame, event)) = self.script.front() {
            if *frame > self.frame {
                break;
            }
            events.push(*event);
            self.script.pop_front();
        }
        self.frame += 1;
        events
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        if self.fullscreen != fullscreen {
            log::info!("Fullscreen {}", if fullscreen { "on" } else { "off" });
        }
        self.fullscreen = fullscreen;
    }

    fn present(&mut self, frame: &[DrawCommand]) {
        let vertices = tessellate(frame);
        self.frames_presented += 1;
        self.last_frame_len = frame.len();
        self.last_vertex_count = vertices.len();
        self.last_upload_bytes = as_bytes(&vertices).len();
        log::trace!(
            "Presented frame {} ({} commands, {} vertices)",
            self.frames_presented,
            frame.len(),
            vertices.len()
        );
    }
}

/// Scripted session exercising every input: clicks, spawns, debug and pause
pub fn demo_script(arena: &Arena) -> Vec<(u64, InputEvent)> {
    let center = arena.center();
    let corner = Vec2::new(arena.width * 0.25, arena.height * 0.25);
    vec![
        (
            60,
            InputEvent::MouseButtonDown {
                button: MouseButton::Left,
                position: center,
            },
        ),
        (120, InputEvent::KeyDown(Key::SpawnBody)),
        (121, InputEvent::KeyDown(Key::SpawnBody)),
        (180, InputEvent::KeyDown(Key::ToggleDebug)),
        (
            240,
            InputEvent::MouseButtonDown {
                button: MouseButton::Right,
                position: corner,
            },
        ),
        (300, InputEvent::KeyDown(Key::Space)),
        (360, InputEvent::KeyDown(Key::Space)),
        (420, InputEvent::KeyDown(Key::ToggleDebug)),
    ]
}
