// src/input/mod.rs

//! Per-frame keyboard and mouse state.
//!
//! The state keeps a `current` and a `previous` snapshot. At the start of each
//! frame `current` is copied into `previous` and then the frame's events are
//! applied to `current`, so edge queries ("pressed this frame", "released this
//! frame") compare the two snapshots.

#[cfg(test)]
mod tests;

use log::trace;

use crate::display::{DisplayEvent, Viewport};
use crate::geometry::Point;
use crate::keys::{KeyCode, MouseButton, MouseButtons, KEY_COUNT};

#[derive(Debug, Clone)]
pub struct InputState {
    keys: [bool; KEY_COUNT],
    prev_keys: [bool; KEY_COUNT],
    buttons: MouseButtons,
    prev_buttons: MouseButtons,
    position: Point,
    delta: Point,
    wheel: i32,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            keys: [false; KEY_COUNT],
            prev_keys: [false; KEY_COUNT],
            buttons: MouseButtons::empty(),
            prev_buttons: MouseButtons::empty(),
            position: Point::default(),
            delta: Point::default(),
            wheel: 0,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots `current` into `previous`. Call once per frame, before the
    /// frame's events are applied.
    pub fn begin_frame(&mut self) {
        self.prev_keys = self.keys;
        self.prev_buttons = self.buttons;
    }

    /// Folds one window event into the current snapshot.
    ///
    /// Mouse positions arrive in window coordinates and are mapped through
    /// `viewport` into backbuffer space. Events that carry no input state are
    /// ignored.
    pub fn apply_event(&mut self, event: &DisplayEvent, viewport: &Viewport) {
        match *event {
            DisplayEvent::KeyDown { repeat: true, .. } => {}
            DisplayEvent::KeyDown { key, repeat: false } => self.keys[key.index()] = true,
            DisplayEvent::KeyUp { key } => self.keys[key.index()] = false,
            DisplayEvent::MouseButtonPress { button } => self.buttons.insert(button.flag()),
            DisplayEvent::MouseButtonRelease { button } => self.buttons.remove(button.flag()),
            DisplayEvent::MouseMove { x, y } => {
                let mapped = viewport.window_to_buffer(x, y);
                self.delta.x += mapped.x - self.position.x;
                self.delta.y += mapped.y - self.position.y;
                self.position = mapped;
                trace!("mouse at {:?}, delta {:?}", self.position, self.delta);
            }
            DisplayEvent::MouseWheel { notches } => self.wheel += notches,
            DisplayEvent::Resize { .. } | DisplayEvent::CloseRequested => {}
        }
    }

    /// Down now, up last frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys[key.index()] && !self.prev_keys[key.index()]
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys[key.index()]
    }

    /// Up now, down last frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        !self.keys[key.index()] && self.prev_keys[key.index()]
    }

    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains(button.flag()) && !self.prev_buttons.contains(button.flag())
    }

    pub fn is_mouse_button_held(&self, button: MouseButton) -> bool {
        self.buttons.contains(button.flag())
    }

    pub fn is_mouse_button_released(&self, button: MouseButton) -> bool {
        !self.buttons.contains(button.flag()) && self.prev_buttons.contains(button.flag())
    }

    /// Cursor position in backbuffer pixels.
    pub fn mouse_position(&self) -> Point {
        self.position
    }

    /// Movement accumulated since the last call; reading resets it.
    pub fn mouse_delta(&mut self) -> Point {
        std::mem::take(&mut self.delta)
    }

    /// Wheel notches accumulated since the last call; reading resets it.
    pub fn mouse_wheel_delta(&mut self) -> i32 {
        std::mem::take(&mut self.wheel)
    }
}
