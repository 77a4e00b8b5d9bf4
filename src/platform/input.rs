//! Keyboard state table and key-release bindings
//!
//! The host forwards raw key codes; the simulation polls held keys through
//! `is_down` and receives edge-triggered commands from `key_up`.

use std::collections::HashMap;

use crate::sim::Action;

/// Browser `keyCode` values
pub type KeyCode = u32;

/// Key codes the game knows about
pub mod key {
    use super::KeyCode;

    pub const ENTER: KeyCode = 13;
    pub const ESCAPE: KeyCode = 27;
    pub const SPACE: KeyCode = 32;

    pub const NUM_0: KeyCode = 48;
    pub const NUM_1: KeyCode = 49;
    pub const NUM_2: KeyCode = 50;
    pub const NUM_3: KeyCode = 51;
    pub const NUM_4: KeyCode = 52;
    pub const NUM_5: KeyCode = 53;
    pub const NUM_6: KeyCode = 54;
    pub const NUM_7: KeyCode = 55;
    pub const NUM_8: KeyCode = 56;
    pub const NUM_9: KeyCode = 57;

    pub const LEFT: KeyCode = 37;
    pub const UP: KeyCode = 38;
    pub const RIGHT: KeyCode = 39;
    pub const DOWN: KeyCode = 40;
}

const KEY_COUNT: usize = 256;

/// Held-key table plus release bindings
#[derive(Debug, Clone)]
pub struct Keyboard {
    keys: [bool; KEY_COUNT],
    hooks: HashMap<KeyCode, Action>,
    listening: bool,
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Keyboard {
    pub fn new() -> Self {
        Self {
            keys: [false; KEY_COUNT],
            hooks: HashMap::new(),
            listening: false,
        }
    }

    /// Standard bindings: SPACE confirms, ESC pauses, and with `debug`
    /// on, 1/2/3 toggle large pad, small pad and powerful ball
    pub fn with_bindings(debug: bool) -> Self {
        let mut keyboard = Self::new();
        keyboard
            .on(key::SPACE, Action::Confirm)
            .on(key::ESCAPE, Action::TogglePause);
        if debug {
            keyboard
                .on(key::NUM_1, Action::ToggleLarge)
                .on(key::NUM_2, Action::ToggleSmall)
                .on(key::NUM_3, Action::TogglePowerBall);
        }
        keyboard
    }

    /// Start accepting host events
    pub fn start(&mut self) {
        self.listening = true;
    }

    /// Stop accepting host events and release every held key
    pub fn stop(&mut self) {
        self.listening = false;
        self.keys = [false; KEY_COUNT];
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Bind `action` to the release of `code`, replacing any earlier binding
    pub fn on(&mut self, code: KeyCode, action: Action) -> &mut Self {
        self.hooks.insert(code, action);
        self
    }

    pub fn off(&mut self, code: KeyCode) -> &mut Self {
        self.hooks.remove(&code);
        self
    }

    pub fn key_down(&mut self, code: KeyCode) {
        if !self.listening {
            return;
        }
        if let Some(held) = self.keys.get_mut(code as usize) {
            *held = true;
        }
    }

    /// Record a release and return the action bound to it, if any
    pub fn key_up(&mut self, code: KeyCode) -> Option<Action> {
        if !self.listening {
            return None;
        }
        if let Some(held) = self.keys.get_mut(code as usize) {
            *held = false;
        }
        self.hooks.get(&code).copied()
    }

    /// Codes outside the table are never down
    pub fn is_down(&self, code: KeyCode) -> bool {
        self.keys.get(code as usize).copied().unwrap_or(false)
    }

    pub fn is_up(&self, code: KeyCode) -> bool {
        !self.is_down(code)
    }
}
