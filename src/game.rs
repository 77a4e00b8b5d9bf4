//! Frame driver
//!
//! `Game` is what a host talks to: raw key events in, one `frame` call per
//! display refresh, and a resize hook. Each frame runs exactly one update
//! followed by one render.

use rand::RngCore;
use rand_pcg::Pcg32;

use crate::platform::{KeyCode, Keyboard, key};
use crate::renderer::{Renderer, render};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, Stage, TickInput, tick};

pub struct Game<R = Pcg32> {
    pub state: GameState<R>,
    pub keyboard: Keyboard,
    pub settings: Settings,
}

impl Game<Pcg32> {
    /// New game on the title screen, seeded from the settings or at random
    pub fn new(settings: Settings, width: f32, height: f32) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Game initialized with seed: {}", seed);
        let state = GameState::new(Stage::new(width, height), settings.rules(), seed);
        Self::with_state(settings, state)
    }
}

impl<R: RngCore> Game<R> {
    pub fn with_state(settings: Settings, state: GameState<R>) -> Self {
        let mut keyboard = Keyboard::with_bindings(settings.debug_keys);
        keyboard.start();
        Self {
            state,
            keyboard,
            settings,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Update then render
    pub fn frame<D: Renderer + ?Sized>(&mut self, now: f64, out: &mut D) {
        let input = TickInput {
            left: self.keyboard.is_down(key::LEFT),
            right: self.keyboard.is_down(key::RIGHT),
        };
        tick(&mut self.state, &input, now);
        render(&self.state, out, now, self.settings.debug_keys);
    }

    pub fn key_down(&mut self, code: KeyCode) {
        self.keyboard.key_down(code);
    }

    /// Release a key; a bound command is applied immediately
    pub fn key_up(&mut self, code: KeyCode) {
        if let Some(action) = self.keyboard.key_up(code) {
            log::debug!("Key {} -> {:?}", code, action);
            self.state.apply(action);
        }
    }

    /// Press and release in one go
    pub fn tap(&mut self, code: KeyCode) {
        self.key_down(code);
        self.key_up(code);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_MS;
    use crate::renderer::{HeadlessRenderer, PAUSED_TEXT};
    use crate::sim::PadSize;

    fn game(debug_keys: bool) -> Game {
        let settings = Settings {
            seed: Some(2024),
            debug_keys,
            ..Default::default()
        };
        Game::new(settings, 1024.0, 768.0)
    }

    #[test]
    fn test_space_starts_game() {
        let mut game = game(false);
        let mut out = HeadlessRenderer::new();
        game.frame(0.0, &mut out);
        assert_eq!(game.phase(), GamePhase::Title);

        game.tap(key::SPACE);
        assert_eq!(game.phase(), GamePhase::Prepare);

        let mut now = 0.0;
        while game.phase() == GamePhase::Prepare && now < 5000.0 {
            now += FRAME_MS;
            game.frame(now, &mut out);
        }
        assert_eq!(game.phase(), GamePhase::Game);
        assert!(out.frames > 100);
    }

    #[test]
    fn test_held_key_moves_pad() {
        let mut game = game(false);
        game.tap(key::SPACE);
        let x0 = game.state.pad.rect.pos.x;
        let mut out = HeadlessRenderer::new();

        game.key_down(key::LEFT);
        for i in 0..5 {
            game.frame(i as f64 * FRAME_MS, &mut out);
        }
        assert!(game.state.pad.rect.pos.x < x0);

        game.key_up(key::LEFT);
        let v = game.state.pad.velocity.x;
        game.frame(6.0 * FRAME_MS, &mut out);
        // Friction only, no new impulse
        assert!(game.state.pad.velocity.x > v);
    }

    #[test]
    fn test_escape_pauses() {
        let mut game = game(false);
        game.tap(key::SPACE);
        game.tap(key::ESCAPE);
        assert_eq!(game.phase(), GamePhase::Paused);

        let mut out = HeadlessRenderer::new();
        game.frame(0.0, &mut out);
        assert_eq!(out.last_banner.as_deref(), Some(PAUSED_TEXT));

        game.tap(key::ESCAPE);
        assert_eq!(game.phase(), GamePhase::Game);
    }

    #[test]
    fn test_debug_keys_follow_settings() {
        let mut game = game(false);
        game.tap(key::NUM_1);
        assert_eq!(game.state.pad.size, PadSize::Normal);

        let mut game = self::game(true);
        game.tap(key::NUM_1);
        assert_eq!(game.state.pad.size, PadSize::Large);
        game.tap(key::NUM_3);
        assert!(game.state.ball.powerful);
    }

    #[test]
    fn test_same_seed_same_game() {
        let play = || {
            let mut game = game(false);
            let mut out = HeadlessRenderer::new();
            game.tap(key::SPACE);
            for i in 0..400 {
                game.frame(i as f64 * FRAME_MS, &mut out);
            }
            (game.state.ball.rect, game.state.lives, game.state.particles.len())
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn test_resize_repositions() {
        let mut game = game(false);
        game.resize(800.0, 600.0);
        assert_eq!(game.state.stage, Stage::new(800.0, 600.0));
        assert_eq!(game.state.pad.rect.center_x(), 400.0);
    }
}
