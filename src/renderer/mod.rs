//! Rendering module
//!
//! `Renderer` is the draw surface; `render` decides what is drawn each
//! frame and in which order. Implementations only read entity state.

pub mod headless;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use headless::HeadlessRenderer;

use crate::palette::{self, Color};
use crate::sim::{Ball, Brick, GamePhase, GameState, Item, Pad, PadSize, Particle, Stage};

pub const TITLE_TEXT: &str = "BREAK OUT";
pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const WON_TEXT: &str = "YOU WON";
pub const PAUSED_TEXT: &str = "PAUSED";
/// Shown under every banner
pub const PROMPT_TEXT: &str = "PRESS SPACEBAR, ESC TO PAUSE";

/// A surface the game can draw on. `now` is the frame timestamp in ms.
pub trait Renderer {
    /// Start a frame. `fill` paints the whole surface, `None` clears it.
    fn clear(&mut self, stage: &Stage, fill: Option<Color>);
    /// Rotating striped background behind the title
    fn title_background(&mut self, stage: &Stage, now: f64);
    /// Animated headline plus the key prompt
    fn banner(&mut self, stage: &Stage, text: &str, now: f64);
    fn pad(&mut self, pad: &Pad, now: f64);
    fn ball(&mut self, ball: &Ball, now: f64);
    fn brick(&mut self, brick: &Brick, now: f64);
    fn item(&mut self, item: &Item, now: f64);
    fn particle(&mut self, particle: &Particle, now: f64);
    /// The two side panels outside the playfield
    fn borders(&mut self, stage: &Stage);
    fn lives(&mut self, stage: &Stage, lives: u8);
    /// Seconds left before the throw; `fade` runs 1.0 to 0.0 each second
    fn countdown(&mut self, stage: &Stage, count: i32, fade: f32);
    fn debug_overlay(&mut self, _stage: &Stage, _pad_size: PadSize, _powerful: bool) {}
}

/// Draw one frame of `state`
pub fn render<R, D: Renderer + ?Sized>(state: &GameState<R>, out: &mut D, now: f64, debug: bool) {
    let stage = &state.stage;

    match state.phase {
        GamePhase::Title => {
            out.clear(stage, Some(palette::SCREEN_FILL));
            out.title_background(stage, now);
            out.banner(stage, TITLE_TEXT, now);
        }
        GamePhase::Prepare | GamePhase::Game => {
            out.clear(stage, None);
            playfield(state, out, now);
            if state.phase == GamePhase::Prepare {
                out.countdown(stage, state.countdown, countdown_fade(state, now));
            }
        }
        GamePhase::Paused => {
            out.clear(stage, None);
            playfield(state, out, now);
            out.banner(stage, PAUSED_TEXT, now);
        }
        GamePhase::GameOver => {
            out.clear(stage, Some(palette::SCREEN_FILL));
            out.banner(stage, GAME_OVER_TEXT, now);
        }
        GamePhase::Won => {
            out.clear(stage, Some(palette::SCREEN_FILL));
            out.banner(stage, WON_TEXT, now);
        }
    }

    if debug {
        out.debug_overlay(stage, state.pad.size, state.ball.powerful);
    }
}

fn playfield<R, D: Renderer + ?Sized>(state: &GameState<R>, out: &mut D, now: f64) {
    out.pad(&state.pad, now);
    out.ball(&state.ball, now);
    for brick in state.bricks.iter().filter(|b| !b.destroyed) {
        out.brick(brick, now);
    }
    for item in &state.items {
        out.item(item, now);
    }
    for particle in &state.particles {
        out.particle(particle, now);
    }
    out.borders(&state.stage);
    out.lives(&state.stage, state.lives);
}

fn countdown_fade<R>(state: &GameState<R>, now: f64) -> f32 {
    match state.countdown_started {
        Some(started) => (1.0 - ((now - started) % 1000.0) / 1000.0) as f32,
        None => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ItemKind, Rules};
    use glam::Vec2;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear(Option<Color>),
        Title,
        Banner(String),
        Pad,
        Ball,
        Brick(u32, u32),
        Item,
        Particle,
        Borders,
        Lives(u8),
        Countdown(i32),
        Debug(PadSize, bool),
    }

    /// Records every draw call in order
    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<Call>,
        fades: Vec<f32>,
    }

    impl Renderer for RecordingRenderer {
        fn clear(&mut self, _stage: &Stage, fill: Option<Color>) {
            self.calls.push(Call::Clear(fill));
        }
        fn title_background(&mut self, _stage: &Stage, _now: f64) {
            self.calls.push(Call::Title);
        }
        fn banner(&mut self, _stage: &Stage, text: &str, _now: f64) {
            self.calls.push(Call::Banner(text.to_string()));
        }
        fn pad(&mut self, _pad: &Pad, _now: f64) {
            self.calls.push(Call::Pad);
        }
        fn ball(&mut self, _ball: &Ball, _now: f64) {
            self.calls.push(Call::Ball);
        }
        fn brick(&mut self, brick: &Brick, _now: f64) {
            self.calls.push(Call::Brick(brick.grid_x, brick.grid_y));
        }
        fn item(&mut self, _item: &Item, _now: f64) {
            self.calls.push(Call::Item);
        }
        fn particle(&mut self, _particle: &Particle, _now: f64) {
            self.calls.push(Call::Particle);
        }
        fn borders(&mut self, _stage: &Stage) {
            self.calls.push(Call::Borders);
        }
        fn lives(&mut self, _stage: &Stage, lives: u8) {
            self.calls.push(Call::Lives(lives));
        }
        fn countdown(&mut self, _stage: &Stage, count: i32, fade: f32) {
            self.calls.push(Call::Countdown(count));
            self.fades.push(fade);
        }
        fn debug_overlay(&mut self, _stage: &Stage, pad_size: PadSize, powerful: bool) {
            self.calls.push(Call::Debug(pad_size, powerful));
        }
    }

    fn state() -> GameState {
        let mut state = GameState::new(Stage::new(1024.0, 768.0), Rules::default(), 5);
        state.set_bricks(vec![
            Brick::new(0, 1, false, 1),
            Brick::new(1, 1, false, 1),
            Brick::new(2, 1, false, 1),
        ]);
        state
    }

    #[test]
    fn test_title_screen() {
        let state = state();
        let mut out = RecordingRenderer::default();
        render(&state, &mut out, 0.0, false);
        assert_eq!(
            out.calls,
            vec![
                Call::Clear(Some(palette::SCREEN_FILL)),
                Call::Title,
                Call::Banner(TITLE_TEXT.to_string()),
            ]
        );
    }

    #[test]
    fn test_gameplay_order() {
        let mut state = state();
        state.confirm();
        state.phase = GamePhase::Game;
        state.bricks[1].destroy(true);
        state.items.push(Item::new(Vec2::new(100.0, 100.0), palette::BRICK_PLAIN, ItemKind::Small));
        state.particles.push(Particle::new(Vec2::ZERO, Vec2::ZERO, palette::BALL));

        let mut out = RecordingRenderer::default();
        render(&state, &mut out, 0.0, false);
        assert_eq!(
            out.calls,
            vec![
                Call::Clear(None),
                Call::Pad,
                Call::Ball,
                Call::Brick(0, 1),
                Call::Brick(2, 1),
                Call::Item,
                Call::Particle,
                Call::Borders,
                Call::Lives(3),
            ]
        );
    }

    #[test]
    fn test_prepare_adds_countdown() {
        let mut state = state();
        state.confirm();
        state.countdown = 2;
        state.countdown_started = Some(1000.0);

        let mut out = RecordingRenderer::default();
        render(&state, &mut out, 2250.0, false);
        assert_eq!(out.calls.last(), Some(&Call::Countdown(2)));
        assert_eq!(out.calls[out.calls.len() - 2], Call::Lives(3));
        assert!((out.fades[0] - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_paused_shows_frozen_playfield() {
        let mut state = state();
        state.confirm();
        state.toggle_pause();

        let mut out = RecordingRenderer::default();
        render(&state, &mut out, 0.0, false);
        assert_eq!(out.calls.first(), Some(&Call::Clear(None)));
        assert!(out.calls.contains(&Call::Pad));
        assert_eq!(out.calls.last(), Some(&Call::Banner(PAUSED_TEXT.to_string())));
    }

    #[test]
    fn test_end_screens() {
        let mut state = state();
        let mut out = RecordingRenderer::default();
        state.phase = GamePhase::GameOver;
        render(&state, &mut out, 0.0, false);
        assert_eq!(out.calls[1], Call::Banner(GAME_OVER_TEXT.to_string()));
        assert_eq!(out.calls.len(), 2);

        let mut out = RecordingRenderer::default();
        state.phase = GamePhase::Won;
        render(&state, &mut out, 0.0, false);
        assert_eq!(out.calls[1], Call::Banner(WON_TEXT.to_string()));
    }

    #[test]
    fn test_debug_overlay_last() {
        let mut state = state();
        state.pad.size = PadSize::Large;
        let mut out = RecordingRenderer::default();
        render(&state, &mut out, 0.0, true);
        assert_eq!(out.calls.last(), Some(&Call::Debug(PadSize::Large, false)));
    }
}
