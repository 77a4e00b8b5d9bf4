//! Game state and session lifecycle
//!
//! Everything the simulation mutates lives in one `GameState`, passed
//! explicitly to `tick` and to the renderer.

use glam::Vec2;
use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Ball, Brick, Item, Pad, PadSize, Particle};
use super::stage::Stage;
use crate::consts::*;
use crate::palette::Color;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the confirm key
    Title,
    /// Countdown before the throw; ball rides on the pad
    Prepare,
    /// Active gameplay
    Game,
    GameOver,
    Won,
    Paused,
}

impl GamePhase {
    /// Phases that advance the simulation
    pub fn is_running(self) -> bool {
        matches!(self, GamePhase::Prepare | GamePhase::Game)
    }

    pub fn is_finished(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}

/// Edge-triggered commands bound to key releases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Start a game from the title, or leave a finished game
    Confirm,
    TogglePause,
    // Debug toggles
    ToggleLarge,
    ToggleSmall,
    TogglePowerBall,
}

/// Gameplay tunables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub starting_lives: u8,
    /// Seconds of countdown before each throw
    pub countdown_secs: u32,
    /// Chance that a destroyed brick drops an item
    pub item_drop_chance: f32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            countdown_secs: 3,
            item_drop_chance: 0.15,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    pub rules: Rules,
    pub stage: Stage,
    pub phase: GamePhase,
    pub paused: bool,
    pub lives: u8,
    /// Seconds left before the throw (PREPARE only)
    pub countdown: i32,
    /// Timestamp (ms) the current countdown started
    pub countdown_started: Option<f64>,
    /// Fixed at construction; undestructible bricks don't count
    pub destructible_bricks: usize,
    /// Recounted during every brick sweep
    pub destroyed_bricks: usize,
    pub pad: Pad,
    pub ball: Ball,
    pub bricks: Vec<Brick>,
    pub items: Vec<Item>,
    pub particles: Vec<Particle>,
    /// Random source for throws, drops, item kinds and particles
    pub rng: R,
}

impl GameState<Pcg32> {
    /// Create a new game state with a seeded generator
    pub fn new(stage: Stage, rules: Rules, seed: u64) -> Self {
        Self::with_rng(stage, rules, Pcg32::seed_from_u64(seed))
    }
}

impl<R: RngCore> GameState<R> {
    /// Create a new game state on the title screen using `rng`
    pub fn with_rng(stage: Stage, rules: Rules, rng: R) -> Self {
        let bricks = brick_wall();
        let destructible_bricks = bricks.iter().filter(|b| !b.undestructible).count();

        let mut state = Self {
            rules,
            stage,
            phase: GamePhase::Title,
            paused: false,
            lives: rules.starting_lives,
            countdown: rules.countdown_secs as i32,
            countdown_started: None,
            destructible_bricks,
            destroyed_bricks: 0,
            pad: Pad::new(&stage),
            ball: Ball::new(&stage),
            bricks,
            items: Vec::new(),
            particles: Vec::new(),
            rng,
        };
        state.resize(stage.width, stage.height);
        state
    }

    /// Replace the wall with `bricks` and recount destructible ones
    pub fn set_bricks(&mut self, bricks: Vec<Brick>) {
        self.destructible_bricks = bricks.iter().filter(|b| !b.undestructible).count();
        self.destroyed_bricks = 0;
        self.bricks = bricks;
        for brick in &mut self.bricks {
            brick.set_initial_position(&self.stage);
        }
    }

    /// Dispatch a key-release command
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Confirm => self.confirm(),
            Action::TogglePause => self.toggle_pause(),
            Action::ToggleLarge => self.pad.toggle_size(PadSize::Large),
            Action::ToggleSmall => self.pad.toggle_size(PadSize::Small),
            Action::TogglePowerBall => self.ball.powerful = !self.ball.powerful,
        }
    }

    /// Title starts a new game; a finished game returns to the title
    pub fn confirm(&mut self) {
        match self.phase {
            GamePhase::GameOver | GamePhase::Won => {
                log::info!("Back to title");
                self.phase = GamePhase::Title;
            }
            GamePhase::Title => self.new_game(),
            _ => {}
        }
    }

    /// Toggle pause. Un-pausing always resumes gameplay.
    pub fn toggle_pause(&mut self) {
        if self.phase.is_finished() {
            return;
        }
        self.paused = !self.paused;
        self.phase = if self.paused {
            GamePhase::Paused
        } else {
            // A countdown interrupted by pause never resumes
            self.reset_countdown();
            GamePhase::Game
        };
        log::info!("Paused: {}", self.paused);
    }

    /// Reset the session and enter the countdown
    pub fn new_game(&mut self) {
        self.lives = self.rules.starting_lives;
        self.pad = Pad::new(&self.stage);
        self.ball = Ball::new(&self.stage);
        for brick in &mut self.bricks {
            brick.restore();
        }
        self.destroyed_bricks = 0;
        self.items.clear();
        self.particles.clear();
        self.reset_countdown();
        self.paused = false;
        self.phase = GamePhase::Prepare;
        log::info!(
            "New game: {} lives, {} bricks to clear",
            self.lives,
            self.destructible_bricks
        );
    }

    /// Ball fell out. Either the game ends or the round restarts with
    /// power-ups cleared and falling items blown up.
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            log::info!("Game over");
            self.phase = GamePhase::GameOver;
            return;
        }

        log::debug!("Life lost, {} left", self.lives);
        self.phase = GamePhase::Prepare;
        self.reset_countdown();
        // The pad keeps its position; only its size resets
        self.pad.size = PadSize::Normal;
        self.ball.powerful = false;
        self.ball.set_initial_position(&self.stage);
        while let Some(item) = self.items.pop() {
            self.burst(item.pos, item.color);
        }
    }

    /// Full countdown, restarted on the next PREPARE frame
    pub fn reset_countdown(&mut self) {
        self.countdown = self.rules.countdown_secs as i32;
        self.countdown_started = None;
    }

    /// Spawn a burst of particles at `at`
    pub fn burst(&mut self, at: Vec2, color: Color) {
        burst(&mut self.particles, &mut self.rng, at, color);
    }

    /// Reposition pad, ball and bricks for a new surface size.
    /// Phase, lives and brick damage are untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.stage = Stage::new(width, height);
        self.pad.set_initial_position(&self.stage);
        self.ball.set_initial_position(&self.stage);
        for brick in &mut self.bricks {
            brick.set_initial_position(&self.stage);
        }
        log::debug!("Resized stage to {}x{}", width, height);
    }
}

/// Push `BURST_SIZE` particles at `at`
pub fn burst<R: Rng + ?Sized>(particles: &mut Vec<Particle>, rng: &mut R, at: Vec2, color: Color) {
    particles.extend((0..BURST_SIZE).map(|_| Particle::spawn(at, color, rng)));
}

/// The standard wall: every fifth row is undestructible, even rows take
/// two hits.
pub fn brick_wall() -> Vec<Brick> {
    let mut bricks = Vec::with_capacity((BRICK_COLUMNS * BRICK_ROWS) as usize);
    for y in 0..BRICK_ROWS {
        for x in 0..BRICK_COLUMNS {
            let undestructible = y % 5 == 0;
            let hits = if y % 2 == 0 { 2 } else { 1 };
            bricks.push(Brick::new(x, y, undestructible, hits));
        }
    }
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use crate::sim::entity::ItemKind;

    fn state() -> GameState {
        GameState::new(Stage::new(1024.0, 768.0), Rules::default(), 12345)
    }

    #[test]
    fn test_new_state_on_title() {
        let state = state();
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.lives, 3);
        assert_eq!(state.bricks.len(), 150);
        assert_eq!(state.destructible_bricks, 120);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_confirm_cycle() {
        let mut state = state();
        state.apply(Action::Confirm);
        assert_eq!(state.phase, GamePhase::Prepare);
        // Confirm does nothing mid-game
        state.apply(Action::Confirm);
        assert_eq!(state.phase, GamePhase::Prepare);

        state.phase = GamePhase::Won;
        state.apply(Action::Confirm);
        assert_eq!(state.phase, GamePhase::Title);
    }

    #[test]
    fn test_new_game_resets_session() {
        let mut state = state();
        state.lives = 1;
        state.bricks[20].destroy(true);
        state.pad.size = PadSize::Large;
        state.ball.powerful = true;
        state.burst(Vec2::ZERO, palette::BALL);
        state.countdown = 1;

        state.confirm();
        assert_eq!(state.lives, 3);
        assert!(state.bricks.iter().all(|b| !b.destroyed));
        assert_eq!(state.pad.size, PadSize::Normal);
        assert!(!state.ball.powerful);
        assert!(state.particles.is_empty());
        assert_eq!(state.countdown, 3);
        assert_eq!(state.countdown_started, None);
    }

    #[test]
    fn test_pause_toggle() {
        let mut state = state();
        state.confirm();
        state.countdown = 1;
        state.countdown_started = Some(500.0);
        state.apply(Action::TogglePause);
        assert_eq!(state.phase, GamePhase::Paused);
        assert!(state.paused);
        state.apply(Action::TogglePause);
        assert_eq!(state.phase, GamePhase::Game);
        assert!(!state.paused);
        // Resuming drops the interrupted countdown
        assert_eq!(state.countdown, 3);
        assert_eq!(state.countdown_started, None);
    }

    #[test]
    fn test_pause_ignored_when_finished() {
        let mut state = state();
        state.phase = GamePhase::GameOver;
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.paused);
    }

    #[test]
    fn test_lose_life_explodes_items() {
        let mut state = state();
        state.confirm();
        state.phase = GamePhase::Game;
        state.pad.size = PadSize::Small;
        state.ball.powerful = true;
        state.items.push(Item::new(Vec2::new(50.0, 50.0), palette::BRICK_PLAIN, ItemKind::Large));
        state.items.push(Item::new(Vec2::new(80.0, 50.0), palette::BRICK_TOUGH, ItemKind::Small));

        state.lose_life();
        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, GamePhase::Prepare);
        assert_eq!(state.pad.size, PadSize::Normal);
        assert!(!state.ball.powerful);
        assert!(state.items.is_empty());
        assert_eq!(state.particles.len(), 2 * BURST_SIZE);
    }

    #[test]
    fn test_resize_keeps_progress() {
        let mut state = state();
        state.confirm();
        state.phase = GamePhase::Game;
        state.bricks[30].destroy(false);
        state.lives = 2;

        state.resize(1920.0, 1080.0);
        assert_eq!(state.phase, GamePhase::Game);
        assert_eq!(state.lives, 2);
        assert_eq!(state.bricks[30].hits_to_destroy, 1);
        assert_eq!(state.pad.rect.center_x(), 960.0);
        assert_eq!(state.ball.rect.center(), Vec2::new(960.0, 540.0));
        // Column 7 sits on the centre line
        assert_eq!(state.bricks[7].rect.center_x(), 960.0);
    }

    #[test]
    fn test_debug_toggles() {
        let mut state = state();
        state.apply(Action::ToggleLarge);
        assert_eq!(state.pad.size, PadSize::Large);
        state.apply(Action::ToggleSmall);
        assert_eq!(state.pad.size, PadSize::Small);
        state.apply(Action::TogglePowerBall);
        assert!(state.ball.powerful);
    }

    #[test]
    fn test_wall_layout() {
        let wall = brick_wall();
        let row = |y: u32| wall.iter().filter(move |b| b.grid_y == y);
        assert!(row(0).all(|b| b.undestructible));
        assert!(row(5).all(|b| b.undestructible));
        assert!(row(1).all(|b| !b.undestructible && b.initial_hits_to_destroy == 1));
        assert!(row(2).all(|b| b.initial_hits_to_destroy == 2));
    }
}
