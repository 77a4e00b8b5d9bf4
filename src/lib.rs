//! Breakout - a paddle, a ball and a wall of bricks
//!
//! Core modules:
//! - `sim`: Simulation core (geometry, entities, per-frame update, state machine)
//! - `platform`: Host-facing pieces (keyboard gateway)
//! - `renderer`: Render collaborator trait and the per-state draw order
//! - `game`: Frame driver tying input, update and render together
//! - `settings`: Data-driven configuration

pub mod game;
pub mod palette;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use palette::Color;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulated frame length for hosts without a display clock (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Brick grid
    pub const BRICK_WIDTH: f32 = 50.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_COLUMNS: u32 = 15;
    pub const BRICK_ROWS: u32 = 10;
    /// Distance from the top of the stage to the first brick row's centre
    pub const BRICK_TOP_MARGIN: f32 = 50.0;
    /// Grid column that sits right of the stage centre line
    pub const BRICK_CENTER_COLUMN: f32 = 7.0;
    /// Half the playfield width, in brick columns (brick + 1px gap)
    pub const PLAYFIELD_HALF_COLUMNS: f32 = 9.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 5.0;

    /// Pad defaults
    pub const PAD_WIDTH: f32 = 100.0;
    pub const PAD_WIDTH_LARGE: f32 = 200.0;
    pub const PAD_WIDTH_SMALL: f32 = 50.0;
    pub const PAD_HEIGHT: f32 = 10.0;
    /// Pad centre line as a fraction of stage height
    pub const PAD_POS_Y: f32 = 0.9;
    pub const PAD_FRICTION: f32 = 0.9;
    /// Velocity added per frame while a direction key is held
    pub const PAD_IMPULSE: f32 = 1.0;
    /// Fraction of the remaining width difference closed per frame
    pub const PAD_RESIZE_RATE: f32 = 0.1;

    /// Falling power-ups
    pub const ITEM_SIZE: f32 = 20.0;
    pub const ITEM_FALL_SPEED: f32 = 3.0;

    /// Particles
    pub const PARTICLE_SIZE: f32 = 4.0;
    /// Spawn velocity is drawn from [-SPREAD/2, SPREAD/2] per axis
    pub const PARTICLE_SPREAD: f32 = 5.0;
    pub const PARTICLE_DECAY: f32 = 0.1;
    pub const BURST_SIZE: usize = 10;
}
